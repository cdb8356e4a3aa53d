//! Number inflection: pluralize, singularize and uncountable detection

use crate::inflections::Inflections;

/// Plural form of `word`
///
/// Not idempotent: an already plural word is treated like any other input,
/// so `pluralize("people")` yields `"peoples"`.
pub fn pluralize(word: &str, inflections: &Inflections) -> String {
    if is_uncountable(word, inflections) {
        word.to_string()
    } else {
        inflections.plurals().apply(word)
    }
}

/// Singular form of `word`
pub fn singularize(word: &str, inflections: &Inflections) -> String {
    if is_uncountable(word, inflections) {
        word.to_string()
    } else {
        inflections.singulars().apply(word)
    }
}

/// Whether `word` has no distinct plural form
///
/// Blank input is uncountable. Otherwise the whole word is checked, then
/// its last segment, so `"black_sheep"` is uncountable too.
pub fn is_uncountable(word: &str, inflections: &Inflections) -> bool {
    if word.trim().is_empty() {
        return true;
    }

    let uncountables = inflections.uncountables();
    if uncountables.contains(word) {
        return true;
    }

    word.rsplit(|c: char| !c.is_alphanumeric())
        .find(|segment| !segment.is_empty())
        .is_some_and(|last| uncountables.contains(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Inflections {
        Inflections::english().unwrap()
    }

    #[test]
    fn test_regular_plurals() {
        let inflections = english();
        let cases = [
            ("book", "books"),
            ("box", "boxes"),
            ("church", "churches"),
            ("wish", "wishes"),
            ("class", "classes"),
            ("city", "cities"),
            ("query", "queries"),
            ("day", "days"),
            ("knife", "knives"),
            ("wolf", "wolves"),
            ("status", "statuses"),
            ("alias", "aliases"),
        ];
        for (singular, plural) in cases {
            assert_eq!(pluralize(singular, &inflections), plural, "pluralize({singular})");
        }
    }

    #[test]
    fn test_latin_and_greek_plurals() {
        let inflections = english();
        let cases = [
            ("axis", "axes"),
            ("crisis", "crises"),
            ("analysis", "analyses"),
            ("datum", "data"),
            ("medium", "media"),
            ("curriculum", "curricula"),
            ("memorandum", "memoranda"),
            ("phenomenon", "phenomena"),
            ("noumenon", "noumena"),
            ("criterion", "criteria"),
            ("schema", "schemata"),
            ("drama", "dramata"),
            ("matrix", "matrices"),
            ("vertex", "vertices"),
            ("index", "indices"),
            ("bureau", "bureaux"),
        ];
        for (singular, plural) in cases {
            assert_eq!(pluralize(singular, &inflections), plural, "pluralize({singular})");
        }
    }

    #[test]
    fn test_special_plurals() {
        let inflections = english();
        assert_eq!(pluralize("potato", &inflections), "potatoes");
        assert_eq!(pluralize("hero", &inflections), "heroes");
        assert_eq!(pluralize("photo", &inflections), "photos");
        assert_eq!(pluralize("mouse", &inflections), "mice");
        assert_eq!(pluralize("louse", &inflections), "lice");
        assert_eq!(pluralize("ox", &inflections), "oxen");
        assert_eq!(pluralize("box", &inflections), "boxes");
        assert_eq!(pluralize("quiz", &inflections), "quizzes");
        assert_eq!(pluralize("octopus", &inflections), "octopuses");
        assert_eq!(pluralize("stomach", &inflections), "stomachs");
        assert_eq!(pluralize("epoch", &inflections), "epochs");
    }

    #[test]
    fn test_bum_endings_take_plain_s() {
        let inflections = english();
        assert_eq!(pluralize("album", &inflections), "albums");
        assert_eq!(singularize("albums", &inflections), "album");
        assert_eq!(pluralize("forum", &inflections), "forums");
    }

    #[test]
    fn test_singulars() {
        let inflections = english();
        let cases = [
            ("books", "book"),
            ("boxes", "box"),
            ("cities", "city"),
            ("knives", "knife"),
            ("wolves", "wolf"),
            ("archives", "archive"),
            ("movies", "movie"),
            ("houses", "house"),
            ("statuses", "status"),
            ("octopi", "octopus"),
            ("cacti", "cactus"),
            ("crises", "crisis"),
            ("analyses", "analysis"),
            ("data", "datum"),
            ("criteria", "criterion"),
            ("schemata", "schema"),
            ("matrices", "matrix"),
            ("vertices", "vertex"),
            ("mice", "mouse"),
            ("oxen", "ox"),
            ("quizzes", "quiz"),
            ("tomatoes", "tomato"),
            ("volcanoes", "volcano"),
            ("shoes", "shoe"),
            ("databases", "database"),
            ("curricula", "curriculum"),
            ("noumena", "noumenon"),
            ("dramata", "drama"),
            ("cows", "cow"),
            ("views", "view"),
            ("news", "news"),
            ("bureaux", "bureau"),
            ("glass", "glass"),
        ];
        for (plural, singular) in cases {
            assert_eq!(singularize(plural, &inflections), singular, "singularize({plural})");
        }
    }

    #[test]
    fn test_irregulars() {
        let inflections = english();
        let pairs = [
            ("person", "people"),
            ("man", "men"),
            ("woman", "women"),
            ("human", "humans"),
            ("child", "children"),
            ("sex", "sexes"),
            ("foot", "feet"),
            ("tooth", "teeth"),
            ("goose", "geese"),
            ("forum", "forums"),
        ];
        for (singular, plural) in pairs {
            assert_eq!(pluralize(singular, &inflections), plural);
            assert_eq!(singularize(plural, &inflections), singular);
        }
    }

    #[test]
    fn test_case_is_kept() {
        let inflections = english();
        assert_eq!(pluralize("Person", &inflections), "People");
        assert_eq!(pluralize("Category", &inflections), "Categories");
        assert_eq!(singularize("Children", &inflections), "Child");
    }

    #[test]
    fn test_uncountables_are_fixed_points() {
        let inflections = english();
        for word in inflections.uncountables().iter() {
            assert_eq!(pluralize(word, &inflections), word);
            assert_eq!(singularize(word, &inflections), word);
        }
        assert_eq!(pluralize("swiss", &inflections), "swiss");
        assert_eq!(pluralize("Money", &inflections), "Money");
    }

    #[test]
    fn test_is_uncountable() {
        let inflections = english();
        assert!(is_uncountable("", &inflections));
        assert!(is_uncountable("   ", &inflections));
        assert!(is_uncountable("\t\n", &inflections));
        assert!(is_uncountable("sheep", &inflections));
        assert!(is_uncountable("SHEEP", &inflections));
        assert!(is_uncountable("black_sheep", &inflections));
        assert!(is_uncountable("tropical fish", &inflections));
        assert!(!is_uncountable("sheep_dog", &inflections));
        assert!(!is_uncountable("book", &inflections));
    }

    #[test]
    fn test_compound_words() {
        let inflections = english();
        assert_eq!(pluralize("blog_post", &inflections), "blog_posts");
        assert_eq!(pluralize("black_sheep", &inflections), "black_sheep");
        assert_eq!(singularize("line_items", &inflections), "line_item");
    }

    #[test]
    fn test_not_idempotent() {
        let inflections = english();
        assert_eq!(pluralize("people", &inflections), "peoples");
    }
}
