//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Code identifying the new rule set
    #[arg(short = 'l', long, value_name = "CODE", default_value = "en-custom")]
    pub code: String,

    /// Human-readable name of the rule set
    #[arg(short, long, value_name = "NAME", default_value = "Custom English")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating inflection rules template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        // Generate template configuration
        let template = self.generate_template();

        // Write to file
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Uncomment and edit the rules you need");
        println!("2. Validate your configuration:");
        println!("   inflecto validate -c {}", self.output.display());
        println!("3. Use it for transforms:");
        println!(
            "   inflecto pluralize --rules {} octopus",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Inflection rules for {name}
#
# Every entry is layered over the built-in English rules. Within each list,
# later entries take precedence over earlier ones.

# Seed the built-in acronyms (API, CSRF, CSV, DB, HMAC, HTTP, JSON, OpenSSL)
default_acronyms = false

# Words with no distinct plural form
uncountables = [
    # "police",
]

# Words that keep their casing through camelize, humanize and titleize
acronyms = [
    # "GraphQL",
]

# Plural rules: ["literal", "replacement"] or {{ regex = '...', replacement = '...' }}
# Regex replacements reference capture groups as ${{1}}
plurals = [
    # ["octopus", "octopi"],
    # {{ regex = '(?i)(alumn)us$', replacement = '${{1}}i' }},
]

# Singular rules, same forms as plural rules
singulars = [
    # {{ regex = '(?i)(alumn)i$', replacement = '${{1}}us' }},
]

# Irregular pairs, registered in both directions
irregulars = [
    # {{ singular = "cow", plural = "kine" }},
]

# Rules applied by humanize before any other processing
humans = [
    # {{ regex = '(?i)^col_rpted_bugs$', replacement = 'reported bugs' }},
]

[metadata]
code = "{code}"
name = "{name}"
"#,
            code = self.code,
            name = self.name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inflecto_core::InflectionsConfig;
    use tempfile::TempDir;

    fn args(output: PathBuf) -> GenerateConfigArgs {
        GenerateConfigArgs {
            code: "en-test".to_string(),
            name: "Test Rules".to_string(),
            output,
        }
    }

    #[test]
    fn test_template_is_a_valid_config() {
        let template = args(PathBuf::from("unused.toml")).generate_template();
        let config = InflectionsConfig::from_toml_str(&template).unwrap();

        assert!(config.is_empty());
        let metadata = config.metadata.unwrap();
        assert_eq!(metadata.code, "en-test");
        assert_eq!(metadata.name, "Test Rules");
    }

    #[test]
    fn test_template_documents_every_section() {
        let template = args(PathBuf::from("unused.toml")).generate_template();
        for section in [
            "default_acronyms",
            "uncountables",
            "acronyms",
            "plurals",
            "singulars",
            "irregulars",
            "humans",
        ] {
            assert!(template.contains(section), "missing {section}");
        }
        assert!(template.contains("${1}i"));
    }

    #[test]
    fn test_execute_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");

        args(path.clone()).execute().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Inflection rules for Test Rules"));
    }

    #[test]
    fn test_execute_reports_unwritable_path() {
        let err = args(PathBuf::from("/nonexistent/dir/rules.toml"))
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
