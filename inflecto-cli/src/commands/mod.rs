//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod transform;
pub mod validate;

use transform::{Transform, TransformArgs};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plural form of each word
    Pluralize(TransformArgs),

    /// Singular form of each word
    Singularize(TransformArgs),

    /// Whether each word is uncountable
    Uncountable(TransformArgs),

    /// snake_case and path/names to CamelCase and Dotted.Names
    Camelize {
        #[command(flatten)]
        args: TransformArgs,

        /// Keep the first letter lowercase
        #[arg(long)]
        lower: bool,
    },

    /// CamelCase to snake_case
    Underscore(TransformArgs),

    /// Underscores to dashes
    Dasherize(TransformArgs),

    /// Attribute names to display text
    Humanize(TransformArgs),

    /// Capitalize every word
    Titleize(TransformArgs),

    /// Table names to class names
    Classify(TransformArgs),

    /// Class names to table names
    Tableize(TransformArgs),

    /// Class names to foreign key columns
    ForeignKey {
        #[command(flatten)]
        args: TransformArgs,

        /// Append "id" instead of "_id"
        #[arg(long)]
        no_underscore: bool,
    },

    /// Last segment of a dotted name
    Demodulize(TransformArgs),

    /// Everything before the last segment of a dotted name
    Deconstantize(TransformArgs),

    /// Integers with their English ordinal suffix
    Ordinalize(TransformArgs),

    /// Validate an inflection rules file
    Validate(validate::ValidateArgs),

    /// Generate an inflection rules template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List the contents of an inflection table
    List(list::ListArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Pluralize(args) => args.execute(Transform::Pluralize),
            Commands::Singularize(args) => args.execute(Transform::Singularize),
            Commands::Uncountable(args) => args.execute(Transform::Uncountable),
            Commands::Camelize { args, lower } => {
                args.execute(Transform::Camelize { upper: !lower })
            }
            Commands::Underscore(args) => args.execute(Transform::Underscore),
            Commands::Dasherize(args) => args.execute(Transform::Dasherize),
            Commands::Humanize(args) => args.execute(Transform::Humanize),
            Commands::Titleize(args) => args.execute(Transform::Titleize),
            Commands::Classify(args) => args.execute(Transform::Classify),
            Commands::Tableize(args) => args.execute(Transform::Tableize),
            Commands::ForeignKey {
                args,
                no_underscore,
            } => args.execute(Transform::ForeignKey {
                separate_with_underscore: !no_underscore,
            }),
            Commands::Demodulize(args) => args.execute(Transform::Demodulize),
            Commands::Deconstantize(args) => args.execute(Transform::Deconstantize),
            Commands::Ordinalize(args) => args.execute(Transform::Ordinalize),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    fn parse(args: &[&str]) -> Commands {
        TestCli::try_parse_from(std::iter::once("inflecto").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_parse_transform_command() {
        match parse(&["pluralize", "person", "child", "-f", "json"]) {
            Commands::Pluralize(args) => {
                assert_eq!(args.words, vec!["person", "child"]);
                assert_eq!(args.format, Some(transform::OutputFormat::Json));
            }
            other => panic!("Expected Pluralize, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_flags_on_variant_commands() {
        match parse(&["camelize", "--lower", "data_mapper"]) {
            Commands::Camelize { args, lower } => {
                assert!(lower);
                assert_eq!(args.words, vec!["data_mapper"]);
            }
            other => panic!("Expected Camelize, got {other:?}"),
        }

        match parse(&["foreign-key", "--no-underscore", "Message"]) {
            Commands::ForeignKey { no_underscore, .. } => assert!(no_underscore),
            other => panic!("Expected ForeignKey, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_numbers() {
        match parse(&["ordinalize", "-1", "22"]) {
            Commands::Ordinalize(args) => assert_eq!(args.words, vec!["-1", "22"]),
            other => panic!("Expected Ordinalize, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_table_options() {
        match parse(&["list", "acronyms", "--config", "cli.toml", "--profile", "web"]) {
            Commands::List(args) => {
                assert_eq!(args.what, list::ListTarget::Acronyms);
                assert_eq!(args.table.profile.as_deref(), Some("web"));
            }
            other => panic!("Expected List, got {other:?}"),
        }
    }

    #[test]
    fn test_transform_requires_words() {
        let result = TestCli::try_parse_from(["inflecto", "pluralize"]);
        assert!(result.is_err());
    }
}
