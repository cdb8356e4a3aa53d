//! Transform commands: apply one inflection to every word given

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use inflecto_core::{transform, Inflections};

use crate::config::{CliConfig, TableSource};
use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Options selecting the inflection table
#[derive(Debug, Args, Default)]
pub struct TableArgs {
    /// CLI configuration file with output defaults and named profiles
    #[arg(short, long, value_name = "FILE", env = "INFLECTO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Profile from the CLI configuration to use as the table
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Inflection rules file layered over the selected table
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

impl TableArgs {
    /// Load the CLI configuration file, if one was given
    pub fn load_cli_config(&self) -> Result<Option<CliConfig>> {
        self.config.as_deref().map(CliConfig::from_file).transpose()
    }

    /// Build the inflection table these options describe
    pub fn build(&self, cli_config: Option<&CliConfig>) -> Result<Inflections> {
        TableSource {
            cli_config,
            profile: self.profile.as_deref(),
            rules: self.rules.as_deref(),
        }
        .build()
    }
}

/// Arguments shared by every transform command
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Words to transform
    #[arg(value_name = "WORD", required = true, allow_negative_numbers = true)]
    pub words: Vec<String>,

    /// Output format (default: from the CLI configuration, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub table: TableArgs,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One result per line
    Text,
    /// JSON array of input/output pairs
    Json,
}

/// A single transform applied to each word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Pluralize,
    Singularize,
    Uncountable,
    Camelize { upper: bool },
    Underscore,
    Dasherize,
    Humanize,
    Titleize,
    Classify,
    Tableize,
    ForeignKey { separate_with_underscore: bool },
    Demodulize,
    Deconstantize,
    Ordinalize,
}

impl Transform {
    /// Apply the transform to one word
    pub fn apply(&self, word: &str, inflections: &Inflections) -> Result<String> {
        let output = match *self {
            Transform::Pluralize => inflections.pluralize(word),
            Transform::Singularize => inflections.singularize(word),
            Transform::Uncountable => inflections.is_uncountable(word).to_string(),
            Transform::Camelize { upper } => inflections.camelize(word, upper),
            Transform::Underscore => inflections.underscore(word),
            Transform::Dasherize => transform::dasherize(word),
            Transform::Humanize => inflections.humanize(word),
            Transform::Titleize => inflections.titleize(word),
            Transform::Classify => inflections.classify(word),
            Transform::Tableize => inflections.tableize(word),
            Transform::ForeignKey {
                separate_with_underscore,
            } => inflections.foreign_key(word, separate_with_underscore),
            Transform::Demodulize => transform::demodulize(word).to_string(),
            Transform::Deconstantize => transform::deconstantize(word).to_string(),
            Transform::Ordinalize => {
                let n: i128 = word
                    .trim()
                    .parse()
                    .map_err(|_| CliError::InvalidNumber(word.to_string()))?;
                transform::ordinalize(n)
            }
        };
        Ok(output)
    }
}

impl TransformArgs {
    /// Execute a transform command
    pub fn execute(&self, transform: Transform) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let cli_config = self.table.load_cli_config()?;
        let inflections = self.table.build(cli_config.as_ref())?;
        let output = cli_config.map(|config| config.output).unwrap_or_default();

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    output.default_format
                ))
            })?,
        };
        log::info!("applying {transform:?} to {} words", self.words.len());

        let stdout = io::stdout().lock();
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(stdout)),
            OutputFormat::Json => Box::new(JsonFormatter::new(stdout, output.pretty_json)),
        };
        write_results(transform, &self.words, &inflections, formatter.as_mut())
    }
}

/// Transform every word and hand the results to `formatter`
pub fn write_results(
    transform: Transform,
    words: &[String],
    inflections: &Inflections,
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    for word in words {
        let output = transform.apply(word, inflections)?;
        formatter.format_result(word, &output)?;
    }
    formatter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Inflections {
        Inflections::english().unwrap()
    }

    #[test]
    fn test_apply_each_transform() {
        let inflections = english();
        let cases = [
            (Transform::Pluralize, "person", "people"),
            (Transform::Singularize, "children", "child"),
            (Transform::Uncountable, "sheep", "true"),
            (Transform::Camelize { upper: true }, "data_mapper", "DataMapper"),
            (Transform::Camelize { upper: false }, "data_mapper", "dataMapper"),
            (Transform::Underscore, "DataMapper", "data_mapper"),
            (Transform::Dasherize, "street_address", "street-address"),
            (Transform::Humanize, "author_id", "Author"),
            (Transform::Titleize, "active_record", "Active Record"),
            (Transform::Classify, "blog_posts", "BlogPost"),
            (Transform::Tableize, "BlogPost", "blog_posts"),
            (
                Transform::ForeignKey {
                    separate_with_underscore: false,
                },
                "Message",
                "messageid",
            ),
            (Transform::Demodulize, "Admin.User", "User"),
            (Transform::Deconstantize, "Admin.User", "Admin"),
            (Transform::Ordinalize, "-1", "-1st"),
        ];

        for (transform, input, expected) in cases {
            assert_eq!(
                transform.apply(input, &inflections).unwrap(),
                expected,
                "{transform:?}({input})"
            );
        }
    }

    #[test]
    fn test_ordinalize_rejects_non_integers() {
        let err = Transform::Ordinalize.apply("twelve", &english()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_write_results() {
        let words = vec!["box".to_string(), "quiz".to_string()];
        let mut formatter = TextFormatter::new(Vec::new());
        write_results(Transform::Pluralize, &words, &english(), &mut formatter).unwrap();

        let text = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(text, "boxes\nquizzes\n");
    }

    #[test]
    fn test_default_table_args() {
        let inflections = TableArgs::default().build(None).unwrap();
        assert_eq!(inflections.pluralize("octopus"), "octopuses");
    }
}
