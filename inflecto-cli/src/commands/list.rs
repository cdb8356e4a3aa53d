//! List command implementation

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, ValueEnum};
use inflecto_core::{Inflections, Rules};

use super::transform::TableArgs;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Table contents to list
    #[arg(value_enum)]
    pub what: ListTarget,

    #[command(flatten)]
    pub table: TableArgs,
}

/// Listable parts of an inflection table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    /// Plural rules, highest priority first
    Plurals,
    /// Singular rules, highest priority first
    Singulars,
    /// Humanize rules, highest priority first
    Humans,
    /// Uncountable words
    Uncountables,
    /// Registered acronyms
    Acronyms,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let cli_config = self.table.load_cli_config()?;
        let inflections = self.table.build(cli_config.as_ref())?;
        write_listing(self.what, &inflections, &mut io::stdout().lock())
    }
}

/// Write one line per entry of the selected table part
pub fn write_listing<W: Write>(
    what: ListTarget,
    inflections: &Inflections,
    writer: &mut W,
) -> Result<()> {
    match what {
        ListTarget::Plurals => write_rules(inflections.plurals(), writer)?,
        ListTarget::Singulars => write_rules(inflections.singulars(), writer)?,
        ListTarget::Humans => write_rules(inflections.humans(), writer)?,
        ListTarget::Uncountables => {
            for word in inflections.uncountables().iter() {
                writeln!(writer, "{word}")?;
            }
        }
        ListTarget::Acronyms => {
            for (key, canonical) in inflections.acronyms().iter() {
                writeln!(writer, "{key} -> {canonical}")?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

fn write_rules<W: Write>(rules: &Rules, writer: &mut W) -> io::Result<()> {
    for rule in rules.iter() {
        writeln!(writer, "{} -> {}", rule.pattern(), rule.replacement())?;
    }
    Ok(())
}
