//! inflecto - rule-driven English inflection from the command line
//!
//! Usage:
//!   inflecto <transform> <words>... [--rules <file>] [--profile <name>] [--format text|json]
//!   inflecto validate -c <file>
//!   inflecto generate-config -o <file>
//!   inflecto list plurals|singulars|humans|uncountables|acronyms
//!
//! Examples:
//!   inflecto pluralize person octopus sheep
//!   inflecto camelize --lower active_model/errors
//!   inflecto ordinalize 1 22 -113

use clap::Parser;
use inflecto_cli::commands::Commands;
use inflecto_cli::{init_logging, CliResult};

#[derive(Debug, Parser)]
#[command(name = "inflecto")]
#[command(about = "Pluralize, singularize and re-case words with configurable rules")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    log::debug!("Command: {:?}", cli.command);
    cli.command.execute()
}
