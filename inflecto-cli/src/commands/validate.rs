//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the inflection rules file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub rules_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        use inflecto_core::{load_config, Inflections};

        println!(
            "Validating inflection rules: {}",
            self.rules_config.display()
        );

        // Parsing checks the schema; building compiles every regex
        let result = load_config(&self.rules_config)
            .and_then(|config| Inflections::from_config(&config).map(|table| (config, table)));

        match result {
            Ok((config, inflections)) => {
                println!("✓ Configuration is valid!");
                if let Some(metadata) = &config.metadata {
                    println!("  Code: {}", metadata.code);
                    println!("  Name: {}", metadata.name);
                }
                println!("  Plural rules: {}", inflections.plurals().len());
                println!("  Singular rules: {}", inflections.singulars().len());
                println!("  Human rules: {}", inflections.humans().len());
                println!("  Uncountables: {}", inflections.uncountables().len());
                println!("  Acronyms: {}", inflections.acronyms().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
