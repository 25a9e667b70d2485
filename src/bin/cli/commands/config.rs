//! Configuration management commands.
//!
//! This module contains commands for managing townsplit configuration files,
//! including initialization, validation, and printing defaults.

use anyhow::Context;
use console::style;

use crate::cli::args::{InitConfigArgs, ValidateConfigArgs};
use townsplit_rs::TownsplitConfig;

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", style("# Default townsplit configuration").dim());
    println!(
        "{}",
        style("# Save this as .townsplit.yml and set fetch.endpoint").dim()
    );
    println!();

    let yaml_output = serde_yaml::to_string(&TownsplitConfig::default())?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        );
    }

    TownsplitConfig::default().to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        style("Configuration saved to:").green().bold(),
        style(args.output.display()).cyan()
    );
    println!(
        "Next: set {} to your name generator URL",
        style("fetch.endpoint").cyan()
    );

    Ok(())
}

/// Validate a configuration file
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    let config = TownsplitConfig::from_yaml_file(&args.file)
        .with_context(|| format!("Failed to load configuration from {}", args.file.display()))?;

    config
        .validate()
        .with_context(|| format!("Configuration {} is invalid", args.file.display()))?;

    println!(
        "{} {}",
        style("Configuration is valid:").green().bold(),
        args.file.display()
    );
    if config.fetch.endpoint.is_empty() {
        println!(
            "{}",
            style("Note: fetch.endpoint is not set; `townsplit fetch` will need --endpoint").yellow()
        );
    }

    Ok(())
}
