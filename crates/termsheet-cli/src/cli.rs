//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Termsheet - extract covenant fields from PDF offering documents into a
/// spreadsheet template.
#[derive(Debug, Parser)]
#[command(name = "termsheet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract fields from a PDF and populate the spreadsheet template
    Scrape(ScrapeArgs),

    /// List the canonical field names
    Fields,
}

/// Arguments for the scrape command.
#[derive(Debug, Parser)]
pub struct ScrapeArgs {
    /// PDF offering document to extract from
    pub pdf: PathBuf,

    /// Spreadsheet template with an 'Inputs' sheet of label cells
    #[arg(short, long)]
    pub template: PathBuf,

    /// Where to save the populated spreadsheet (the template is never
    /// modified in place)
    #[arg(short, long, default_value = "output.xlsx")]
    pub output: PathBuf,

    /// Optional pipeline configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_command_parsing() {
        let cli = Cli::parse_from([
            "termsheet",
            "scrape",
            "offering.pdf",
            "--template",
            "template.xlsx",
        ]);
        match cli.command {
            Command::Scrape(args) => {
                assert_eq!(args.pdf, PathBuf::from("offering.pdf"));
                assert_eq!(args.template, PathBuf::from("template.xlsx"));
                assert_eq!(args.output, PathBuf::from("output.xlsx"));
                assert!(args.config.is_none());
            }
            _ => panic!("Expected Scrape command"),
        }
    }

    #[test]
    fn test_fields_command_parsing() {
        let cli = Cli::parse_from(["termsheet", "fields"]);
        assert!(matches!(cli.command, Command::Fields));
    }
}
