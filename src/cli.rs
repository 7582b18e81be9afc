use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::quote::QuoteArgs;

#[derive(Parser, Debug)]
#[command(name = "seat-pricing", version, about = "Subscription pricing calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "pricing.toml", global = true)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compare plan costs for a headcount (default)
    Quote(QuoteArgs),

    /// Show the tier price table
    Tiers,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Quote if none provided
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Quote(QuoteArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::quote::OutputFormat;

    #[test]
    fn test_default_command_is_quote() {
        let cli = Cli {
            config: PathBuf::from("pricing.toml"),
            verbose: false,
            command: None,
        };

        match cli.get_command() {
            Commands::Quote(args) => {
                assert!(args.total.is_none());
                assert!(args.free.is_none());
                assert!(args.csv.is_none());
                assert_eq!(args.format, OutputFormat::Text);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_quote() {
        let args = vec![
            "seat-pricing",
            "quote",
            "--total",
            "350",
            "-f",
            "100",
            "--platform-fee",
            "false",
            "--discount",
            "true",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Quote(args) => {
                assert_eq!(args.total, Some(350));
                assert_eq!(args.free, Some(100));
                assert_eq!(args.platform_fee, Some(false));
                assert_eq!(args.discount, Some(true));
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_csv_without_path() {
        let cli = Cli::try_parse_from(vec!["seat-pricing", "quote", "--csv"]).unwrap();

        match cli.get_command() {
            Commands::Quote(args) => assert_eq!(args.csv, Some(None)),
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_csv_with_path_and_json() {
        let args = vec![
            "seat-pricing",
            "quote",
            "--csv",
            "out.csv",
            "--format",
            "json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Quote(args) => {
                assert_eq!(args.csv, Some(Some(PathBuf::from("out.csv"))));
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_validate() {
        let cli = Cli::try_parse_from(vec!["seat-pricing", "-c", "alt.toml", "config", "validate"])
            .unwrap();

        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        match cli.get_command() {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Validate));
            }
            _ => panic!("Expected Config command"),
        }
    }
}
