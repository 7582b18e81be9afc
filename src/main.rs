use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use seat_pricing::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    init_tracing(if args.verbose { "debug" } else { "warn" });

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Quote(quote_args) => {
            let cfg = config::load_config(&args.config)?;
            commands::quote::execute(quote_args, &cfg)?;
        }
        cli::Commands::Tiers => {
            let cfg = config::load_config(&args.config)?;
            commands::tiers::execute(&cfg)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("Seat Pricing v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
