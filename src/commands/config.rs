use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use seat_pricing::config::{self, Config};
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file + environment + defaults)
pub fn show(path: &Path) -> Result<()> {
    info!(path = %path.display(), "Loading configuration for display");

    let cfg = config::load_config(path)?;

    println!("{}", "Current Configuration:".bold());
    println!();
    println!("{}", render_toml(&cfg)?);

    Ok(())
}

/// Execute the config validate command
pub fn validate(path: &Path) -> Result<()> {
    println!("Validating configuration...");
    info!(path = %path.display(), "Validating configuration file");

    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    let cfg = config::load_config(path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Source: {}", source);
    println!(
        "  Default headcount: {} total, {} free",
        cfg.defaults.total_employees, cfg.defaults.free_users
    );
    println!(
        "  Platform fee: {} standard, {} discounted",
        cfg.platform_fee.standard, cfg.platform_fee.discounted
    );
    println!("  CSV file name: {}", cfg.report.csv_file_name);

    info!("Configuration validation successful");
    Ok(())
}

fn render_toml(cfg: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}
