use anyhow::Result;
use colored::Colorize;
use tracing::info;

use seat_pricing::config::Config;
use seat_pricing::pricing::SMALL_BUSINESS_THRESHOLD;
use seat_pricing::report;

/// Execute the tiers command
///
/// Prints the price sheet used by the calculator
pub fn execute(cfg: &Config) -> Result<()> {
    info!("Displaying tier price table");

    println!("{}", "Tier Price Table".bold());
    println!(
        "{}",
        "Headcount is the paid headcount; /MO columns are per person per month.".dimmed()
    );
    println!("{}", report::tier_table(&cfg.report.currency));
    println!();
    println!(
        "Organisations with {} or fewer people in total pay no subscription fee.",
        SMALL_BUSINESS_THRESHOLD
    );
    println!(
        "Platform fee: {} per year ({} with discount).",
        report::format::format_money(&cfg.report.currency, cfg.platform_fee.standard),
        report::format::format_money(&cfg.report.currency, cfg.platform_fee.discounted)
    );

    Ok(())
}
