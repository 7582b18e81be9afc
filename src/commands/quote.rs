//! Quote command
//!
//! Evaluates every billing cadence for a headcount and prints the comparison
//! table, the recommendation and the cost chart, optionally exporting CSV.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{ArgAction, Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use seat_pricing::config::Config;
use seat_pricing::pricing::{Evaluation, PricingCalculator, PricingInput};
use seat_pricing::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Compare plan costs for a headcount
#[derive(Debug, Clone, Default, Args)]
pub struct QuoteArgs {
    /// Total headcount (default from config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub total: Option<u32>,

    /// Free headcount, e.g. the first 100 users (default from config)
    #[arg(short, long)]
    pub free: Option<u32>,

    /// Include the platform fee (true/false)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub platform_fee: Option<bool>,

    /// Apply the platform fee discount (true/false)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub discount: Option<bool>,

    /// Write the comparison as CSV; uses the configured file name when PATH is omitted
    #[arg(long, value_name = "PATH")]
    pub csv: Option<Option<PathBuf>>,

    /// Output format (text, json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Leave the cost chart out of the text report
    #[arg(long)]
    pub no_chart: bool,
}

/// JSON document printed by `--format json`
#[derive(Serialize)]
struct QuoteDocument<'a> {
    generated_at: DateTime<Utc>,
    currency: &'a str,
    #[serde(flatten)]
    evaluation: &'a Evaluation,
}

/// Execute the quote command
pub fn execute(args: QuoteArgs, cfg: &Config) -> Result<()> {
    let input = build_input(&args, cfg)?;

    let requested = args.free.unwrap_or(cfg.defaults.free_users);
    if let Some(message) = clamp_warning(requested, &input) {
        warn!(
            requested,
            total_employees = input.total_employees,
            "Free users exceed total headcount, clamping"
        );
        eprintln!("{}", message.yellow());
    }

    let calculator = PricingCalculator::new(cfg.platform_fee.schedule());
    let evaluation = calculator.evaluate(&input);
    info!(
        total_employees = input.total_employees,
        free_users = input.free_users,
        best_plan = %evaluation.best_plan,
        "Quote computed"
    );

    let currency = cfg.report.currency.as_str();
    match args.format {
        OutputFormat::Text => print_text_report(&evaluation, cfg, !args.no_chart),
        OutputFormat::Json => {
            let document = QuoteDocument {
                generated_at: Utc::now(),
                currency,
                evaluation: &evaluation,
            };
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    if let Some(path) = args.csv {
        let path = path.unwrap_or_else(|| PathBuf::from(&cfg.report.csv_file_name));
        report::write_csv(&path, &evaluation, currency)?;

        if args.format == OutputFormat::Text {
            println!();
            println!("{} {}", "✓ Report saved to".green(), path.display());
        }
    }

    Ok(())
}

/// Merge command-line flags over configured defaults
fn build_input(args: &QuoteArgs, cfg: &Config) -> Result<PricingInput> {
    let defaults = &cfg.defaults;

    let input = PricingInput::new(
        args.total.unwrap_or(defaults.total_employees),
        args.free.unwrap_or(defaults.free_users),
        args.platform_fee.unwrap_or(defaults.include_platform_fee),
        args.discount.unwrap_or(defaults.apply_platform_discount),
    )?;

    Ok(input)
}

/// Message shown when the free-user count had to be corrected
fn clamp_warning(requested: u32, input: &PricingInput) -> Option<String> {
    if !input.free_users_clamped {
        return None;
    }

    Some(format!(
        "⚠ Free users ({}) cannot exceed total headcount ({}); using {}.",
        requested, input.total_employees, input.free_users
    ))
}

fn print_text_report(evaluation: &Evaluation, cfg: &Config, show_chart: bool) {
    let currency = cfg.report.currency.as_str();

    println!("Subscription Pricing Comparison");
    println!("===============================");
    println!(
        "{}",
        format!("Generated {}", Utc::now().format("%Y-%m-%d %H:%M UTC")).dimmed()
    );
    println!();

    println!(
        "{} {}",
        "Paid users:".bold(),
        evaluation.paid_users.to_string().bold()
    );
    println!();

    println!("{}", "Plan Comparison:".bold().underline());
    println!("{}", report::comparison_table(evaluation, currency));
    println!();

    println!("{}", report::render_summary(evaluation, currency));

    if show_chart {
        println!();
        println!(
            "{}",
            report::render_chart(evaluation, currency, cfg.report.chart_width)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_uses_config_defaults() {
        let cfg = Config::default();
        let input = build_input(&QuoteArgs::default(), &cfg).unwrap();

        assert_eq!(input.total_employees, 350);
        assert_eq!(input.free_users, 100);
        assert!(input.include_platform_fee);
        assert!(!input.apply_platform_discount);
    }

    #[test]
    fn test_build_input_flags_override_defaults() {
        let cfg = Config::default();
        let args = QuoteArgs {
            total: Some(150),
            free: Some(200),
            platform_fee: Some(false),
            discount: Some(true),
            ..Default::default()
        };

        let input = build_input(&args, &cfg).unwrap();
        assert_eq!(input.total_employees, 150);
        assert_eq!(input.free_users, 150);
        assert!(input.free_users_clamped);
        assert!(!input.include_platform_fee);
        assert!(input.apply_platform_discount);
    }

    #[test]
    fn test_clamp_warning_names_corrected_count() {
        let args = QuoteArgs {
            total: Some(150),
            free: Some(200),
            ..Default::default()
        };
        let input = build_input(&args, &Config::default()).unwrap();

        let message = clamp_warning(200, &input).unwrap();
        assert!(message.contains("Free users (200)"));
        assert!(message.contains("total headcount (150)"));
        assert!(message.contains("using 150"));
    }

    #[test]
    fn test_no_clamp_warning_when_free_within_total() {
        let input = build_input(&QuoteArgs::default(), &Config::default()).unwrap();
        assert!(clamp_warning(100, &input).is_none());
    }

    #[test]
    fn test_execute_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quote.csv");
        let args = QuoteArgs {
            total: Some(90),
            free: Some(0),
            csv: Some(Some(path.clone())),
            format: OutputFormat::Json,
            ..Default::default()
        };

        execute(args, &Config::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(report::UTF8_BOM));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("\"NT$100,000\""));
    }
}
