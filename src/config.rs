use crate::pricing::{FeeSchedule, MAX_PLATFORM_FEE};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub platform_fee: PlatformFeeConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Input values used when a flag is not given on the command line
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_total_employees")]
    pub total_employees: u32,

    #[serde(default = "default_free_users")]
    pub free_users: u32,

    #[serde(default = "default_include_platform_fee")]
    pub include_platform_fee: bool,

    #[serde(default)]
    pub apply_platform_discount: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            total_employees: default_total_employees(),
            free_users: default_free_users(),
            include_platform_fee: default_include_platform_fee(),
            apply_platform_discount: false,
        }
    }
}

/// Platform fee amounts (NT$ per year)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformFeeConfig {
    #[serde(default = "default_standard_fee")]
    pub standard: u64,

    /// Charged instead of `standard` when the discount is applied
    #[serde(default = "default_discounted_fee")]
    pub discounted: u64,
}

impl Default for PlatformFeeConfig {
    fn default() -> Self {
        Self {
            standard: default_standard_fee(),
            discounted: default_discounted_fee(),
        }
    }
}

impl PlatformFeeConfig {
    pub fn schedule(&self) -> FeeSchedule {
        FeeSchedule {
            standard: self.standard,
            discounted: self.discounted,
        }
    }
}

/// Report rendering options
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Prefix for money values (default: "NT$")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// File name used by `--csv` when no path is given
    #[serde(default = "default_csv_file_name")]
    pub csv_file_name: String,

    /// Width of the longest chart bar in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            csv_file_name: default_csv_file_name(),
            chart_width: default_chart_width(),
        }
    }
}

fn default_total_employees() -> u32 {
    350
}

fn default_free_users() -> u32 {
    100
}

fn default_include_platform_fee() -> bool {
    true
}

fn default_standard_fee() -> u64 {
    100_000
}

fn default_discounted_fee() -> u64 {
    80_000
}

fn default_currency() -> String {
    "NT$".to_string()
}

fn default_csv_file_name() -> String {
    "pricing_recommendation.csv".to_string()
}

fn default_chart_width() -> usize {
    40
}

/// Load configuration from an optional TOML file, overridden by
/// `SEAT_PRICING__<SECTION>__<KEY>` environment variables
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("SEAT_PRICING").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.defaults.total_employees < 1 {
        anyhow::bail!("defaults.total_employees must be >= 1");
    }

    if cfg.platform_fee.standard > MAX_PLATFORM_FEE {
        anyhow::bail!(
            "platform_fee.standard ({}) exceeds the maximum of {}",
            cfg.platform_fee.standard,
            MAX_PLATFORM_FEE
        );
    }

    if cfg.platform_fee.discounted > cfg.platform_fee.standard {
        anyhow::bail!(
            "platform_fee.discounted ({}) cannot exceed platform_fee.standard ({})",
            cfg.platform_fee.discounted,
            cfg.platform_fee.standard
        );
    }

    if cfg.report.currency.is_empty() {
        anyhow::bail!("report.currency cannot be empty");
    }

    if cfg.report.csv_file_name.trim().is_empty() {
        anyhow::bail!("report.csv_file_name cannot be empty");
    }

    if cfg.report.chart_width == 0 {
        anyhow::bail!("report.chart_width must be >= 1");
    }

    Ok(())
}
