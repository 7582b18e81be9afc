pub mod calculator;
pub mod models;
pub mod tiers;

pub use calculator::{evaluate, FeeSchedule, PricingCalculator, MAX_PLATFORM_FEE};
pub use models::{Evaluation, Plan, PlanResult, PricingInput};
pub use tiers::{find_tier, unit_price, Tier, SMALL_BUSINESS_THRESHOLD, TIERS};
