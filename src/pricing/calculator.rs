use crate::pricing::models::{Evaluation, Plan, PlanResult, PricingInput};
use crate::pricing::tiers::unit_price;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest platform fee accepted from configuration (NT$1 trillion)
pub const MAX_PLATFORM_FEE: u64 = 1_000_000_000_000;

/// Platform fee amounts, charged once per year on top of every plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub standard: u64,
    pub discounted: u64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            standard: 100_000,
            discounted: 80_000,
        }
    }
}

impl FeeSchedule {
    /// Fee for an input; the discount flag only matters when the fee is included
    pub fn fee_for(&self, input: &PricingInput) -> u64 {
        match (input.include_platform_fee, input.apply_platform_discount) {
            (true, true) => self.discounted,
            (true, false) => self.standard,
            (false, _) => 0,
        }
    }
}

/// Calculator for comparing the yearly cost of each billing cadence
#[derive(Debug, Clone, Default)]
pub struct PricingCalculator {
    fees: FeeSchedule,
}

impl PricingCalculator {
    /// Create a new calculator with the given platform fee amounts
    pub fn new(fees: FeeSchedule) -> Self {
        Self { fees }
    }

    pub fn fees(&self) -> FeeSchedule {
        self.fees
    }

    /// Evaluate all four cadences and pick the cheapest
    pub fn evaluate(&self, input: &PricingInput) -> Evaluation {
        let paid_users = input.paid_users();
        let platform_fee = self.fees.fee_for(input);

        let results = Plan::ALL.map(|plan| {
            let unit_price = unit_price(paid_users, plan, input.total_employees);
            let annual_subscription_cost = u64::from(unit_price) * u64::from(paid_users) * 12;
            // cannot overflow for fees up to MAX_PLATFORM_FEE; saturate beyond that
            let total_cost = annual_subscription_cost.saturating_add(platform_fee);

            PlanResult {
                plan,
                unit_price,
                annual_subscription_cost,
                platform_fee,
                total_cost,
                avg_cost_per_person_per_month: total_cost as f64
                    / f64::from(input.total_employees)
                    / 12.0,
            }
        });

        let best_plan = cheapest_plan(&results);

        debug!(
            total_employees = input.total_employees,
            paid_users,
            platform_fee,
            best_plan = %best_plan,
            "Evaluated pricing"
        );

        Evaluation {
            input: *input,
            paid_users,
            platform_fee,
            small_business_exemption: input.is_small_business(),
            results,
            best_plan,
        }
    }
}

/// Evaluate with the default platform fee amounts
pub fn evaluate(input: &PricingInput) -> Evaluation {
    PricingCalculator::default().evaluate(input)
}

/// Strictly lowest total wins, so the earliest cadence keeps ties
fn cheapest_plan(results: &[PlanResult; 4]) -> Plan {
    let mut best = &results[0];
    for result in &results[1..] {
        if result.total_cost < best.total_cost {
            best = result;
        }
    }
    best.plan
}
