use crate::error::PricingError;
use crate::pricing::tiers::SMALL_BUSINESS_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl Plan {
    /// All cadences, in the order they are evaluated and displayed
    pub const ALL: [Plan; 4] = [Plan::Monthly, Plan::Quarterly, Plan::SemiAnnual, Plan::Annual];

    /// Position in [`Plan::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Plan::Monthly => 0,
            Plan::Quarterly => 1,
            Plan::SemiAnnual => 2,
            Plan::Annual => 3,
        }
    }

    /// Display name used in tables, charts and exports
    pub fn label(&self) -> &'static str {
        match self {
            Plan::Monthly => "Monthly",
            Plan::Quarterly => "Quarterly",
            Plan::SemiAnnual => "Semi-Annual",
            Plan::Annual => "Annual",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headcount and platform-fee options for one evaluation
///
/// Build it with [`PricingInput::new`], which enforces `total_employees >= 1`
/// and clamps the free-user count to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingInput {
    pub total_employees: u32,
    pub free_users: u32,
    pub include_platform_fee: bool,
    pub apply_platform_discount: bool,
    /// Set when the requested free-user count exceeded the total and was clamped
    pub free_users_clamped: bool,
}

impl PricingInput {
    pub fn new(
        total_employees: u32,
        free_users: u32,
        include_platform_fee: bool,
        apply_platform_discount: bool,
    ) -> Result<Self, PricingError> {
        if total_employees == 0 {
            return Err(PricingError::InvalidHeadcount(total_employees));
        }

        Ok(Self {
            total_employees,
            free_users: free_users.min(total_employees),
            include_platform_fee,
            apply_platform_discount,
            free_users_clamped: free_users > total_employees,
        })
    }

    /// Headcount that is billed (total minus free, floored at zero)
    pub fn paid_users(&self) -> u32 {
        self.total_employees.saturating_sub(self.free_users)
    }

    /// Whether the small-business exemption applies.
    ///
    /// Note this looks at the total headcount, not the paid headcount: 90 total
    /// with no free users is exempt, while 150 total with 100 free is not.
    pub fn is_small_business(&self) -> bool {
        self.total_employees <= SMALL_BUSINESS_THRESHOLD
    }
}

/// Cost breakdown for one billing cadence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanResult {
    pub plan: Plan,
    /// Price per person per month
    pub unit_price: u32,
    /// unit_price * paid users * 12
    pub annual_subscription_cost: u64,
    pub platform_fee: u64,
    pub total_cost: u64,
    pub avg_cost_per_person_per_month: f64,
}

/// Result of evaluating all cadences for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub input: PricingInput,
    pub paid_users: u32,
    pub platform_fee: u64,
    pub small_business_exemption: bool,
    pub results: [PlanResult; 4],
    pub best_plan: Plan,
}

impl Evaluation {
    /// Result row for a given cadence
    pub fn result(&self, plan: Plan) -> &PlanResult {
        // results are always stored in Plan::ALL order
        &self.results[plan.index()]
    }

    /// Result row of the recommended cadence
    pub fn best(&self) -> &PlanResult {
        self.result(self.best_plan)
    }
}
