//! Fixed headcount price table
//!
//! Seven tiers with ascending upper bounds on the paid headcount. Prices are
//! quoted per person per month for each cadence; the per-period bundle prices
//! from the published price sheet are kept for display only.

use crate::pricing::models::Plan;
use serde::Serialize;

/// Total headcount at or below which no subscription fee is charged
pub const SMALL_BUSINESS_THRESHOLD: u32 = 100;

/// Single price tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    /// Headcount bracket as shown on the price sheet, e.g. "201-500"
    pub label: &'static str,
    /// Maximum paid users covered (None = unlimited)
    pub up_to: Option<u32>,
    pub monthly: u32,
    pub quarterly: u32,
    pub semi_annual: u32,
    pub annual: u32,
    pub quarterly_per_quarter: u32,
    pub semi_annual_per_half_year: u32,
    pub annual_per_year: u32,
}

impl Tier {
    /// Per-person-per-month price for a cadence
    pub fn price_for(&self, plan: Plan) -> u32 {
        match plan {
            Plan::Monthly => self.monthly,
            Plan::Quarterly => self.quarterly,
            Plan::SemiAnnual => self.semi_annual,
            Plan::Annual => self.annual,
        }
    }

    /// Per-person price for one whole billing period of a cadence
    pub fn period_price_for(&self, plan: Plan) -> u32 {
        match plan {
            Plan::Monthly => self.monthly,
            Plan::Quarterly => self.quarterly_per_quarter,
            Plan::SemiAnnual => self.semi_annual_per_half_year,
            Plan::Annual => self.annual_per_year,
        }
    }

    pub fn covers(&self, paid_users: u32) -> bool {
        self.up_to.map_or(true, |max| paid_users <= max)
    }
}

pub static TIERS: [Tier; 7] = [
    Tier {
        label: "0-100",
        up_to: Some(100),
        monthly: 250,
        quarterly: 145,
        semi_annual: 65,
        annual: 50,
        quarterly_per_quarter: 435,
        semi_annual_per_half_year: 390,
        annual_per_year: 600,
    },
    Tier {
        label: "101-200",
        up_to: Some(200),
        monthly: 240,
        quarterly: 100,
        semi_annual: 63,
        annual: 48,
        quarterly_per_quarter: 302,
        semi_annual_per_half_year: 378,
        annual_per_year: 576,
    },
    Tier {
        label: "201-500",
        up_to: Some(500),
        monthly: 230,
        quarterly: 97,
        semi_annual: 61,
        annual: 46,
        quarterly_per_quarter: 291,
        semi_annual_per_half_year: 364,
        annual_per_year: 552,
    },
    Tier {
        label: "501-1000",
        up_to: Some(1000),
        monthly: 220,
        quarterly: 94,
        semi_annual: 59,
        annual: 44,
        quarterly_per_quarter: 283,
        semi_annual_per_half_year: 354,
        annual_per_year: 528,
    },
    Tier {
        label: "1001-5000",
        up_to: Some(5000),
        monthly: 210,
        quarterly: 88,
        semi_annual: 55,
        annual: 42,
        quarterly_per_quarter: 263,
        semi_annual_per_half_year: 329,
        annual_per_year: 504,
    },
    Tier {
        label: "5001-10000",
        up_to: Some(10000),
        monthly: 185,
        quarterly: 77,
        semi_annual: 48,
        annual: 37,
        quarterly_per_quarter: 230,
        semi_annual_per_half_year: 287,
        annual_per_year: 444,
    },
    Tier {
        label: "10000+",
        up_to: None,
        monthly: 160,
        quarterly: 67,
        semi_annual: 42,
        annual: 32,
        quarterly_per_quarter: 202,
        semi_annual_per_half_year: 252,
        annual_per_year: 384,
    },
];

/// First tier (ascending bounds) that covers the paid headcount
pub fn find_tier(paid_users: u32) -> &'static Tier {
    // the last tier is unbounded, so the fallback is never reached in practice
    TIERS
        .iter()
        .find(|tier| tier.covers(paid_users))
        .unwrap_or(&TIERS[TIERS.len() - 1])
}

/// Per-person-per-month price for a cadence
///
/// Returns 0 for every cadence when `total_employees` is at or below
/// [`SMALL_BUSINESS_THRESHOLD`], whatever the paid headcount is.
pub fn unit_price(paid_users: u32, plan: Plan, total_employees: u32) -> u32 {
    if total_employees <= SMALL_BUSINESS_THRESHOLD {
        return 0;
    }

    find_tier(paid_users).price_for(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_bounds_strictly_increasing() {
        let bounds: Vec<u32> = TIERS.iter().filter_map(|t| t.up_to).collect();
        assert_eq!(bounds.len(), TIERS.len() - 1);
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert!(TIERS[TIERS.len() - 1].up_to.is_none());
    }

    #[test]
    fn test_small_business_always_free() {
        for total in [1, 50, 99, 100] {
            for paid in [0, total / 2, total] {
                for plan in Plan::ALL {
                    assert_eq!(unit_price(paid, plan, total), 0, "total={total} paid={paid}");
                }
            }
        }
    }

    #[test]
    fn test_exemption_uses_total_not_paid_headcount() {
        // 150 total, 100 free: 50 paid, but not exempt
        assert_eq!(unit_price(50, Plan::Monthly, 150), 250);
        // 90 total, 0 free: 90 paid, exempt
        assert_eq!(unit_price(90, Plan::Monthly, 90), 0);
    }

    #[test]
    fn test_tier_boundaries() {
        let total = 20_000;
        assert_eq!(unit_price(0, Plan::Monthly, total), 250);
        assert_eq!(unit_price(100, Plan::Monthly, total), 250);
        assert_eq!(unit_price(101, Plan::Monthly, total), 240);
        assert_eq!(unit_price(200, Plan::Quarterly, total), 100);
        assert_eq!(unit_price(201, Plan::Quarterly, total), 97);
        assert_eq!(unit_price(500, Plan::SemiAnnual, total), 61);
        assert_eq!(unit_price(501, Plan::SemiAnnual, total), 59);
        assert_eq!(unit_price(5000, Plan::Annual, total), 42);
        assert_eq!(unit_price(10000, Plan::Annual, total), 37);
        assert_eq!(unit_price(10001, Plan::Annual, total), 32);
        assert_eq!(unit_price(u32::MAX, Plan::Monthly, u32::MAX), 160);
    }

    #[test]
    fn test_scenario_quarterly_price_for_250_paid() {
        assert_eq!(unit_price(250, Plan::Monthly, 350), 230);
        assert_eq!(unit_price(250, Plan::Quarterly, 350), 97);
    }

    #[test]
    fn test_prices_non_increasing_across_tiers() {
        for plan in Plan::ALL {
            let prices: Vec<u32> = TIERS.iter().map(|t| t.price_for(plan)).collect();
            assert!(
                prices.windows(2).all(|w| w[0] >= w[1]),
                "{plan} prices increase: {prices:?}"
            );
        }
    }

    #[test]
    fn test_find_tier_labels() {
        assert_eq!(find_tier(0).label, "0-100");
        assert_eq!(find_tier(250).label, "201-500");
        assert_eq!(find_tier(10_001).label, "10000+");
    }

    #[test]
    fn test_period_price_for() {
        let tier = find_tier(250);
        assert_eq!(tier.period_price_for(Plan::Monthly), 230);
        assert_eq!(tier.period_price_for(Plan::Quarterly), 291);
        assert_eq!(tier.period_price_for(Plan::SemiAnnual), 364);
        assert_eq!(tier.period_price_for(Plan::Annual), 552);
    }
}
