use colored::Colorize;

use crate::pricing::{Evaluation, SMALL_BUSINESS_THRESHOLD};
use crate::report::format::format_money;

/// Narrative recommendation printed under the comparison table
pub fn render_summary(evaluation: &Evaluation, currency: &str) -> String {
    let input = &evaluation.input;
    let fee = format_money(currency, evaluation.platform_fee);

    let lines = if evaluation.small_business_exemption {
        vec![
            "Small-business offer:".bold().to_string(),
            format!(
                "  Total headcount is {} people, within the {}-and-under plan.",
                input.total_employees.to_string().bold(),
                SMALL_BUSINESS_THRESHOLD
            ),
            format!(
                "  No subscription fee is charged; only the platform setup fee of {} applies.",
                fee.bold()
            ),
            "  A good fit for small teams or an initial trial rollout.".to_string(),
        ]
    } else {
        vec![
            "How to choose:".bold().to_string(),
            format!(
                "  - Total headcount: {} people, {} free, {} paid",
                input.total_employees.to_string().bold(),
                input.free_users.to_string().bold(),
                evaluation.paid_users.to_string().bold()
            ),
            format!("  - Platform fee: {}", fee.bold()),
            format!(
                "  - Best value plan: {}",
                format!("* {} *", evaluation.best_plan).green().bold()
            ),
        ]
    };

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{evaluate, PricingInput};

    #[test]
    fn test_small_business_summary() {
        let evaluation = evaluate(&PricingInput::new(90, 0, true, false).unwrap());
        let summary = render_summary(&evaluation, "NT$");

        assert!(summary.contains("Small-business offer"));
        assert!(summary.contains("90"));
        assert!(summary.contains("NT$100,000"));
        assert!(!summary.contains("Best value plan"));
    }

    #[test]
    fn test_standard_summary_names_best_plan() {
        let evaluation = evaluate(&PricingInput::new(350, 100, true, true).unwrap());
        let summary = render_summary(&evaluation, "NT$");

        assert!(summary.contains("How to choose"));
        assert!(summary.contains("250"));
        assert!(summary.contains("NT$80,000"));
        assert!(summary.contains("* Annual *"));
    }
}
