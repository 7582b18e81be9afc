use comfy_table::{presets::UTF8_FULL, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pricing::{Evaluation, Plan, TIERS};
use crate::report::format::{format_average, format_money, format_unit_price};

/// Column headers of the plan comparison, shared with the CSV export
pub const COMPARISON_COLUMNS: [&str; 5] = [
    "Plan",
    "Per Person / Month",
    "Annual Subscription (excl. Platform Fee)",
    "Total incl. Platform Fee",
    "Avg Cost per Person / Month",
];

/// Formatted comparison rows, one per cadence in evaluation order
pub fn comparison_rows(evaluation: &Evaluation, currency: &str) -> Vec<[String; 5]> {
    evaluation
        .results
        .iter()
        .map(|result| {
            [
                result.plan.label().to_string(),
                format_unit_price(currency, result.unit_price),
                format_money(currency, result.annual_subscription_cost),
                format_money(currency, result.total_cost),
                format_average(currency, result.avg_cost_per_person_per_month),
            ]
        })
        .collect()
}

/// Plan comparison table with the recommended plan highlighted
pub fn comparison_table(evaluation: &Evaluation, currency: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        COMPARISON_COLUMNS
            .iter()
            .map(|name| Cell::new(name.to_uppercase()).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );

    for (result, row) in evaluation.results.iter().zip(comparison_rows(evaluation, currency)) {
        let is_best = result.plan == evaluation.best_plan;
        let cells = row.into_iter().enumerate().map(|(idx, text)| {
            let cell = Cell::new(text);
            let cell = if idx == 0 {
                cell
            } else {
                cell.set_alignment(CellAlignment::Right)
            };
            if is_best {
                cell.fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                cell
            }
        });
        table.add_row(cells.collect::<Vec<_>>());
    }

    table
}

/// The full price sheet: every tier with its per-month and per-period prices
pub fn tier_table(currency: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("HEADCOUNT").fg(Color::Cyan),
        Cell::new("MONTHLY /MO").fg(Color::Cyan),
        Cell::new("QUARTERLY /QTR").fg(Color::Cyan),
        Cell::new("QUARTERLY /MO").fg(Color::Cyan),
        Cell::new("SEMI-ANNUAL /HALF").fg(Color::Cyan),
        Cell::new("SEMI-ANNUAL /MO").fg(Color::Cyan),
        Cell::new("ANNUAL /YR").fg(Color::Cyan),
        Cell::new("ANNUAL /MO").fg(Color::Cyan),
    ]);

    for tier in TIERS.iter() {
        let price = |value: u32| {
            Cell::new(format_unit_price(currency, value)).set_alignment(CellAlignment::Right)
        };

        table.add_row(vec![
            Cell::new(tier.label),
            price(tier.price_for(Plan::Monthly)),
            price(tier.period_price_for(Plan::Quarterly)),
            price(tier.price_for(Plan::Quarterly)),
            price(tier.period_price_for(Plan::SemiAnnual)),
            price(tier.price_for(Plan::SemiAnnual)),
            price(tier.period_price_for(Plan::Annual)),
            price(tier.price_for(Plan::Annual)),
        ]);
    }

    table
}
