//! Horizontal bar chart of the average monthly cost per person
//!
//! One bar per cadence, scaled so the most expensive plan spans the
//! configured width, each annotated with its whole-dollar value.

use colored::Colorize;

use crate::pricing::Evaluation;

pub const CHART_TITLE: &str = "Average Monthly Cost per Plan";

/// Single bar in the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
    /// Bar length in characters
    pub length: usize,
}

impl ChartBar {
    /// Annotation shown after the bar: the table's two-decimal average with
    /// the cents dropped, so it never disagrees with the row it charts
    pub fn annotation(&self) -> String {
        let cents = (self.value * 100.0).round() / 100.0;
        format!("${}", cents.trunc() as u64)
    }
}

/// Compute bar lengths for each cadence
pub fn chart_bars(evaluation: &Evaluation, width: usize) -> Vec<ChartBar> {
    let max = evaluation
        .results
        .iter()
        .map(|r| r.avg_cost_per_person_per_month)
        .fold(0.0_f64, f64::max);

    evaluation
        .results
        .iter()
        .map(|result| {
            let value = result.avg_cost_per_person_per_month;
            let length = if max > 0.0 {
                ((value / max) * width as f64).round() as usize
            } else {
                0
            };

            ChartBar {
                label: result.plan.label(),
                value,
                length,
            }
        })
        .collect()
}

/// Render the chart as text
pub fn render_chart(evaluation: &Evaluation, currency: &str, width: usize) -> String {
    let bars = chart_bars(evaluation, width);
    let label_width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&CHART_TITLE.bold().to_string());
    out.push('\n');
    out.push_str(
        &format!("Avg. Monthly Cost ({}) by Subscription Plan", currency)
            .dimmed()
            .to_string(),
    );
    out.push('\n');

    for bar in &bars {
        out.push('\n');
        out.push_str(&format!(
            "{:<label_width$} │{} {}",
            bar.label,
            "█".repeat(bar.length).cyan(),
            bar.annotation(),
            label_width = label_width
        ));
    }

    out
}
