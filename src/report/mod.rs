//! Presentation of an evaluation: comparison table, narrative summary,
//! bar chart and CSV export

pub mod chart;
pub mod csv;
pub mod format;
pub mod summary;
pub mod table;

pub use chart::{chart_bars, render_chart, ChartBar};
pub use csv::{to_csv, write_csv, UTF8_BOM};
pub use summary::render_summary;
pub use table::{comparison_rows, comparison_table, tier_table, COMPARISON_COLUMNS};
