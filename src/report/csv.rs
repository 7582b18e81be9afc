//! CSV export of the plan comparison
//!
//! The document mirrors the comparison table cell for cell and starts with a
//! UTF-8 byte-order mark so spreadsheet tools detect the encoding.

use std::borrow::Cow;
use std::path::Path;
use tracing::info;

use crate::error::PricingError;
use crate::pricing::Evaluation;
use crate::report::table::{comparison_rows, COMPARISON_COLUMNS};

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render the comparison as CSV bytes (BOM included)
pub fn to_csv(evaluation: &Evaluation, currency: &str) -> Vec<u8> {
    let mut out = String::new();

    push_record(&mut out, COMPARISON_COLUMNS.iter().copied());
    for row in comparison_rows(evaluation, currency) {
        push_record(&mut out, row.iter().map(String::as_str));
    }

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + out.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(out.as_bytes());
    bytes
}

/// Write the CSV report to `path`
pub fn write_csv(path: &Path, evaluation: &Evaluation, currency: &str) -> Result<(), PricingError> {
    let bytes = to_csv(evaluation, currency);

    std::fs::write(path, &bytes).map_err(|source| PricingError::ExportError {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "Wrote CSV report");
    Ok(())
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (idx, field) in fields.enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field));
    }
    out.push('\n');
}

/// Quote a field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
