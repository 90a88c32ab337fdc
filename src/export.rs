//! CSV serialization of marked cells.
//!
//! One header row, then one row per active cell in activation order:
//! `timestamp,product,issue,x,y`. Rows are joined with `\n` and no trailing
//! newline. Serialization is pure; the caller clears the grid after a
//! successful transmission.

use crate::constants::CSV_HEADER;
use crate::grid::ActiveCell;

/// Session metadata stamped onto every CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMetadata {
    /// Local wall-clock time, fixed-width `YYYYMMDDHHMMSS`
    pub timestamp: String,
    /// Product label
    pub product: String,
    /// Issue label
    pub issue: String,
}

impl ExportMetadata {
    /// Create metadata stamped with the current local time.
    pub fn new(product: &str, issue: &str) -> Self {
        Self::with_timestamp(&now_stamp(), product, issue)
    }

    /// Create metadata with an explicit timestamp (for deterministic tests).
    pub fn with_timestamp(timestamp: &str, product: &str, issue: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            product: normalize_field(product),
            issue: normalize_field(issue),
        }
    }
}

/// Serialize the marked cells into the CSV wire format.
pub fn serialize(cells: &[ActiveCell], meta: &ExportMetadata) -> String {
    let mut lines = Vec::with_capacity(cells.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for cell in cells {
        lines.push(format!(
            "{},{},{},{},{}",
            meta.timestamp, meta.product, meta.issue, cell.coord.x, cell.coord.y
        ));
    }
    lines.join("\n")
}

/// File name the collaborator should save the payload under.
pub fn suggested_filename(meta: &ExportMetadata) -> String {
    format!("log_{}.csv", meta.timestamp)
}

/// Replace CSV-breaking characters in a label so every data row splits into
/// exactly five fields.
fn normalize_field(s: &str) -> String {
    s.replace([',', '\r', '\n'], " ")
}

fn now_stamp() -> String {
    chrono::Local::now().format("%Y%m%d%H%M%S").to_string()
}
