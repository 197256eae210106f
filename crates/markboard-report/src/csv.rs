//! CSV export of a statistics snapshot.
//!
//! The file starts with a UTF-8 BOM so spreadsheet tools pick up the
//! Chinese labels correctly; the bucket labels themselves carry a `分`
//! suffix for the same reason (bare `90~99` reads as a date in Excel).

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use markboard_core::export::csv_rows;
use markboard_core::model::{GradeStats, Thresholds};

const BOM: &str = "\u{feff}";

/// The default export filename for a given date, e.g.
/// `班级成绩分析报告_2026-08-28.csv`.
pub fn default_csv_filename(date: NaiveDate) -> String {
    format!("班级成绩分析报告_{}.csv", date.format("%Y-%m-%d"))
}

/// Quote a field when it contains a comma, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render the CSV document as a string.
pub fn csv_content(stats: &GradeStats, thresholds: &Thresholds) -> String {
    let mut out = String::from(BOM);
    for (label, value) in csv_rows(stats, thresholds) {
        if label.is_empty() && value.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&escape(&label));
            out.push(',');
            out.push_str(&escape(&value));
            out.push('\n');
        }
    }
    out
}

/// Write the CSV report to `path`, creating parent directories as needed.
pub fn write_csv_report(stats: &GradeStats, thresholds: &Thresholds, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, csv_content(stats, thresholds))
        .with_context(|| format!("failed to write CSV report to {}", path.display()))?;
    Ok(())
}
