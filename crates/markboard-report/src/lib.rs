//! markboard-report — serialization of analysis results.
//!
//! Turns a statistics snapshot into files and console output: a
//! spreadsheet-friendly CSV, a persistable JSON report, and a plain-text
//! rendering with a bar histogram.

pub mod csv;
pub mod json;
pub mod text;

pub use csv::{default_csv_filename, write_csv_report};
pub use json::AnalysisReport;
pub use text::render_text_report;
