//! markboard-core — Score ledger, statistics engine, and input validation.
//!
//! This crate defines the data model and the pure computation core that the
//! rest of the markboard workspace builds on: entering scores through a
//! keypad-style buffer, deriving descriptive statistics from them, and
//! flattening the result for export or AI analysis.

pub mod export;
pub mod input;
pub mod ledger;
pub mod model;
pub mod prompt;
pub mod session;
pub mod statistics;
pub mod traits;
