//! Core data model types for markboard.
//!
//! These are the fundamental types the whole workspace uses to represent
//! grading cutoffs and the derived statistics snapshot.

use serde::{Deserialize, Serialize};

/// Configurable grading cutoffs.
///
/// No ordering is enforced between the three fields: a configuration with
/// `passing > excellent` is accepted and the rates are still computed per
/// formula, even when the result is logically inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum score counted as a pass.
    #[serde(default = "default_passing")]
    pub passing: f64,
    /// Minimum score counted as excellent.
    #[serde(default = "default_excellent")]
    pub excellent: f64,
    /// Upper bound accepted at entry time.
    #[serde(default = "default_max_score")]
    pub max_score: f64,
}

fn default_passing() -> f64 {
    60.0
}

fn default_excellent() -> f64 {
    85.0
}

fn default_max_score() -> f64 {
    100.0
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            passing: default_passing(),
            excellent: default_excellent(),
            max_score: default_max_score(),
        }
    }
}

/// One bar of the fixed score histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Range label, e.g. `90~99分`.
    pub range: String,
    /// Number of scores falling in the range.
    pub count: usize,
}

/// Derived statistics snapshot.
///
/// Always recomputed in full from the current scores and thresholds, never
/// updated incrementally, so it is consistent with its inputs by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance (divide by `count`, not `count - 1`).
    pub variance: f64,
    /// Square root of the variance.
    pub std_dev: f64,
    /// Highest score.
    pub max: f64,
    /// Lowest score.
    pub min: f64,
    /// Number of scores.
    pub count: usize,
    /// Percentage of scores at or above `passing`.
    pub pass_rate: f64,
    /// Percentage of scores at or above `excellent`.
    pub excellence_rate: f64,
    /// Percentage of scores strictly below `passing`.
    pub failure_rate: f64,
    /// The 11 fixed histogram buckets, empty for an empty score list.
    pub distribution: Vec<Bucket>,
}

impl GradeStats {
    /// The snapshot for an empty score list: all fields zero, no buckets.
    pub fn empty() -> Self {
        Self {
            mean: 0.0,
            variance: 0.0,
            std_dev: 0.0,
            max: 0.0,
            min: 0.0,
            count: 0,
            pass_rate: 0.0,
            excellence_rate: 0.0,
            failure_rate: 0.0,
            distribution: Vec::new(),
        }
    }
}
