//! The statistics engine: a pure transform from scores + thresholds to a
//! [`GradeStats`] snapshot.
//!
//! `compute` is total and deterministic. It holds no state and is recomputed
//! in full on every call, so the snapshot can never drift out of sync with
//! its inputs.

use crate::model::{Bucket, GradeStats, Thresholds};

/// Compute the full statistics snapshot for a score list.
///
/// An empty list yields the all-zero snapshot with an empty distribution.
pub fn compute(scores: &[f64], thresholds: &Thresholds) -> GradeStats {
    if scores.is_empty() {
        return GradeStats::empty();
    }

    let count = scores.len();
    let n = count as f64;

    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);

    let passing = scores.iter().filter(|&&s| s >= thresholds.passing).count();
    let excellent = scores.iter().filter(|&&s| s >= thresholds.excellent).count();
    let failing = scores.iter().filter(|&&s| s < thresholds.passing).count();

    GradeStats {
        mean,
        variance,
        std_dev,
        max,
        min,
        count,
        pass_rate: passing as f64 / n * 100.0,
        excellence_rate: excellent as f64 / n * 100.0,
        failure_rate: failing as f64 / n * 100.0,
        distribution: distribution(scores),
    }
}

/// The fixed 11-bucket histogram: `100`, then ten-point bands down to `0~9`.
///
/// The grid is hardcoded to a 0-100 scale and deliberately independent of
/// `Thresholds`. With `max_score > 100` a score above 100 falls into no
/// bucket at all while still counting toward the moments and rates.
/// The `分` suffix on labels keeps spreadsheet tools from reading the
/// ranges as dates.
fn distribution(scores: &[f64]) -> Vec<Bucket> {
    let mut buckets = Vec::with_capacity(11);

    buckets.push(Bucket {
        range: "100分".to_string(),
        count: scores.iter().filter(|&&s| s == 100.0).count(),
    });

    for band in (0..10).rev() {
        let lo = (band * 10) as f64;
        let hi = lo + 10.0;
        buckets.push(Bucket {
            range: format!("{}~{}分", band * 10, band * 10 + 9),
            count: scores.iter().filter(|&&s| s >= lo && s < hi).count(),
        });
    }

    buckets
}
