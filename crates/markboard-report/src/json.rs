//! JSON persistence for a complete analysis.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use markboard_core::model::{GradeStats, Thresholds};

/// A complete analysis at one point in time: the inputs, the derived
/// snapshot, and (optionally) the AI advice text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Thresholds in effect.
    pub thresholds: Thresholds,
    /// The scores that were analyzed, newest first.
    pub scores: Vec<f64>,
    /// The derived statistics snapshot.
    pub stats: GradeStats,
    /// AI analysis text, if one was requested.
    #[serde(default)]
    pub advice: Option<String>,
}

impl AnalysisReport {
    pub fn new(thresholds: Thresholds, scores: Vec<f64>, stats: GradeStats) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            thresholds,
            scores,
            stats,
            advice: None,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AnalysisReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
