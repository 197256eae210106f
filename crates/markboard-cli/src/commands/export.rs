//! The `markboard export` command.

use std::path::PathBuf;

use anyhow::Result;

use markboard_report::csv::{default_csv_filename, write_csv_report};

use crate::ScoreArgs;

pub fn execute(input: ScoreArgs, output: Option<PathBuf>) -> Result<()> {
    let (session, config) = super::build_session(&input)?;
    let stats = session.stats();
    anyhow::ensure!(stats.count > 0, "no scores to export");

    let path = output.unwrap_or_else(|| {
        config
            .output_dir
            .join(default_csv_filename(chrono::Local::now().date_naive()))
    });

    write_csv_report(&stats, &session.thresholds(), &path)?;
    println!("CSV report saved to: {}", path.display());

    Ok(())
}
