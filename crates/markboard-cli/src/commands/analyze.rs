//! The `markboard analyze` command.

use std::path::PathBuf;

use anyhow::Result;

use markboard_core::model::GradeStats;
use markboard_report::csv::write_csv_report;
use markboard_report::json::AnalysisReport;
use markboard_report::text::render_text_report;

use crate::ScoreArgs;

pub async fn execute(
    input: ScoreArgs,
    json: Option<PathBuf>,
    csv: Option<PathBuf>,
    ai: bool,
    model: Option<String>,
) -> Result<()> {
    let (session, config) = super::build_session(&input)?;
    let stats = session.stats();
    let thresholds = session.thresholds();

    if stats.count > 0 {
        print_summary(&stats);
        println!();
    }
    println!("{}", render_text_report(&stats, &thresholds));

    let advice = if ai {
        anyhow::ensure!(stats.count > 0, "no scores to analyze");
        let text = super::request_advice(&config, &stats, &thresholds, model).await?;
        println!("AI 教学诊断:\n\n{text}\n");
        Some(text)
    } else {
        None
    };

    if let Some(path) = csv {
        write_csv_report(&stats, &thresholds, &path)?;
        eprintln!("CSV report saved to: {}", path.display());
    }

    if let Some(path) = json {
        let mut report = AnalysisReport::new(thresholds, session.scores().to_vec(), stats);
        report.advice = advice;
        report.save_json(&path)?;
        eprintln!("JSON report saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(stats: &GradeStats) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Count", "Mean", "Std Dev", "Pass %", "Excellent %", "Max", "Min"]);
    table.add_row(vec![
        Cell::new(stats.count),
        Cell::new(format!("{:.2}", stats.mean)),
        Cell::new(format!("{:.2}", stats.std_dev)),
        Cell::new(format!("{:.1}%", stats.pass_rate)),
        Cell::new(format!("{:.1}%", stats.excellence_rate)),
        Cell::new(stats.max),
        Cell::new(stats.min),
    ]);

    println!("{table}");
}
