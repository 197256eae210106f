//! The `markboard validate` command.
//!
//! Dry-runs the tolerant commit parser over the input and reports what an
//! `analyze` run would keep, drop, or reject, without computing anything.

use anyhow::{Context, Result};

use crate::ScoreArgs;

pub fn execute(input: ScoreArgs) -> Result<()> {
    let config = markboard_providers::config::load_config_from(input.config.as_deref())?;
    let max_score = input.max_score.unwrap_or(config.thresholds.max_score);

    let mut expressions: Vec<String> = Vec::new();
    if let Some(expr) = &input.scores {
        expressions.push(expr.clone());
    }
    if let Some(file) = &input.file {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read score file: {}", file.display()))?;
        expressions.extend(content.lines().map(str::to_string));
    }
    anyhow::ensure!(
        !expressions.is_empty(),
        "nothing to validate; provide --scores or --file"
    );

    let mut valid = 0usize;
    let mut discarded = 0usize;
    let mut rejected_lines = 0usize;

    for (lineno, expr) in expressions.iter().enumerate() {
        let cleaned: String = expr
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '+')
            .collect();
        if cleaned.is_empty() {
            continue;
        }

        let mut line_valid = 0usize;
        let mut line_rejected = false;
        for segment in cleaned.split('+') {
            match segment.parse::<f64>() {
                Ok(v) if v < 0.0 => {
                    discarded += 1;
                    println!("  line {}: discarding negative \"{segment}\"", lineno + 1);
                }
                Ok(v) if v > max_score => {
                    line_rejected = true;
                    println!(
                        "  line {}: \"{segment}\" exceeds max score {max_score}",
                        lineno + 1
                    );
                }
                Ok(_) => line_valid += 1,
                Err(_) => {
                    if !segment.is_empty() {
                        discarded += 1;
                        println!("  line {}: discarding \"{segment}\"", lineno + 1);
                    }
                }
            }
        }

        if line_rejected {
            // an oversized value rejects its whole line, like a commit
            rejected_lines += 1;
        } else {
            valid += line_valid;
        }
    }

    println!(
        "\n{valid} valid value(s), {discarded} discarded segment(s), {rejected_lines} rejected line(s)."
    );
    if discarded == 0 && rejected_lines == 0 {
        println!("All score entries valid.");
    }

    Ok(())
}
