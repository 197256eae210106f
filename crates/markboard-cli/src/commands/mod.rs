//! Subcommand implementations.

pub mod advise;
pub mod analyze;
pub mod export;
pub mod init;
pub mod validate;

use anyhow::{Context, Result};

use markboard_core::model::{GradeStats, Thresholds};
use markboard_core::prompt::build_prompt;
use markboard_core::session::GradeSession;
use markboard_core::traits::AdviceRequest;
use markboard_providers::config::{create_advisor, load_config_from, MarkboardConfig};
use markboard_providers::fallback::advise_or_fallback;

use crate::ScoreArgs;

/// Load config, resolve thresholds, and feed every input expression
/// through the session's commit path.
///
/// Rejected lines (any value above `max_score`) are reported on stderr
/// and skipped; malformed segments inside a line are dropped silently by
/// the tolerant parser, matching interactive entry.
pub(crate) fn build_session(input: &ScoreArgs) -> Result<(GradeSession, MarkboardConfig)> {
    let config = load_config_from(input.config.as_deref())?;

    let mut thresholds = config.thresholds;
    if let Some(passing) = input.passing {
        thresholds.passing = passing;
    }
    if let Some(excellent) = input.excellent {
        thresholds.excellent = excellent;
    }
    if let Some(max_score) = input.max_score {
        thresholds.max_score = max_score;
    }

    let mut session = GradeSession::new(thresholds);

    let mut expressions: Vec<String> = Vec::new();
    if let Some(expr) = &input.scores {
        expressions.push(expr.clone());
    }
    if let Some(file) = &input.file {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read score file: {}", file.display()))?;
        expressions.extend(content.lines().map(str::to_string));
    }

    for expr in &expressions {
        if expr.trim().is_empty() {
            continue;
        }
        session.load_expression(expr);
        if session.commit_entry() == 0 && !session.entry().is_empty() {
            if session.error_showing() {
                eprintln!(
                    "  Rejected: \"{}\" exceeds max score {}",
                    expr.trim(),
                    thresholds.max_score
                );
            }
            session.reset_entry();
        }
    }

    Ok((session, config))
}

/// Build the analysis prompt and run it through the configured advisor,
/// returning either the generated markdown or the fixed fallback message.
pub(crate) async fn request_advice(
    config: &MarkboardConfig,
    stats: &GradeStats,
    thresholds: &Thresholds,
    model: Option<String>,
) -> Result<String> {
    let advisor_config = config.advisors.get(&config.default_advisor).ok_or_else(|| {
        anyhow::anyhow!(
            "advisor '{}' not found in config. Available: {:?}",
            config.default_advisor,
            config.advisors.keys().collect::<Vec<_>>()
        )
    })?;
    let advisor = create_advisor(advisor_config)?;

    let request = AdviceRequest {
        model: model.unwrap_or_else(|| config.default_model.clone()),
        prompt: build_prompt(stats, thresholds),
    };

    Ok(advise_or_fallback(advisor.as_ref(), &request).await)
}
