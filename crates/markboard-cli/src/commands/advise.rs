//! The `markboard advise` command.

use anyhow::Result;

use markboard_core::prompt::build_prompt;

use crate::ScoreArgs;

pub async fn execute(input: ScoreArgs, prompt_only: bool, model: Option<String>) -> Result<()> {
    let (session, config) = super::build_session(&input)?;
    let stats = session.stats();
    anyhow::ensure!(stats.count > 0, "no scores to analyze");

    if prompt_only {
        println!("{}", build_prompt(&stats, &session.thresholds()));
        return Ok(());
    }

    let text = super::request_advice(&config, &stats, &session.thresholds(), model).await?;
    println!("{text}");

    Ok(())
}
