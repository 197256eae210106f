//! The collaborator boundary: analysis failures become a fixed message.
//!
//! Nothing past this point ever sees an advisor error. The caller gets
//! either the generated markdown or the fallback string, both as opaque
//! display text.

use markboard_core::traits::{AdviceRequest, Advisor};

/// Shown whenever the analysis call fails, regardless of cause.
pub const FALLBACK_MESSAGE: &str = "暂时无法生成 AI 分析报告，请检查网络连接或稍后再试。";

/// Run the analysis, converting any failure into [`FALLBACK_MESSAGE`].
pub async fn advise_or_fallback(advisor: &dyn Advisor, request: &AdviceRequest) -> String {
    match advisor.advise(request).await {
        Ok(report) => {
            tracing::debug!(
                advisor = advisor.name(),
                model = %report.model,
                latency_ms = report.latency_ms,
                "analysis generated"
            );
            report.content
        }
        Err(e) => {
            tracing::warn!(advisor = advisor.name(), error = %e, "analysis failed");
            FALLBACK_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use markboard_core::traits::AdviceReport;

    use crate::mock::MockAdvisor;

    struct BrokenAdvisor;

    #[async_trait]
    impl Advisor for BrokenAdvisor {
        fn name(&self) -> &str {
            "broken"
        }

        async fn advise(&self, _request: &AdviceRequest) -> anyhow::Result<AdviceReport> {
            anyhow::bail!("connection refused")
        }
    }

    fn request() -> AdviceRequest {
        AdviceRequest {
            model: "mock-model".into(),
            prompt: "prompt".into(),
        }
    }

    #[tokio::test]
    async fn success_passes_content_through() {
        let advisor = MockAdvisor::with_fixed_reply("## 诊断\n\n稳中有进。");
        let text = advise_or_fallback(&advisor, &request()).await;
        assert_eq!(text, "## 诊断\n\n稳中有进。");
    }

    #[tokio::test]
    async fn failure_becomes_the_fixed_message() {
        let text = advise_or_fallback(&BrokenAdvisor, &request()).await;
        assert_eq!(text, FALLBACK_MESSAGE);
    }
}
