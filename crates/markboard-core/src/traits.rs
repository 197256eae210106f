//! The advisor seam: the async trait AI-analysis backends implement.
//!
//! Implemented by the `markboard-providers` crate. The core only produces
//! the prompt and consumes the reply as opaque markdown text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for text-generation backends that turn a statistics prompt into a
/// teaching-analysis report.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Human-readable backend name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Generate an analysis for the given request.
    async fn advise(&self, request: &AdviceRequest) -> anyhow::Result<AdviceReport>;
}

/// Request for one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceRequest {
    /// Model identifier (e.g. "gemini-3-flash-preview").
    pub model: String,
    /// The fully built analysis prompt.
    pub prompt: String,
}

/// A generated analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceReport {
    /// Markdown-flavored analysis text.
    pub content: String,
    /// Model that actually produced the reply.
    pub model: String,
    /// Round-trip latency in milliseconds.
    pub latency_ms: u64,
}
