//! Mock advisor for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use markboard_core::traits::{AdviceReport, AdviceRequest, Advisor};

/// A mock advisor for exercising callers without real API traffic.
///
/// Returns configurable replies based on prompt substring matching.
pub struct MockAdvisor {
    /// Map of prompt substring → reply text.
    replies: HashMap<String, String>,
    /// Default reply if no prompt matches.
    default_reply: String,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last request received.
    last_request: Mutex<Option<AdviceRequest>>,
}

impl MockAdvisor {
    /// Create a mock with the given prompt→reply mappings.
    pub fn new(replies: HashMap<String, String>) -> Self {
        Self {
            replies,
            default_reply: "## 分析\n\n暂无建议。".to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock that always returns the same reply.
    pub fn with_fixed_reply(reply: &str) -> Self {
        Self {
            replies: HashMap::new(),
            default_reply: reply.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of calls made to this advisor.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The last request made to this advisor.
    pub fn last_request(&self) -> Option<AdviceRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl Advisor for MockAdvisor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn advise(&self, request: &AdviceRequest) -> anyhow::Result<AdviceReport> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        let content = self
            .replies
            .iter()
            .find(|(key, _)| request.prompt.contains(key.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| self.default_reply.clone());

        Ok(AdviceReport {
            content,
            model: request.model.clone(),
            latency_ms: 1,
        })
    }
}
