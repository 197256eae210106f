//! Advisor error types.
//!
//! Typed so callers can classify failures without string matching. None of
//! these ever cross the fallback boundary in `fallback.rs`; they exist for
//! logging and for tests that assert on the failure mode.

use thiserror::Error;

/// Errors that can occur when calling an AI analysis backend.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The API returned a 429 rate limit response.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Authentication failed (invalid or missing API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}

impl AdvisorError {
    /// Returns `true` if this failure would not go away on retry.
    pub fn is_permanent(&self) -> bool {
        matches!(self, AdvisorError::AuthenticationFailed(_))
    }
}
