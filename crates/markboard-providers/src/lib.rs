//! markboard-providers — AI analysis backends.
//!
//! Implements the `Advisor` trait for the Gemini REST API, plus a mock
//! backend for tests, and wraps every call in the fallback boundary: a
//! failed analysis becomes a fixed message, never a propagated error.

pub mod config;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod mock;

pub use config::{create_advisor, load_config, AdvisorConfig, MarkboardConfig};
pub use error::AdvisorError;
pub use fallback::{advise_or_fallback, FALLBACK_MESSAGE};
