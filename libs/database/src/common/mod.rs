//! Utilities shared by all store implementations

pub mod diagnostic;
pub mod retry;

pub use diagnostic::{DIAGNOSTIC_MAX_CHARS, truncate_chars, truncate_diagnostic};
pub use retry::{RetryConfig, retry, retry_with_backoff};
