use thiserror::Error;

/// Failure modes of a remote analysis attempt.
///
/// Every variant triggers fallback in the orchestrator; none escalates to
/// the caller as a hard failure.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Transport failure or timeout
    #[error("network error: {0}")]
    Network(String),
    /// Rejected credential (401/403)
    #[error("authentication failed: {0}")]
    Auth(String),
    /// Response body contained no parseable JSON document
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Tier not configured or not reachable
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    /// Anything else, including unexpected HTTP statuses
    #[error("provider error: {0}")]
    Unknown(String),
}
