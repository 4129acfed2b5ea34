use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Caller input failed a hard constraint. The message is safe to show.
    #[error("{0}")]
    Validation(String),

    /// Network failure, non-success status or undecodable body from the model
    /// service. The message is internal detail and must only be logged.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("LLM credential is not configured")]
    NotConfigured,

    #[error("LLM request timed out")]
    Timeout,

    #[error("internal error: {0}")]
    Internal(String),
}
