use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShareError>;

#[derive(Debug, Error)]
pub enum ShareError {
    /// The environment cannot provide streaming (de)compression at all.
    /// Non-retryable; callers surface it as a distinct "not supported" message.
    #[error("capability unavailable: {0}")]
    CapabilityUnavailable(String),

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("corrupt payload: {0}")]
    CorruptPayload(String),
}
