use thiserror::Error;

/// Failures crossing the API-client boundary.
///
/// Every variant is terminal for the request that produced it: report
/// stores degrade to an empty view instead of propagating these upward.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}
