//! Irish Rail client configuration errors.

/// Errors building an `IrishRailClient`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IrishRailError {
    /// The configured base URL cannot serve as a base for the endpoints
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
