//! Error types for spsp-search

use thiserror::Error;

/// Result type alias for spsp-search operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before a scan starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A scan parameter is out of its domain
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument {
            name: "bound",
            reason: "must be at least 5".to_string(),
        };
        assert_eq!(err.to_string(), "invalid argument `bound`: must be at least 5");
    }
}
