//! Error types for the explorer
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while configuring a cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// TTL must be strictly positive
    #[error("Invalid TTL: {0:?} (must be greater than zero)")]
    InvalidTtl(Duration),

    /// Sweep interval must be strictly positive
    #[error("Invalid sweep interval: {0:?} (must be greater than zero)")]
    InvalidSweepInterval(Duration),
}

// == Config Error Enum ==
/// Errors raised while validating explorer settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid page size: {0} (must be greater than zero)")]
    InvalidPageSize(u32),

    #[error("API base URL is empty")]
    EmptyApiBase,

    /// Cache TTL or sweep interval rejected
    #[error(transparent)]
    Cache(#[from] CacheError),
}

// == Fetch Error Enum ==
/// Errors raised while retrieving or decoding a remote resource.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("response failed with status code: {status} and body: {body}")]
    Status { status: u16, body: String },

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Command Error Enum ==
/// Errors reported back to the user by a REPL command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command needs an argument that was not given
    #[error("usage: {command} <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// `mapb` called on the first page
    #[error("no previous locations found")]
    NoPreviousPage,

    /// `map` called on the last page
    #[error("no more locations found")]
    NoNextPage,

    /// Remote lookup failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache configuration.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "response failed with status code: 404 and body: Not Found"
        );
    }

    #[test]
    fn test_command_error_wraps_fetch_error() {
        let fetch = FetchError::Status {
            status: 500,
            body: String::new(),
        };
        let err: CommandError = fetch.into();
        assert!(matches!(err, CommandError::Fetch(_)));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_config_error_wraps_cache_error() {
        let err: ConfigError = CacheError::InvalidTtl(Duration::ZERO).into();
        assert!(matches!(err, ConfigError::Cache(CacheError::InvalidTtl(_))));
        assert_eq!(err.to_string(), "Invalid TTL: 0ns (must be greater than zero)");
    }

    #[test]
    fn test_missing_argument_message() {
        let err = CommandError::MissingArgument {
            command: "explore",
            argument: "area",
        };
        assert_eq!(err.to_string(), "usage: explore <area>");
    }
}
