// Copyright (c) 2026 Uplink Contributors.
// Licensed under the MIT license.

//! Error types for the uplink request wrapper
//!
//! Call-level failures (bad status, lockouts, network errors) never surface
//! here; they are delivered to the caller's error callback. This type covers
//! construction and transport plumbing only.

use thiserror::Error;

/// Result type alias for uplink operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the uplink client
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a transport-level (network) error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Check if this is a timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
