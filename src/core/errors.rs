//! Error types for the townsplit-rs library.
//!
//! All fallible operations in the library return [`Result`], whose error type
//! keeps a human-readable message together with whatever context is known at
//! the failure site (file path, configuration field, request URL).

use std::io;

use thiserror::Error;

/// Main result type for townsplit operations.
pub type Result<T> = std::result::Result<T, TownsplitError>;

/// Error type for all townsplit operations.
#[derive(Error, Debug)]
pub enum TownsplitError {
    /// I/O related errors (word-list files, config files)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Remote name generator errors
    #[error("Fetch error: {message}")]
    Fetch {
        /// Error description
        message: String,
        /// Request URL, when one was built
        url: Option<String>,
        /// Number of attempts made before giving up
        attempts: u32,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data type being serialized
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TownsplitError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
            url: None,
            attempts: 0,
        }
    }

    /// Attach the request URL to a fetch error
    pub fn with_url(mut self, request_url: impl Into<String>) -> Self {
        if let Self::Fetch { url, .. } = &mut self {
            *url = Some(request_url.into());
        }
        self
    }

    /// Record how many attempts preceded a fetch error
    pub fn with_attempts(mut self, count: u32) -> Self {
        if let Self::Fetch { attempts, .. } = &mut self {
            *attempts = count;
        }
        self
    }

    /// Whether a retry of the same operation may succeed.
    ///
    /// Network and status failures are worth retrying; a bad configuration or
    /// an unreadable payload will fail the same way again.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Io { .. })
    }
}

impl From<io::Error> for TownsplitError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for TownsplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for TownsplitError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest::Error> for TownsplitError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(ToString::to_string);
        Self::Fetch {
            message: format!("request failed: {err}"),
            url,
            attempts: 0,
        }
    }
}
