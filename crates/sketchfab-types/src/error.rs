//! Typed error definitions for the Sketchfab client.
//!
//! Every failure an operation can produce maps onto one variant here. Errors
//! are plain data (`Clone`, serde) so they can be carried inside the flat
//! result records and compared in tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by authentication, search and import.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum SketchfabError {
    /// Credentials missing or configuration unusable
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what is missing
        message: String,
    },

    /// An authenticated call was made without an access token
    #[error("Not authenticated. Please request an access token first.")]
    NotAuthenticated,

    /// Non-2xx response or connection failure
    #[error("Request failed. Code: {}, Message: {message}", .status.unwrap_or(0))]
    Transport {
        /// HTTP status, absent when the request never got a response
        status: Option<u16>,
        /// Raw response body or transport error text
        message: String,
    },

    /// Response body was not the JSON shape we expected
    #[error("Failed to parse JSON response: {message}")]
    Parse {
        /// Parser error text
        message: String,
    },

    /// A required JSON key was absent from a successful response
    #[error("Missing '{field}' field in response.")]
    MissingField {
        /// Name of the missing key
        field: String,
    },

    /// The token endpoint answered 200 with an `error_description`
    #[error("{description}")]
    TokenRejected {
        /// Server-provided description
        description: String,
    },

    /// Download-info response had no `gltf.url`
    #[error("Could not find gltf download URL in response for model {uid}.")]
    MissingDownloadUrl {
        /// Model that was being resolved
        uid: String,
    },

    /// Saving the payload to the scratch directory failed
    #[error("Failed to save downloaded model data to {path}: {message}")]
    FileWrite {
        /// Target path
        path: String,
        /// IO error text
        message: String,
    },

    /// The asset loader could not load the saved file
    #[error("Failed to load glTF asset from {path}.")]
    AssetLoadFailure {
        /// Path handed to the loader
        path: String,
    },
}

impl SketchfabError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::Parse { message: e.to_string() }
    }

    /// Create a file write error from an IO error.
    pub fn from_io_error(path: &std::path::Path, e: &std::io::Error) -> Self {
        Self::FileWrite { path: path.display().to_string(), message: e.to_string() }
    }

    /// HTTP status carried by a transport error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

/// Standard Result type using SketchfabError.
pub type Result<T> = std::result::Result<T, SketchfabError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = SketchfabError::MissingDownloadUrl { uid: "abc123".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("MissingDownloadUrl"));
        assert!(json.contains("abc123"));

        let deserialized: SketchfabError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_transport_display() {
        let err = SketchfabError::Transport { status: Some(403), message: "forbidden".to_string() };

        let msg = format!("{}", err);
        assert!(msg.contains("403"));
        assert!(msg.contains("forbidden"));
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_connection_failure_has_no_status() {
        let err = SketchfabError::Transport { status: None, message: "refused".to_string() };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("Code: 0"));
    }

    #[test]
    fn test_token_rejected_is_bare_description() {
        let err = SketchfabError::TokenRejected { description: "bad creds".to_string() };
        assert_eq!(err.to_string(), "bad creds");
    }
}
