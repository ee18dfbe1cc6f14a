//! Authentication outcome.

use serde::{Deserialize, Serialize};

use crate::error::SketchfabError;

/// Flat record describing how an `authenticate` call ended.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessTokenResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Token that was stored, empty on failure
    pub access_token: String,
}

impl From<Result<String, SketchfabError>> for AccessTokenResult {
    fn from(outcome: Result<String, SketchfabError>) -> Self {
        match outcome {
            Ok(access_token) => Self { success: true, error: None, access_token },
            Err(e) => Self { success: false, error: Some(e.to_string()), access_token: String::new() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_success() {
        let result = AccessTokenResult::from(Ok("abc".to_string()));
        assert!(result.success);
        assert_eq!(result.access_token, "abc");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_from_rejection_keeps_description() {
        let result = AccessTokenResult::from(Err(SketchfabError::TokenRejected {
            description: "bad creds".to_string(),
        }));
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("bad creds"));
        assert!(result.access_token.is_empty());
    }
}
