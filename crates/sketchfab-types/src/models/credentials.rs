//! OAuth application credentials.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Client id/secret pair registered with Sketchfab.
///
/// Read once at startup and never mutated afterwards.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth application client id
    #[serde(default)]
    pub client_id: String,
    /// OAuth application client secret
    #[serde(default)]
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self { client_id: client_id.into(), client_secret: client_secret.into() }
    }

    /// Both halves present.
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.client_secret.is_empty() { "" } else { "***" };
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &secret)
            .finish()
    }
}
