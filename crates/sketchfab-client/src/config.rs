//! Client configuration.
//!
//! Values come from `config.json` in the data directory, with environment
//! variables taking priority. Missing credentials are not an error here;
//! `authenticate` reports them when it is actually called.

use serde::{Deserialize, Serialize};
use sketchfab_types::{Credentials, SketchfabError};
use std::fs;
use std::path::{Path, PathBuf};

use crate::endpoints::Endpoints;

const DATA_DIR: &str = ".sketchfab";
const CONFIG_FILE: &str = "config.json";
const DOWNLOAD_DIR: &str = "SketchfabDownloads";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

const ENV_DATA_DIR: &str = "SKETCHFAB_DATA_DIR";
const ENV_CLIENT_ID: &str = "SKETCHFAB_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "SKETCHFAB_CLIENT_SECRET";
const ENV_DOWNLOAD_DIR: &str = "SKETCHFAB_DOWNLOAD_DIR";
const ENV_BASE_URL: &str = "SKETCHFAB_BASE_URL";

/// Get data directory path.
///
/// Priority:
/// 1. `SKETCHFAB_DATA_DIR` environment variable
/// 2. `~/.sketchfab`
pub fn get_data_dir() -> Result<PathBuf, SketchfabError> {
    if let Some(custom_dir) = non_empty_env(ENV_DATA_DIR) {
        return Ok(PathBuf::from(custom_dir));
    }
    let home = dirs::home_dir().ok_or_else(|| SketchfabError::Config {
        message: "cannot determine home directory".to_string(),
    })?;
    Ok(home.join(DATA_DIR))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// On-disk shape of `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Read a config file, returning defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, SketchfabError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SketchfabError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        serde_json::from_str(&content).map_err(|e| SketchfabError::Config {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }
}

/// Everything a `SketchfabClient` needs besides its session token.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    /// Scratch directory for downloaded payloads, created on first import
    pub download_dir: PathBuf,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            endpoints: Endpoints::default(),
            download_dir: std::env::temp_dir().join(DOWNLOAD_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the data directory and the process environment.
    pub fn load() -> Result<Self, SketchfabError> {
        let data_dir = get_data_dir()?;
        let file = ConfigFile::load(&data_dir.join(CONFIG_FILE))?;
        Ok(Self::resolve(file, &data_dir, non_empty_env))
    }

    /// Merge a config file with environment lookups; the environment wins.
    pub fn resolve<F>(file: ConfigFile, data_dir: &Path, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials {
            client_id: env(ENV_CLIENT_ID).or(file.client_id).unwrap_or_default(),
            client_secret: env(ENV_CLIENT_SECRET).or(file.client_secret).unwrap_or_default(),
        };

        let download_dir = env(ENV_DOWNLOAD_DIR)
            .map(PathBuf::from)
            .or(file.download_dir)
            .unwrap_or_else(|| data_dir.join(DOWNLOAD_DIR));

        Self {
            credentials,
            endpoints: resolve_endpoints(env(ENV_BASE_URL)),
            download_dir,
            timeout_secs: file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }
}

fn resolve_endpoints(base_url: Option<String>) -> Endpoints {
    let Some(raw) = base_url else {
        return Endpoints::default();
    };
    let url = raw.trim().trim_end_matches('/');
    if url::Url::parse(url).is_err() {
        tracing::warn!("{} is not a valid URL, using defaults", ENV_BASE_URL);
        return Endpoints::default();
    }
    tracing::info!("Using custom Sketchfab base URL");
    Endpoints::with_base(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = ConfigFile::load(&dir.path().join("config.json")).expect("load");
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn test_credentials_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"client_id":"file-id","client_secret":"file-secret","timeout_secs":30}"#)
            .expect("write");

        let file = ConfigFile::load(&path).expect("load");
        let config = ClientConfig::resolve(file, dir.path(), env_from(&[]));

        assert_eq!(config.credentials, Credentials::new("file-id", "file-secret"));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.download_dir, dir.path().join("SketchfabDownloads"));
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = ConfigFile {
            client_id: Some("file-id".to_string()),
            client_secret: Some("file-secret".to_string()),
            download_dir: Some(PathBuf::from("/from/file")),
            timeout_secs: None,
        };
        let env = env_from(&[
            ("SKETCHFAB_CLIENT_ID", "env-id"),
            ("SKETCHFAB_DOWNLOAD_DIR", "/from/env"),
        ]);

        let config = ClientConfig::resolve(file, Path::new("/data"), env);

        assert_eq!(config.credentials.client_id, "env-id");
        assert_eq!(config.credentials.client_secret, "file-secret");
        assert_eq!(config.download_dir, PathBuf::from("/from/env"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").expect("write");

        let err = ConfigFile::load(&path).expect_err("should fail");
        assert!(matches!(err, SketchfabError::Config { .. }));
    }

    #[test]
    fn test_base_url_override() {
        let env = env_from(&[("SKETCHFAB_BASE_URL", "http://127.0.0.1:8080/")]);
        let config = ClientConfig::resolve(ConfigFile::default(), Path::new("/data"), env);
        assert_eq!(config.endpoints.api_base, "http://127.0.0.1:8080/v3");
    }

    #[test]
    fn test_invalid_base_url_falls_back() {
        let env = env_from(&[("SKETCHFAB_BASE_URL", "not a url")]);
        let config = ClientConfig::resolve(ConfigFile::default(), Path::new("/data"), env);
        assert_eq!(config.endpoints, Endpoints::default());
    }
}
