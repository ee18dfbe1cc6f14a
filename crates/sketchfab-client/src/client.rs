use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use parking_lot::RwLock;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use sketchfab_types::{ImportOptions, LoadedAsset, ModelSummary, SearchRequest, SketchfabError};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{read_json, transport};
use crate::http::create_client;
use crate::loader::{AssetLoader, GltfLoader};

type Result<T> = std::result::Result<T, SketchfabError>;

/// Sketchfab API client holding one session's bearer token.
///
/// The token starts empty. It is set by a successful [`authenticate`] or by
/// [`set_access_token`], and is never refreshed or persisted. Concurrent
/// `authenticate` calls are not serialized: whichever completes last wins.
///
/// [`authenticate`]: SketchfabClient::authenticate
/// [`set_access_token`]: SketchfabClient::set_access_token
pub struct SketchfabClient {
    http: Client,
    config: ClientConfig,
    loader: Arc<dyn AssetLoader>,
    access_token: RwLock<String>,
}

impl SketchfabClient {
    /// Client using the default glTF loader.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_loader(config, Arc::new(GltfLoader))
    }

    pub fn with_loader(config: ClientConfig, loader: Arc<dyn AssetLoader>) -> Result<Self> {
        let http = create_client(config.timeout_secs)?;
        Ok(Self { http, config, loader, access_token: RwLock::new(String::new()) })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the session token. An empty string logs the session out.
    pub fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write() = token.into();
    }

    pub fn access_token(&self) -> String {
        self.access_token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.access_token.read().is_empty()
    }

    fn bearer(&self) -> Result<String> {
        let token = self.access_token.read();
        if token.is_empty() {
            return Err(SketchfabError::NotAuthenticated);
        }
        Ok(format!("Bearer {}", token.as_str()))
    }

    /// Exchange a username/password for an access token (OAuth2 password grant).
    ///
    /// On success the token is stored on the client and returned.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String> {
        let credentials = &self.config.credentials;
        if !credentials.is_complete() {
            return Err(SketchfabError::Config {
                message: "Client ID or Client Secret is not configured.".to_string(),
            });
        }

        let basic =
            STANDARD.encode(format!("{}:{}", credentials.client_id, credentials.client_secret));

        tracing::debug!("Requesting access token");
        let resp = self
            .http
            .post(&self.config.endpoints.token_url)
            .header(header::AUTHORIZATION, format!("Basic {basic}"))
            .header(header::ACCEPT, "application/json")
            .form(&[("grant_type", "password"), ("username", email), ("password", password)])
            .send()
            .await
            .map_err(|e| transport(&e))?;

        let body = read_json(resp, "Access token").await?;

        match body.get("access_token").and_then(Value::as_str) {
            Some(token) => {
                self.set_access_token(token);
                tracing::info!("Authenticated with Sketchfab");
                Ok(token.to_string())
            },
            None => {
                let err = match body.get("error_description").and_then(Value::as_str) {
                    Some(description) => {
                        SketchfabError::TokenRejected { description: description.to_string() }
                    },
                    None => SketchfabError::MissingField { field: "access_token".to_string() },
                };
                tracing::warn!("Access token request rejected: {}", err);
                Err(err)
            },
        }
    }

    /// Search the model catalog.
    ///
    /// Result elements that are not objects, or whose `uid`/`name` have the
    /// wrong type, are skipped rather than failing the whole search. Missing
    /// fields map to empty strings.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<ModelSummary>> {
        let bearer = self.bearer()?;
        let url = self.config.endpoints.search_url(request);

        tracing::debug!(keywords = %request.keywords, tags = request.tags.len(), "Searching models");
        let resp = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, bearer)
            .send()
            .await
            .map_err(|e| transport(&e))?;

        let mut body = read_json(resp, "Search").await?;

        let Some(Value::Array(items)) = body.get_mut("results").map(Value::take) else {
            tracing::warn!("Search response has no 'results' array");
            return Err(SketchfabError::MissingField { field: "results".to_string() });
        };

        let total = items.len();
        let models: Vec<ModelSummary> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(model) => Some(model),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed search result");
                    None
                },
            })
            .collect();

        tracing::info!("Search returned {} models ({} skipped)", models.len(), total - models.len());
        Ok(models)
    }

    /// Download a model's glTF payload, save it, and load it.
    ///
    /// Runs three stages in order (resolve URL, fetch payload, persist and
    /// load); the first failure ends the chain.
    pub async fn import_model(
        &self,
        model_uid: &str,
        options: ImportOptions,
    ) -> Result<LoadedAsset> {
        let bearer = self.bearer()?;
        let path = self.payload_path(model_uid)?;

        tracing::info!(uid = %model_uid, use_cache = options.use_cache, "Importing model");
        let download_url = self.resolve_download_url(model_uid, bearer).await?;
        let payload = self.fetch_payload(&download_url).await?;
        let path = self.persist(path, &payload).await?;
        let asset = self.load(path).await?;

        // TODO: spawn an entity from the loaded asset and fill ImportResult::spawned_handle
        // once a scene host is available.
        tracing::info!(uid = %model_uid, path = %asset.path.display(), "Model imported");
        Ok(asset)
    }

    async fn resolve_download_url(&self, model_uid: &str, bearer: String) -> Result<String> {
        let resp = self
            .http
            .get(self.config.endpoints.download_info_url(model_uid))
            .header(header::AUTHORIZATION, bearer)
            .send()
            .await
            .map_err(|e| transport(&e))?;

        let body = read_json(resp, "Model download URL").await?;

        body.pointer("/gltf/url")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                tracing::warn!(uid = %model_uid, "No gltf download URL in response");
                SketchfabError::MissingDownloadUrl { uid: model_uid.to_string() }
            })
    }

    /// The signed URL must not receive the bearer header.
    async fn fetch_payload(&self, url: &str) -> Result<Bytes> {
        let resp = self.http.get(url).send().await.map_err(|e| transport(&e))?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "Model data download failed");
            return Err(SketchfabError::Transport {
                status: Some(status.as_u16()),
                message: "Model data download failed.".to_string(),
            });
        }

        resp.bytes().await.map_err(|e| transport(&e))
    }

    fn payload_path(&self, model_uid: &str) -> Result<PathBuf> {
        let path = self.config.download_dir.join(format!("{model_uid}.gltf"));

        let unsafe_name = model_uid.is_empty()
            || model_uid.starts_with('.')
            || model_uid.contains(|c: char| c == '/' || c == '\\');
        if unsafe_name {
            return Err(SketchfabError::FileWrite {
                path: path.display().to_string(),
                message: "model uid is not a valid file name".to_string(),
            });
        }
        Ok(path)
    }

    async fn persist(&self, path: PathBuf, payload: &[u8]) -> Result<PathBuf> {
        let dir = &self.config.download_dir;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| SketchfabError::from_io_error(dir, &e))?;
        tokio::fs::write(&path, payload)
            .await
            .map_err(|e| SketchfabError::from_io_error(&path, &e))?;

        tracing::debug!(path = %path.display(), bytes = payload.len(), "Saved model payload");
        Ok(path)
    }

    async fn load(&self, path: PathBuf) -> Result<LoadedAsset> {
        let loader = Arc::clone(&self.loader);
        let failure = SketchfabError::AssetLoadFailure { path: path.display().to_string() };

        match tokio::task::spawn_blocking(move || loader.load_asset(&path)).await {
            Ok(Some(asset)) => Ok(asset),
            Ok(None) => {
                tracing::warn!("{}", failure);
                Err(failure)
            },
            Err(e) => {
                tracing::error!(error = %e, "Asset loader task failed");
                Err(failure)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lifecycle() {
        let client = SketchfabClient::new(ClientConfig::default()).expect("client");
        assert!(!client.is_authenticated());
        assert_eq!(client.bearer(), Err(SketchfabError::NotAuthenticated));

        client.set_access_token("abc");
        assert!(client.is_authenticated());
        assert_eq!(client.bearer(), Ok("Bearer abc".to_string()));

        client.set_access_token("");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_payload_path_rejects_unsafe_uids() {
        let dir = tempfile::tempdir().expect("tempdir");
        let client = SketchfabClient::new(ClientConfig::default().with_download_dir(dir.path()))
            .expect("client");

        for uid in ["", "../escape", ".hidden", "a/b", "a\\b"] {
            let err = client.payload_path(uid).expect_err("should fail");
            assert!(matches!(err, SketchfabError::FileWrite { .. }), "uid {uid:?}");
        }
        assert_eq!(client.payload_path("u1"), Ok(dir.path().join("u1.gltf")));
    }
}
