//! Sketchfab REST endpoints and URL construction.

use sketchfab_types::SearchRequest;

const TOKEN_URL: &str = "https://sketchfab.com/oauth2/token/";
const API_BASE_URL: &str = "https://api.sketchfab.com/v3";

/// Base URLs the client talks to.
///
/// Defaults to the public Sketchfab hosts; tests point these at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// OAuth2 token endpoint (password grant)
    pub token_url: String,
    /// Root of the v3 REST API, without trailing slash
    pub api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self { token_url: TOKEN_URL.to_string(), api_base: API_BASE_URL.to_string() }
    }
}

impl Endpoints {
    /// Endpoints rooted at a single host, e.g. a local mock server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self { token_url: format!("{base}/oauth2/token/"), api_base: format!("{base}/v3") }
    }

    pub fn search_url(&self, request: &SearchRequest) -> String {
        format!("{}/search?{}", self.api_base.trim_end_matches('/'), build_search_query(request))
    }

    pub fn download_info_url(&self, model_uid: &str) -> String {
        format!(
            "{}/models/{}/download",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(model_uid)
        )
    }
}

/// Query string for a model search, without the leading `?`.
///
/// Face-count bounds are emitted only when positive. Tags are percent-encoded
/// individually and joined with a literal `+`, which Sketchfab reads as a tag
/// separator, so this cannot go through a form serializer.
pub fn build_search_query(request: &SearchRequest) -> String {
    let mut query = format!("type=models&q={}", urlencoding::encode(&request.keywords));

    if request.downloadable {
        query.push_str("&downloadable=true");
    }
    if request.min_face_count > 0 {
        query.push_str(&format!("&min_face_count={}", request.min_face_count));
    }
    if request.max_face_count > 0 {
        query.push_str(&format!("&max_face_count={}", request.max_face_count));
    }
    if !request.tags.is_empty() {
        let tags: Vec<_> = request.tags.iter().map(|t| urlencoding::encode(t)).collect();
        query.push_str("&tags=");
        query.push_str(&tags.join("+"));
    }

    query
}
