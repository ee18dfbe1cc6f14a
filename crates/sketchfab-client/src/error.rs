//! Mapping of HTTP-level failures onto `SketchfabError`.

use reqwest::{Response, StatusCode};
use serde_json::Value;
use sketchfab_types::SketchfabError;

/// Connection-level failure: the request never produced a response.
pub(crate) fn transport(e: &reqwest::Error) -> SketchfabError {
    SketchfabError::Transport { status: e.status().map(|s| s.as_u16()), message: e.to_string() }
}

/// Read a response that must be a 200 carrying JSON.
///
/// Any other status becomes a transport error with the raw body attached.
pub(crate) async fn read_json(resp: Response, context: &str) -> Result<Value, SketchfabError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| transport(&e))?;

    if status != StatusCode::OK {
        tracing::warn!(status = status.as_u16(), "{} request failed", context);
        return Err(SketchfabError::Transport { status: Some(status.as_u16()), message: body });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::warn!(error = %e, "{} response is not valid JSON", context);
        SketchfabError::from_json_error(&e)
    })
}
