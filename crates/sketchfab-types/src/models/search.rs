//! Catalog search models.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SketchfabError;

/// Filters for a model search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub keywords: String,
    /// Only return models that can be downloaded
    pub downloadable: bool,
    /// Lower face-count bound, ignored when not positive
    pub min_face_count: i32,
    /// Upper face-count bound, ignored when not positive
    pub max_face_count: i32,
    pub tags: Vec<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            downloadable: true,
            min_face_count: 0,
            max_face_count: 0,
            tags: Vec::new(),
        }
    }
}

impl SearchRequest {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self { keywords: keywords.into(), ..Default::default() }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_face_count(mut self, min: i32, max: i32) -> Self {
        self.min_face_count = min;
        self.max_face_count = max;
        self
    }

    pub fn downloadable(mut self, downloadable: bool) -> Self {
        self.downloadable = downloadable;
        self
    }
}

/// One search hit.
///
/// Absent or null fields fall back to empty strings; only a value of the
/// wrong type makes a hit unreadable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelSummary {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub uid: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ModelSummary {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self { uid: uid.into(), name: name.into() }
    }
}

/// Flat record describing how a `search` call ended.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub results: Vec<ModelSummary>,
}

impl From<Result<Vec<ModelSummary>, SketchfabError>> for SearchResult {
    fn from(outcome: Result<Vec<ModelSummary>, SketchfabError>) -> Self {
        match outcome {
            Ok(results) => Self { success: true, error: None, results },
            Err(e) => Self { success: false, error: Some(e.to_string()), results: Vec::new() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_downloadable_without_bounds() {
        let request = SearchRequest::new("car");
        assert_eq!(request.keywords, "car");
        assert!(request.downloadable);
        assert_eq!(request.min_face_count, 0);
        assert_eq!(request.max_face_count, 0);
        assert!(request.tags.is_empty());
    }

    #[test]
    fn test_builder_keeps_tag_order() {
        let request = SearchRequest::new("tree").with_tag("low-poly").with_tag("nature");
        assert_eq!(request.tags, vec!["low-poly", "nature"]);
    }

    #[test]
    fn test_model_summary_ignores_extra_fields() {
        let json = r#"{"uid":"u1","name":"Car","faceCount":1200,"isDownloadable":true}"#;
        let model: ModelSummary = serde_json::from_str(json).expect("valid summary");
        assert_eq!(model, ModelSummary::new("u1", "Car"));
    }

    #[test]
    fn test_model_summary_defaults_missing_fields() {
        let model: ModelSummary =
            serde_json::from_str(r#"{"uid":"u2","name":null}"#).expect("null name");
        assert_eq!(model, ModelSummary::new("u2", ""));

        let model: ModelSummary = serde_json::from_str(r#"{"name":"No uid"}"#).expect("no uid");
        assert_eq!(model, ModelSummary::new("", "No uid"));

        assert!(serde_json::from_str::<ModelSummary>(r#"{"uid":42}"#).is_err());
        assert!(serde_json::from_str::<ModelSummary>(r#""text""#).is_err());
    }

    #[test]
    fn test_search_result_from_error() {
        let result = SearchResult::from(Err(SketchfabError::NotAuthenticated));
        assert!(!result.success);
        assert!(result.results.is_empty());
        assert!(result.error.is_some_and(|e| e.contains("Not authenticated")));
    }
}
