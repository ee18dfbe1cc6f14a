//! Model import models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::search::ModelSummary;
use crate::error::SketchfabError;

/// Options for `import_model`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportOptions {
    /// Carried through to the import; does not change behaviour yet
    pub use_cache: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { use_cache: true }
    }
}

/// Summary of an asset the loader accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadedAsset {
    /// File the asset was loaded from
    pub path: PathBuf,
    pub scenes: usize,
    pub nodes: usize,
    pub meshes: usize,
    pub materials: usize,
}

/// Flat record describing how an `import_model` call ended.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub model_info: ModelSummary,
    /// Handle of an entity spawned from the asset. Never populated yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawned_handle: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<LoadedAsset>,
}

impl ImportResult {
    /// Build the record for `uid` from the outcome of the import chain.
    pub fn from_outcome(uid: &str, outcome: Result<LoadedAsset, SketchfabError>) -> Self {
        let model_info = ModelSummary { uid: uid.to_string(), name: String::new() };
        match outcome {
            Ok(asset) => Self {
                success: true,
                error: None,
                model_info,
                spawned_handle: None,
                asset: Some(asset),
            },
            Err(e) => Self {
                success: false,
                error: Some(e.to_string()),
                model_info,
                spawned_handle: None,
                asset: None,
            },
        }
    }
}
