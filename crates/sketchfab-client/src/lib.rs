#![doc = include_str!("../README.md")]

mod client;
mod config;
mod endpoints;
mod error;
mod http;
mod loader;

pub use client::SketchfabClient;
pub use config::{get_data_dir, ClientConfig, ConfigFile};
pub use endpoints::{build_search_query, Endpoints};
pub use loader::{AssetLoader, GltfLoader};
pub use sketchfab_types::{
    models, AccessTokenResult, Credentials, ImportOptions, ImportResult, LoadedAsset,
    ModelSummary, Result, SearchRequest, SearchResult, SketchfabError,
};
