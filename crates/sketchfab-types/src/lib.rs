//! # Sketchfab Types
//!
//! Core types, models, and error definitions for the Sketchfab client.
//!
//! - **`error`** - Typed error taxonomy shared by every client operation
//! - **`models`** - Domain models (credentials, search, import, token results)
//!
//! ## Architecture Role
//!
//! `sketchfab-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     sketchfab-types (this crate)
//!             │
//!             ▼
//!     sketchfab-client
//!             │
//!             ▼
//!      sketchfab-cli
//! ```
//!
//! All types are serializable via serde so results can be printed or shipped
//! over IPC unchanged.

pub mod error;
pub mod models;

pub use error::{Result, SketchfabError};

pub use models::{
    AccessTokenResult, Credentials, ImportOptions, ImportResult, LoadedAsset, ModelSummary,
    SearchRequest, SearchResult,
};
