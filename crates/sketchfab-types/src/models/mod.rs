//! Domain models for the Sketchfab client.

mod credentials;
mod import;
mod search;
mod token;

pub use credentials::Credentials;
pub use import::{ImportOptions, ImportResult, LoadedAsset};
pub use search::{ModelSummary, SearchRequest, SearchResult};
pub use token::AccessTokenResult;
