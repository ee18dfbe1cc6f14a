//! Asset loading for downloaded payloads.

use sketchfab_types::LoadedAsset;
use std::path::Path;

/// Turns a saved payload into an engine asset.
///
/// Returns `None` when the file cannot be loaded; the client reports that as
/// `SketchfabError::AssetLoadFailure`. Called from a blocking task, so
/// implementations may do synchronous IO.
pub trait AssetLoader: Send + Sync {
    fn load_asset(&self, path: &Path) -> Option<LoadedAsset>;
}

/// Default loader: parses the file as glTF (JSON or binary) with the `gltf`
/// crate and reports document counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct GltfLoader;

impl AssetLoader for GltfLoader {
    fn load_asset(&self, path: &Path) -> Option<LoadedAsset> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read glTF file");
                return None;
            },
        };

        let gltf = match gltf::Gltf::from_slice(&bytes) {
            Ok(gltf) => gltf,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse glTF");
                return None;
            },
        };

        Some(LoadedAsset {
            path: path.to_path_buf(),
            scenes: gltf.scenes().count(),
            nodes: gltf.nodes().count(),
            meshes: gltf.meshes().count(),
            materials: gltf.materials().count(),
        })
    }
}

impl<F> AssetLoader for F
where
    F: Fn(&Path) -> Option<LoadedAsset> + Send + Sync,
{
    fn load_asset(&self, path: &Path) -> Option<LoadedAsset> {
        self(path)
    }
}
