use std::path::{Component, Path, PathBuf};

use super::{AssetManager, OpenAsset};

/// Serves assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssetManager {
    root: PathBuf,
}

/// Contents of one file read by [`DirAssetManager`].
#[derive(Debug)]
pub struct DirAsset {
    bytes: Vec<u8>,
}

impl DirAssetManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps an asset name to a path below the root. Names escaping the root are rejected.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl AssetManager for DirAssetManager {
    type Asset = DirAsset;

    fn open(&self, name: &str) -> Option<DirAsset> {
        let path = self.resolve(name)?;
        match std::fs::read(&path) {
            Ok(bytes) => Some(DirAsset { bytes }),
            Err(e) => {
                log::debug!("cannot open asset {}: {e}", path.display());
                None
            }
        }
    }
}

impl OpenAsset for DirAsset {
    fn buffer(&self) -> Option<&[u8]> {
        Some(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{load_asset, AssetError};

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "cardboard-assets-{tag}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_files_below_root() {
        let dir = temp_dir("load");
        std::fs::write(dir.join("hello.txt"), b"hello").unwrap();

        let assets = DirAssetManager::new(&dir);
        assert_eq!(load_asset(&assets, "hello.txt").unwrap(), b"hello");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn rejects_names_outside_root() {
        let dir = temp_dir("escape");
        let assets = DirAssetManager::new(&dir);

        assert_eq!(
            load_asset(&assets, "../secret").unwrap_err(),
            AssetError::NotFound("../secret".into())
        );
        assert!(assets.open("/etc/hostname").is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
