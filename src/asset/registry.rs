//! Asset registry
//!
//! Explicitly owned, key-addressed storage for loaded resources. Scenes
//! load what they need once, then hand the registry to whoever draws.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use macroquad::texture::{load_texture, FilterMode, Texture2D};

#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// A file could not be loaded or decoded.
    Load { key: String, message: String },
    /// No asset is registered under this key.
    Missing(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Load { key, message } => write!(f, "failed to load asset '{}': {}", key, message),
            AssetError::Missing(key) => write!(f, "no asset registered as '{}'", key),
        }
    }
}

impl std::error::Error for AssetError {}

/// Assets of one type keyed by name.
#[derive(Debug)]
pub struct AssetRegistry<T> {
    assets: HashMap<String, T>,
    /// Relative asset paths resolve against this directory
    base_dir: PathBuf,
}

impl<T> Default for AssetRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AssetRegistry<T> {
    pub fn new() -> Self {
        Self::with_dir(".")
    }

    pub fn with_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets: HashMap::new(),
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Registers `asset`, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, asset: T) -> Option<T> {
        self.assets.insert(key.into(), asset)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.assets.get(key)
    }

    /// Like [`get`](Self::get) but a missing key is an error.
    pub fn require(&self, key: &str) -> Result<&T, AssetError> {
        self.assets.get(key).ok_or_else(|| AssetError::Missing(key.to_string()))
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.assets.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.assets.contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.assets.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn clear(&mut self) {
        self.assets.clear();
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl AssetRegistry<Texture2D> {
    /// Loads every `key -> path` texture. Stops at the first failure.
    pub async fn load_textures(&mut self, textures: &BTreeMap<String, PathBuf>) -> Result<usize, AssetError> {
        for (key, path) in textures {
            let full = self.resolve(path);
            let texture = load_texture(&full.to_string_lossy())
                .await
                .map_err(|e| AssetError::Load { key: key.clone(), message: format!("{:?}", e) })?;
            texture.set_filter(FilterMode::Nearest);
            log::info!("loaded texture '{}' from {}", key, full.display());
            self.insert(key.clone(), texture);
        }
        Ok(textures.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_require() {
        let mut registry: AssetRegistry<u32> = AssetRegistry::new();
        assert!(registry.insert("stars", 1).is_none());
        assert_eq!(registry.insert("stars", 2), Some(1));
        registry.insert("nebula", 3);

        assert_eq!(registry.get("stars"), Some(&2));
        assert_eq!(registry.require("nebula"), Ok(&3));
        assert_eq!(registry.require("void"), Err(AssetError::Missing("void".to_string())));
        assert_eq!(registry.keys(), vec!["nebula", "stars"]);
    }

    #[test]
    fn test_resolve_relative_paths() {
        let registry: AssetRegistry<()> = AssetRegistry::with_dir("assets");
        assert_eq!(registry.resolve(Path::new("bg.png")), PathBuf::from("assets/bg.png"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut registry = AssetRegistry::new();
        registry.insert("a", "x");
        registry.insert("b", "y");
        assert_eq!(registry.remove("a"), Some("x"));
        assert!(!registry.contains("a"));
        registry.clear();
        assert!(registry.is_empty());
    }
}
