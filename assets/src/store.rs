use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::source::Asset;

/// Backing storage for cached assets, keyed by `(version, path)`.
///
/// Lives longer than any single [`AssetCache`](crate::AssetCache)
/// generation: when the cache rolls to a new version, the new generation
/// installs next to the old entries and then retires them on activate.
#[derive(Default)]
pub struct AssetStore {
    entries: Mutex<HashMap<(String, String), Asset>>,
}

impl AssetStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn get(&self, version: &str, path: &str) -> Option<Asset> {
        let entries = self.entries.lock();
        entries.get(&(version.to_string(), path.to_string())).cloned()
    }

    pub fn insert(&self, version: &str, asset: Asset) {
        let mut entries = self.entries.lock();
        entries.insert((version.to_string(), asset.path.clone()), asset);
    }

    /// Drop every entry not belonging to `version`; returns how many were
    /// removed.
    pub fn retain_version(&self, version: &str) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|(v, _), _| v == version);
        before - entries.len()
    }

    /// Number of entries stored under `version`.
    pub fn len_version(&self, version: &str) -> usize {
        let entries = self.entries.lock();
        entries.keys().filter(|(v, _)| v == version).count()
    }
}
