use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::source::{Asset, AssetError, AssetKind, AssetSource};
use crate::store::AssetStore;

/// Document served when a navigation request fails offline.
const OFFLINE_FALLBACK: &str = "./index.html";

/// One cache generation: a version tag over a shared [`AssetStore`] plus
/// the source it refreshes from.
///
/// Guarantees:
/// - `serve` answers from the store when it can; the network is only on
///   the critical path for a miss.
/// - A hit schedules a background refresh so the stored copy converges on
///   the network copy without blocking the caller.
/// - `activate` retires every entry of a superseded version.
/// - A failed navigation falls back to the cached index document.
pub struct AssetCache {
    version: String,
    precache: Vec<String>,
    source: Arc<dyn AssetSource>,
    store: Arc<AssetStore>,
}

impl AssetCache {
    /// Arc-managed like the other long-lived services; background refresh
    /// tasks capture clones of the store and source handles.
    pub fn new(
        version: &str,
        store: Arc<AssetStore>,
        source: Arc<dyn AssetSource>,
        precache: &[&str],
    ) -> Arc<Self> {
        Arc::new(Self {
            version: version.to_string(),
            precache: precache.iter().map(|p| p.to_string()).collect(),
            source,
            store,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of entries stored under this generation's version.
    pub fn len(&self) -> usize {
        self.store.len_version(&self.version)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached copy of `path` under this generation, if any.
    pub fn cached(&self, path: &str) -> Option<Asset> {
        self.store.get(&self.version, path)
    }

    /// Fetch and store every precache path. Individual failures are logged
    /// and skipped; the install itself never fails.
    pub async fn install(&self) {
        info!(version = %self.version, count = self.precache.len(), "installing asset cache");

        for path in self.precache.clone() {
            match self.source.fetch(&path).await {
                Ok(asset) => self.store.insert(&self.version, asset),
                Err(e) => {
                    warn!(path = %path, error = %e, "precache fetch failed");
                }
            }
        }
    }

    /// Retire every entry belonging to another version. Call once this
    /// generation has installed and is taking over.
    pub fn activate(&self) {
        let dropped = self.store.retain_version(&self.version);
        if dropped > 0 {
            info!(version = %self.version, dropped, "superseded cache entries removed");
        }
    }

    /// Cache-first lookup of `path`.
    ///
    /// Hit: return the stored asset and schedule a background refresh.
    /// Miss: fetch from the source and store the result. A failed fetch
    /// for a document falls back to the cached index document; anything
    /// else surfaces [`AssetError::Offline`].
    pub async fn serve(&self, path: &str) -> Result<Asset, AssetError> {
        if let Some(asset) = self.cached(path) {
            debug!(path = %path, "cache hit");

            let store = Arc::clone(&self.store);
            let source = Arc::clone(&self.source);
            let version = self.version.clone();
            let path = path.to_string();
            tokio::spawn(async move {
                refresh_into(&store, source.as_ref(), &version, &path).await;
            });

            return Ok(asset);
        }

        debug!(path = %path, "cache miss, fetching");
        match self.source.fetch(path).await {
            Ok(asset) => {
                self.store.insert(&self.version, asset.clone());
                Ok(asset)
            }
            Err(e) => {
                warn!(path = %path, error = %e, "fetch failed");

                if AssetKind::from_path(path) == AssetKind::Document {
                    if let Some(fallback) = self.cached(OFFLINE_FALLBACK) {
                        info!(path = %path, "serving offline fallback document");
                        return Ok(fallback);
                    }
                }

                Err(AssetError::Offline {
                    path: path.to_string(),
                })
            }
        }
    }

    /// Re-fetch `path` and overwrite the stored copy now.
    pub async fn refresh(&self, path: &str) {
        refresh_into(&self.store, self.source.as_ref(), &self.version, path).await;
    }
}

/// Best-effort refresh: the caller was already answered from the cache, so
/// errors are logged and swallowed.
async fn refresh_into(store: &AssetStore, source: &dyn AssetSource, version: &str, path: &str) {
    match source.fetch(path).await {
        Ok(asset) => {
            debug!(path = %path, "background refresh stored");
            store.insert(version, asset);
        }
        Err(e) => {
            debug!(path = %path, error = %e, "background refresh failed");
        }
    }
}
