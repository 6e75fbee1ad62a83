use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssetError {
    #[error("network unavailable and no cached fallback for {path}")]
    Offline { path: String },

    #[error("asset source error: {0}")]
    Source(String),
}

/// Coarse asset classification, derived from the request path. Only
/// documents get the offline same-document fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Document,
    Style,
    Script,
    Manifest,
    Image,
    Other,
}

impl AssetKind {
    pub fn from_path(path: &str) -> Self {
        if path.ends_with('/') || path.ends_with(".html") {
            return AssetKind::Document;
        }
        match path.rsplit('.').next() {
            Some("css") => AssetKind::Style,
            Some("js") => AssetKind::Script,
            Some("json") => AssetKind::Manifest,
            Some("png") | Some("svg") | Some("ico") => AssetKind::Image,
            _ => AssetKind::Other,
        }
    }
}

/// One cached static asset.
#[derive(Debug, Clone)]
pub struct Asset {
    pub path: String,
    pub kind: AssetKind,
    pub body: Vec<u8>,
    pub fetched_at: DateTime<Utc>,
}

impl Asset {
    pub fn new(path: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.to_string(),
            kind: AssetKind::from_path(path),
            body: body.into(),
            fetched_at: Utc::now(),
        }
    }
}

/// Abstraction over the network side of the cache. A fetch either yields
/// the full asset or an error; partial responses do not cross this seam.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Asset, AssetError>;
}
