pub mod cache;
pub mod source;
pub mod store;

pub use cache::AssetCache;
pub use source::{Asset, AssetError, AssetKind, AssetSource};
pub use store::AssetStore;
