//! Store Factory
//!
//! Builds the backend named by a configuration. Callers hold the result as
//! `Box<dyn IntermediatesManager<V>>` and never see which backend it is.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::config::{Backend, Config};
use crate::domain::ports::IntermediatesManager;
use crate::error::{StoreError, StoreResult};

use super::codec::Encoding;
use super::fs::FileSystemIntermediatesManager;
use super::memory::InMemoryIntermediatesManager;

/// Open the configured backend for values of type `V`
pub fn open_store<V>(config: &Config) -> StoreResult<Box<dyn IntermediatesManager<V>>>
where
    V: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    match config.store.backend {
        Backend::Memory => {
            info!("using in-memory intermediate store");
            Ok(Box::new(InMemoryIntermediatesManager::<V>::new()))
        }
        Backend::Filesystem => Ok(Box::new(open_filesystem(config)?)),
    }
}

/// Open the filesystem backend described by `config`, whatever its `backend`
pub fn open_filesystem(config: &Config) -> StoreResult<FileSystemIntermediatesManager<Encoding>> {
    let root = config
        .store
        .root
        .as_ref()
        .ok_or_else(|| StoreError::InvalidConfig {
            file: config.origin(),
            message: "the filesystem backend needs [store] root".to_string(),
        })?;

    let store = FileSystemIntermediatesManager::with_codec(root, config.store.encoding)?
        .with_fsync(config.store.fsync);
    info!(
        root = %root.display(),
        encoding = %config.store.encoding,
        "using filesystem intermediate store"
    );
    Ok(store)
}
