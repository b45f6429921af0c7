use crate::commands::{CmdResult, PostboardPaths};
use crate::error::Result;
use crate::store::{PostStore, StorageBackend};

/// Reports where the post collection and the config live.
pub fn run<B: StorageBackend>(store: &PostStore<B>, paths: &PostboardPaths) -> Result<CmdResult> {
    let slot = store.backend().slot_path(store.storage_key())?;
    Ok(CmdResult::default().with_paths(vec![slot, paths.data_dir.join("config.json")]))
}
