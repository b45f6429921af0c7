use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw slot I/O.
///
/// A slot is a named blob of text, fully overwritten on every write. This
/// trait handles the "how" of storage (filesystem vs memory), while
/// [`PostStore`](super::PostStore) handles the "what".
pub trait StorageBackend {
    /// Read the slot's current value.
    /// Returns Ok(None) if the slot has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the slot.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Get the location backing the slot.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn slot_path(&self, key: &str) -> Result<PathBuf>;
}
