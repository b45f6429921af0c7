//! # Storage Layer
//!
//! Posts live in memory inside a [`PostStore`], which mirrors the whole
//! collection into a single named slot of a [`StorageBackend`] after every
//! mutation.
//!
//! The split follows the "what vs how" line:
//! - [`StorageBackend`] only knows how to read and overwrite raw text slots.
//! - [`PostStore`] owns ordering, validation, ids and (de)serialization.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<slot>.json` file per slot under the data
//!   directory, written atomically (temp file then rename).
//! - [`mem_backend::MemBackend`]: in-memory slots for tests, with a switch to
//!   simulate write failures.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── posts.json     # JSON array of posts, newest first
//! └── config.json    # PostboardConfig
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod post_store;

pub use backend::StorageBackend;
pub use post_store::PostStore;
