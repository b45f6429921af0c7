//! # Postboard Architecture
//!
//! Postboard manages short text posts (title, content, author) kept in a
//! local store. It is a UI-agnostic library with a terminal client on top;
//! nothing below the CLI knows about stdout, stderr or exit codes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders posts and messages, prompts    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the editor workflow                   │
//! │  - Normalizes selectors, dispatches to commands             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user action, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (workflow.rs, query.rs, store/)                       │
//! │  - EditorWorkflow: compose/edit sessions, delete slot       │
//! │  - query::filter: case-insensitive substring search         │
//! │  - PostStore over a StorageBackend (FsBackend, MemBackend)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every read goes through `PostStore::all` (or `query::filter` over it) and
//! every write through `create`/`update`/`delete`, each of which rewrites the
//! persisted slot before returning.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Per-action logic and the `CmdResult`/`CmdMessage` types
//! - [`workflow`]: Editor session and delete confirmation state machine
//! - [`query`]: Search filter
//! - [`store`]: Storage abstraction, backends and the post store
//! - [`model`]: `Post`, `PostInput`, `Field`
//! - [`index`]: Display indexes and post selectors
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;
pub mod workflow;
