//! # CLI Behavior
//!
//! This is **one possible UI client** for postboard, not the application
//! itself. It is the only place that knows about terminal I/O, exit codes
//! and output formatting.
//!
//! ## Naked Execution (`postboard`)
//!
//! Running `postboard` with no arguments lists all posts.
//!
//! ## Creating (`postboard create`)
//!
//! Fields come from, in order:
//! 1. `--title`, `--author`, `--content` flags
//! 2. Piped stdin, used as content when `--content` is absent
//! 3. The editor, opened with whatever was gathered so far when any field is
//!    still missing (skipped with `--no-editor`, in which case the missing
//!    field is reported as a validation error)
//!
//! ## Editing (`postboard edit <sel>`)
//!
//! With field flags, only those fields change. Without flags, the post opens
//! in the editor.
//!
//! ## Deleting (`postboard delete <sel>...`)
//!
//! Each post is staged, then the user confirms (`y`) or declines. `--yes`
//! skips the prompt.
//!
//! ## Selectors
//!
//! A post is selected by the index shown in `list` (1 is the newest), by its
//! full id, or by an unambiguous id prefix.

mod commands;
mod print;
mod setup;

pub use commands::run;
