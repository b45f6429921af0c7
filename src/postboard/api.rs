//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every postboard operation, whatever UI drives it.
//!
//! It:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw selector strings become [`PostSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It owns the [`PostStore`] and the [`EditorWorkflow`], so all reads and
//! writes go through one place and the store's persisted mirror stays in
//! step with memory.
//!
//! `PostboardApi<B: StorageBackend>` is generic over the backend:
//! - Production: `PostboardApi<FsBackend>`
//! - Testing: `PostboardApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::index::{parse_selectors, PostSelector};
use crate::model::{Post, PostInput};
use crate::store::{PostStore, StorageBackend};
use crate::workflow::EditorWorkflow;
use uuid::Uuid;

pub struct PostboardApi<B: StorageBackend> {
    store: PostStore<B>,
    workflow: EditorWorkflow,
    paths: commands::PostboardPaths,
}

impl<B: StorageBackend> PostboardApi<B> {
    pub fn new(store: PostStore<B>, paths: commands::PostboardPaths) -> Self {
        Self {
            store,
            workflow: EditorWorkflow::new(),
            paths,
        }
    }

    pub fn create_post(&mut self, input: PostInput) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, &mut self.workflow, input)
    }

    pub fn list_posts(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, search)
    }

    pub fn view_posts<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn update_post(
        &mut self,
        selector: &str,
        patch: &commands::PostPatch,
    ) -> Result<commands::CmdResult> {
        let selector: PostSelector = selector.parse()?;
        commands::update::run(&mut self.store, &mut self.workflow, &selector, patch)
    }

    /// Resolves selectors to ids up front, so callers deleting several posts
    /// are not affected by indexes shifting between deletes. Selectors naming
    /// the same post yield its id once, at its first position.
    pub fn resolve_ids<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<Uuid>> {
        let mut ids: Vec<Uuid> = Vec::with_capacity(selectors.len());
        for selector in parse_selectors(selectors)? {
            let id = selector.resolve(self.store.all())?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    pub fn request_delete(&mut self, id: Uuid) -> Result<commands::CmdResult> {
        commands::delete::request(&self.store, &mut self.workflow, &PostSelector::Id(id))
    }

    pub fn confirm_delete(&mut self) -> Result<commands::CmdResult> {
        commands::delete::confirm(&mut self.store, &mut self.workflow)
    }

    pub fn cancel_delete(&mut self) -> commands::CmdResult {
        commands::delete::cancel(&mut self.workflow)
    }

    pub fn store_paths(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store, &self.paths)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn posts(&self) -> &[Post] {
        self.store.all()
    }

    pub fn workflow(&self) -> &EditorWorkflow {
        &self.workflow
    }

    pub fn paths(&self) -> &commands::PostboardPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PostPatch, PostboardPaths};
