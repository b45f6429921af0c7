//! # Editor Workflow
//!
//! Mediates what a user is doing with the store, independently of how the
//! UI presents it. Two pieces of state live here:
//!
//! - The editing session: either [`EditorState::Idle`] or
//!   [`EditorState::Composing`] a [`Draft`]. A draft with a `target` edits
//!   that post; a draft without one creates a new post on submit.
//! - The delete confirmation slot: at most one post id waiting for the user
//!   to confirm. Requesting another delete replaces the pending one.
//!
//! ```text
//!            begin_create / begin_edit
//!   Idle ─────────────────────────────▶ Composing
//!    ▲                                     │
//!    └──── cancel / successful submit ─────┘
//!          (failed submit stays Composing)
//! ```

use crate::error::{PostError, Result};
use crate::model::{Field, Post, PostInput};
use crate::store::{PostStore, StorageBackend};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub target: Option<Uuid>,
    pub input: PostInput,
}

impl Draft {
    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Composing(Draft),
}

#[derive(Debug, Default)]
pub struct EditorWorkflow {
    state: EditorState,
    pending_delete: Option<Uuid>,
}

impl EditorWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            EditorState::Composing(draft) => Some(draft),
            EditorState::Idle => None,
        }
    }

    /// Starts composing a new post with empty fields, discarding any
    /// session already open.
    pub fn begin_create(&mut self) {
        debug!("composing new post");
        self.state = EditorState::Composing(Draft {
            target: None,
            input: PostInput::default(),
        });
    }

    /// Starts editing `id`, pre-filling the draft with its current values.
    pub fn begin_edit<B: StorageBackend>(&mut self, store: &PostStore<B>, id: &Uuid) -> Result<()> {
        let post = store.get(id)?;
        debug!(id = %id, "editing post");
        self.state = EditorState::Composing(Draft {
            target: Some(post.id),
            input: post.to_input(),
        });
        Ok(())
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        match &mut self.state {
            EditorState::Composing(draft) => {
                *draft.input.field_mut(field) = value.into();
                Ok(())
            }
            EditorState::Idle => Err(not_composing()),
        }
    }

    /// Replaces every field of the draft at once.
    pub fn fill(&mut self, input: PostInput) -> Result<()> {
        match &mut self.state {
            EditorState::Composing(draft) => {
                draft.input = input;
                Ok(())
            }
            EditorState::Idle => Err(not_composing()),
        }
    }

    /// Discards the draft without touching the store.
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Validates the draft and hands it to the store. On any error the
    /// session stays open with the draft intact.
    pub fn submit<B: StorageBackend>(&mut self, store: &mut PostStore<B>) -> Result<Post> {
        let draft = self.draft().ok_or_else(not_composing)?;
        draft.input.validate()?;

        let post = match draft.target {
            Some(id) => store.update(&id, draft.input.clone())?,
            None => store.create(draft.input.clone())?,
        };

        self.state = EditorState::Idle;
        Ok(post)
    }

    /// Marks `id` for deletion, returning the target it replaced, if any.
    pub fn request_delete(&mut self, id: Uuid) -> Option<Uuid> {
        debug!(id = %id, "delete requested");
        self.pending_delete.replace(id)
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }

    /// Deletes the pending target. With nothing pending this is a no-op.
    /// The slot is cleared only once the store has accepted the delete.
    pub fn confirm_delete<B: StorageBackend>(
        &mut self,
        store: &mut PostStore<B>,
    ) -> Result<Option<Post>> {
        let Some(id) = self.pending_delete else {
            return Ok(None);
        };
        let removed = store.delete(&id)?;
        self.pending_delete = None;
        Ok(removed)
    }

    pub fn cancel_delete(&mut self) -> Option<Uuid> {
        self.pending_delete.take()
    }
}

fn not_composing() -> PostError {
    PostError::Api("No post is being composed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::post_store::DEFAULT_STORAGE_KEY;

    fn store() -> PostStore<MemBackend> {
        PostStore::load(MemBackend::new(), DEFAULT_STORAGE_KEY)
    }

    fn compose(wf: &mut EditorWorkflow, title: &str, content: &str, author: &str) {
        wf.set_field(Field::Title, title).unwrap();
        wf.set_field(Field::Content, content).unwrap();
        wf.set_field(Field::Author, author).unwrap();
    }

    #[test]
    fn create_session_starts_empty_and_returns_to_idle() {
        let mut store = store();
        let mut wf = EditorWorkflow::new();
        wf.begin_create();
        assert_eq!(wf.draft().unwrap().input, PostInput::default());
        assert!(!wf.draft().unwrap().is_edit());

        compose(&mut wf, "Hello", "World", "Bob");
        let post = wf.submit(&mut store).unwrap();

        assert_eq!(wf.state(), &EditorState::Idle);
        assert_eq!(store.all(), &[post]);
    }

    #[test]
    fn edit_session_prefills_and_updates() {
        let mut store = store();
        let post = store.create(PostInput::new("Hello", "World", "Bob")).unwrap();

        let mut wf = EditorWorkflow::new();
        wf.begin_edit(&store, &post.id).unwrap();
        assert_eq!(wf.draft().unwrap().input, post.to_input());
        assert_eq!(wf.draft().unwrap().target, Some(post.id));

        wf.set_field(Field::Title, "Hello again").unwrap();
        let updated = wf.submit(&mut store).unwrap();
        assert_eq!(updated.id, post.id);
        assert_eq!(store.all()[0].title, "Hello again");
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn begin_edit_unknown_post_stays_idle() {
        let store = store();
        let mut wf = EditorWorkflow::new();
        assert!(wf.begin_edit(&store, &Uuid::new_v4()).is_err());
        assert_eq!(wf.state(), &EditorState::Idle);
    }

    #[test]
    fn invalid_submit_keeps_session_open() {
        let mut store = store();
        let mut wf = EditorWorkflow::new();
        wf.begin_create();
        compose(&mut wf, "Title", "  ", "Bob");

        assert!(matches!(
            wf.submit(&mut store),
            Err(PostError::Validation(ref f)) if f == &vec![Field::Content]
        ));
        assert_eq!(wf.draft().unwrap().input.title, "Title");
        assert!(store.all().is_empty());
    }

    #[test]
    fn cancel_discards_without_mutation() {
        let mut store = store();
        let mut wf = EditorWorkflow::new();
        wf.begin_create();
        compose(&mut wf, "Hello", "World", "Bob");
        wf.cancel();

        assert_eq!(wf.state(), &EditorState::Idle);
        assert!(wf.submit(&mut store).is_err());
        assert!(store.all().is_empty());
    }

    #[test]
    fn set_field_requires_a_session() {
        let mut wf = EditorWorkflow::new();
        assert!(wf.set_field(Field::Title, "x").is_err());
        assert!(wf.fill(PostInput::default()).is_err());
    }

    #[test]
    fn delete_confirmation_slot() {
        let mut store = store();
        let a = store.create(PostInput::new("A", "a", "a")).unwrap();
        let b = store.create(PostInput::new("B", "b", "b")).unwrap();
        let mut wf = EditorWorkflow::new();

        assert_eq!(wf.request_delete(a.id), None);
        assert_eq!(wf.request_delete(b.id), Some(a.id));
        assert_eq!(wf.pending_delete(), Some(b.id));

        let removed = wf.confirm_delete(&mut store).unwrap();
        assert_eq!(removed.map(|p| p.id), Some(b.id));
        assert_eq!(wf.pending_delete(), None);
        assert_eq!(store.all(), &[a]);
    }

    #[test]
    fn cancelled_delete_does_not_mutate() {
        let mut store = store();
        let a = store.create(PostInput::new("A", "a", "a")).unwrap();
        let mut wf = EditorWorkflow::new();

        wf.request_delete(a.id);
        assert_eq!(wf.cancel_delete(), Some(a.id));
        assert!(wf.confirm_delete(&mut store).unwrap().is_none());
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn failed_delete_keeps_target_pending() {
        let mut store = store();
        let a = store.create(PostInput::new("A", "a", "a")).unwrap();
        store.backend().set_simulate_write_error(true);

        let mut wf = EditorWorkflow::new();
        wf.request_delete(a.id);
        assert!(wf.confirm_delete(&mut store).is_err());
        assert_eq!(wf.pending_delete(), Some(a.id));
    }

    #[test]
    fn scenario_from_empty_store() {
        let mut store = store();
        let mut wf = EditorWorkflow::new();

        wf.begin_create();
        compose(&mut wf, "Hello", "World", "Bob");
        let a = wf.submit(&mut store).unwrap();
        assert_eq!(store.all(), &[a.clone()]);

        wf.begin_create();
        compose(&mut wf, "Second", "Post", "Amy");
        let b = wf.submit(&mut store).unwrap();
        assert_eq!(store.all(), &[b.clone(), a.clone()]);

        let found = crate::query::filter(store.all(), "bob");
        assert_eq!(found, vec![&a]);

        wf.request_delete(a.id);
        wf.confirm_delete(&mut store).unwrap();
        assert_eq!(store.all(), &[b.clone()]);

        let err = store
            .update(&b.id, PostInput::new("", "x", "Amy"))
            .unwrap_err();
        assert!(matches!(err, PostError::Validation(_)));
        assert_eq!(store.all(), &[b]);
    }
}
