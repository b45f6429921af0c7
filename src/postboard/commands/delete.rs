//! Deletion is a two-step affair: `request` stages a post in the workflow's
//! confirmation slot, then `confirm` or `cancel` settles it.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::PostSelector;
use crate::store::{PostStore, StorageBackend};
use crate::workflow::EditorWorkflow;

pub fn request<B: StorageBackend>(
    store: &PostStore<B>,
    workflow: &mut EditorWorkflow,
    selector: &PostSelector,
) -> Result<CmdResult> {
    let id = selector.resolve(store.all())?;
    let post = store.get(&id)?.clone();

    let mut result = CmdResult::default();
    if let Some(previous) = workflow.request_delete(id) {
        if previous != id {
            result.add_message(CmdMessage::info(format!(
                "Replaced pending delete of {}",
                previous
            )));
        }
    }
    Ok(result.with_affected_posts(vec![post]))
}

pub fn confirm<B: StorageBackend>(
    store: &mut PostStore<B>,
    workflow: &mut EditorWorkflow,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match workflow.confirm_delete(store)? {
        Some(post) => {
            result.add_message(CmdMessage::success(format!(
                "Post deleted successfully: {}",
                post.title
            )));
            result.affected_posts.push(post);
        }
        None => result.add_message(CmdMessage::info("Nothing to delete")),
    }
    Ok(result)
}

pub fn cancel(workflow: &mut EditorWorkflow) -> CmdResult {
    let mut result = CmdResult::default();
    if workflow.cancel_delete().is_some() {
        result.add_message(CmdMessage::info("Delete cancelled"));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::model::PostInput;
    use crate::store::mem_backend::MemBackend;

    fn setup() -> (PostStore<MemBackend>, EditorWorkflow) {
        let mut store = PostStore::load(MemBackend::new(), "posts");
        store.create(PostInput::new("Hello", "World", "Bob")).unwrap();
        store.create(PostInput::new("Second", "Post", "Amy")).unwrap();
        (store, EditorWorkflow::new())
    }

    #[test]
    fn request_then_confirm_removes_post() {
        let (mut store, mut wf) = setup();
        let staged = request(&store, &mut wf, &PostSelector::Index(DisplayIndex(2))).unwrap();
        assert_eq!(staged.affected_posts[0].title, "Hello");
        assert_eq!(store.all().len(), 2);

        let result = confirm(&mut store, &mut wf).unwrap();
        assert_eq!(result.affected_posts[0].title, "Hello");
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.all()[0].title, "Second");
    }

    #[test]
    fn cancel_leaves_store_untouched() {
        let (mut store, mut wf) = setup();
        request(&store, &mut wf, &PostSelector::Index(DisplayIndex(1))).unwrap();
        let cancelled = cancel(&mut wf);
        assert_eq!(cancelled.messages.len(), 1);

        let result = confirm(&mut store, &mut wf).unwrap();
        assert!(result.affected_posts.is_empty());
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn second_request_replaces_first() {
        let (mut store, mut wf) = setup();
        request(&store, &mut wf, &PostSelector::Index(DisplayIndex(1))).unwrap();
        let replaced = request(&store, &mut wf, &PostSelector::Index(DisplayIndex(2))).unwrap();
        assert_eq!(replaced.messages.len(), 1);

        confirm(&mut store, &mut wf).unwrap();
        assert_eq!(store.all()[0].title, "Second");
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn confirming_an_already_deleted_post_is_harmless() {
        let (mut store, mut wf) = setup();
        let id = store.all()[0].id;
        request(&store, &mut wf, &PostSelector::Id(id)).unwrap();
        store.delete(&id).unwrap();

        let result = confirm(&mut store, &mut wf).unwrap();
        assert!(result.affected_posts.is_empty());
        assert_eq!(store.all().len(), 1);
        assert_eq!(wf.pending_delete(), None);
    }
}
