use crate::commands::{CmdMessage, CmdResult, PostPatch};
use crate::error::{PostError, Result};
use crate::index::PostSelector;
use crate::store::{PostStore, StorageBackend};
use crate::workflow::EditorWorkflow;

/// Runs an edit session against the selected post, applying `patch` on top
/// of its current values.
pub fn run<B: StorageBackend>(
    store: &mut PostStore<B>,
    workflow: &mut EditorWorkflow,
    selector: &PostSelector,
    patch: &PostPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(PostError::Api("Nothing to update".to_string()));
    }

    let id = selector.resolve(store.all())?;
    workflow.begin_edit(store, &id)?;
    for (field, value) in patch.changes() {
        workflow.set_field(field, value)?;
    }
    let post = workflow.submit(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Post updated successfully ({}): {}",
        selector, post.title
    )));
    Ok(result.with_affected_posts(vec![post]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::model::PostInput;
    use crate::store::mem_backend::MemBackend;

    fn setup() -> (PostStore<MemBackend>, EditorWorkflow) {
        let mut store = PostStore::load(MemBackend::new(), "posts");
        store.create(PostInput::new("Old", "Body", "Bob")).unwrap();
        store.create(PostInput::new("Newest", "Body", "Amy")).unwrap();
        (store, EditorWorkflow::new())
    }

    #[test]
    fn patches_only_given_fields() {
        let (mut store, mut wf) = setup();
        let before = store.all()[1].clone();
        let patch = PostPatch {
            title: Some("Renamed".into()),
            ..Default::default()
        };

        run(&mut store, &mut wf, &PostSelector::Index(DisplayIndex(2)), &patch).unwrap();

        let after = &store.all()[1];
        assert_eq!(after.title, "Renamed");
        assert_eq!(after.content, before.content);
        assert_eq!(after.author, before.author);
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn empty_patch_is_rejected() {
        let (mut store, mut wf) = setup();
        let selector = PostSelector::Index(DisplayIndex(1));
        assert!(run(&mut store, &mut wf, &selector, &PostPatch::default()).is_err());
    }

    #[test]
    fn blanking_a_field_fails_validation() {
        let (mut store, mut wf) = setup();
        let patch = PostPatch {
            author: Some("  ".into()),
            ..Default::default()
        };
        let err = run(&mut store, &mut wf, &PostSelector::Index(DisplayIndex(1)), &patch)
            .unwrap_err();
        assert!(matches!(err, PostError::Validation(_)));
        assert_eq!(store.all()[0].author, "Amy");
    }

    #[test]
    fn unknown_index_fails() {
        let (mut store, mut wf) = setup();
        let patch = PostPatch::from(PostInput::new("a", "b", "c"));
        assert!(matches!(
            run(&mut store, &mut wf, &PostSelector::Index(DisplayIndex(9)), &patch),
            Err(PostError::InvalidSelector(_))
        ));
    }
}
