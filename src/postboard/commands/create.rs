use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PostInput;
use crate::store::{PostStore, StorageBackend};
use crate::workflow::EditorWorkflow;

/// Runs a full create session: open a new draft, fill it, submit.
pub fn run<B: StorageBackend>(
    store: &mut PostStore<B>,
    workflow: &mut EditorWorkflow,
    input: PostInput,
) -> Result<CmdResult> {
    workflow.begin_create();
    workflow.fill(input)?;
    let post = workflow.submit(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Post created successfully: {}",
        post.title
    )));
    Ok(result.with_affected_posts(vec![post]))
}
