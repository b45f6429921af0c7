use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_posts;
use crate::query;
use crate::store::{PostStore, StorageBackend};

/// Lists posts, newest first, optionally narrowed by a search query.
/// Display indexes are assigned before filtering so they stay stable.
pub fn run<B: StorageBackend>(store: &PostStore<B>, search: Option<&str>) -> Result<CmdResult> {
    let listed = query::filter_by(index_posts(store.all()), search.unwrap_or(""), |dp| {
        &dp.post
    });

    let mut result = CmdResult::default();
    if listed.is_empty() {
        if store.all().is_empty() {
            result.add_message(CmdMessage::info(
                "No posts yet. Get started by creating your first post.",
            ));
        } else {
            result.add_message(CmdMessage::info(
                "No posts found. Try adjusting your search query.",
            ));
        }
    }
    Ok(result.with_listed_posts(listed))
}
