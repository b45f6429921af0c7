use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_posts, PostSelector};
use crate::store::{PostStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &PostStore<B>,
    selectors: &[PostSelector],
) -> Result<CmdResult> {
    let indexed = index_posts(store.all());
    let mut listed = Vec::with_capacity(selectors.len());

    for selector in selectors {
        let id = selector.resolve(store.all())?;
        if let Some(dp) = indexed.iter().find(|dp| dp.post.id == id) {
            listed.push(dp.clone());
        }
    }

    Ok(CmdResult::default().with_listed_posts(listed))
}
