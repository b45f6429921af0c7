use crate::model::Post;

/// Returns the posts whose title, content or author contains `query`,
/// ignoring case. Order is preserved; an empty query keeps every post.
pub fn filter<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    filter_by(posts, query, |p| *p)
}

/// Like [`filter`], for any sequence of items that each carry a post.
pub fn filter_by<T, F>(items: impl IntoIterator<Item = T>, query: &str, post_of: F) -> Vec<T>
where
    F: Fn(&T) -> &Post,
{
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| matches(post_of(item), &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.content.to_lowercase().contains(needle)
        || post.author.to_lowercase().contains(needle)
}
