//! # Display Indexes
//!
//! Post ids are UUIDs, which are unpleasant to type. The CLI therefore shows
//! each post with its 1-based position in the store (newest first) and lets
//! users refer to posts by that number.
//!
//! Indexes are always assigned over the *whole* collection before any search
//! filter runs, so a post keeps the same number whether it is shown in a full
//! listing or in search results.
//!
//! A [`PostSelector`] also accepts a full UUID or an unambiguous UUID prefix
//! of at least [`MIN_ID_PREFIX`] characters, for scripting.

use crate::error::{PostError, Result};
use crate::model::Post;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_ID_PREFIX: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPost {
    pub post: Post,
    pub index: DisplayIndex,
}

/// Pairs each post with its canonical display index, keeping store order.
pub fn index_posts(posts: &[Post]) -> Vec<DisplayPost> {
    posts
        .iter()
        .enumerate()
        .map(|(i, post)| DisplayPost {
            post: post.clone(),
            index: DisplayIndex(i + 1),
        })
        .collect()
}

/// A user input that picks out a single post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSelector {
    Index(DisplayIndex),
    Id(Uuid),
    IdPrefix(String),
}

impl fmt::Display for PostSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostSelector::Index(idx) => write!(f, "{}", idx),
            PostSelector::Id(id) => write!(f, "{}", id),
            PostSelector::IdPrefix(prefix) => write!(f, "{}…", prefix),
        }
    }
}

impl FromStr for PostSelector {
    type Err = PostError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err(PostError::InvalidSelector(s.to_string()));
            }
            return Ok(PostSelector::Index(DisplayIndex(n)));
        }
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(PostSelector::Id(id));
        }
        let is_hex_prefix = s.len() >= MIN_ID_PREFIX
            && s.chars().all(|c| c.is_ascii_hexdigit() || c == '-');
        if is_hex_prefix {
            return Ok(PostSelector::IdPrefix(s.to_ascii_lowercase()));
        }
        Err(PostError::InvalidSelector(s.to_string()))
    }
}

impl PostSelector {
    /// Resolves the selector against the store's ordered posts.
    pub fn resolve(&self, posts: &[Post]) -> Result<Uuid> {
        match self {
            PostSelector::Index(DisplayIndex(n)) => n
                .checked_sub(1)
                .and_then(|i| posts.get(i))
                .map(|p| p.id)
                .ok_or_else(|| PostError::InvalidSelector(self.to_string())),
            PostSelector::Id(id) => posts
                .iter()
                .find(|p| p.id == *id)
                .map(|p| p.id)
                .ok_or(PostError::PostNotFound(*id)),
            PostSelector::IdPrefix(prefix) => {
                let mut found = posts
                    .iter()
                    .filter(|p| p.id.to_string().starts_with(prefix.as_str()));
                match (found.next(), found.next()) {
                    (Some(post), None) => Ok(post.id),
                    _ => Err(PostError::InvalidSelector(prefix.clone())),
                }
            }
        }
    }
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<PostSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}
