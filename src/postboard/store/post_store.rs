//! The authoritative post collection.
//!
//! `PostStore` keeps every post in memory, newest first, and re-serializes
//! the full collection into its backend slot before any mutating call
//! returns. If that write fails, the in-memory change is rolled back so the
//! two never disagree.

use super::backend::StorageBackend;
use crate::error::{PostError, Result};
use crate::model::{Post, PostInput};
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const DEFAULT_STORAGE_KEY: &str = "posts";

pub struct PostStore<B: StorageBackend> {
    backend: B,
    key: String,
    posts: Vec<Post>,
}

impl<B: StorageBackend> PostStore<B> {
    /// Reads the persisted collection from `key`.
    ///
    /// Never fails: a missing slot, an I/O error or malformed JSON all start
    /// the store empty.
    pub fn load(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let posts = match backend.read_slot(&key) {
            Ok(Some(raw)) => decode(&raw, &key),
            Ok(None) => {
                debug!(key = %key, "no persisted posts, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "failed to read persisted posts, starting empty");
                Vec::new()
            }
        };
        debug!(key = %key, count = posts.len(), "loaded posts");
        Self {
            backend,
            key,
            posts,
        }
    }

    /// Current posts, newest first.
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: &Uuid) -> Result<&Post> {
        self.posts
            .iter()
            .find(|p| p.id == *id)
            .ok_or(PostError::PostNotFound(*id))
    }

    pub fn create(&mut self, input: PostInput) -> Result<Post> {
        input.validate()?;
        let post = Post::new(input);
        self.posts.insert(0, post.clone());

        if let Err(e) = self.persist() {
            self.posts.remove(0);
            return Err(e);
        }

        info!(id = %post.id, "post created");
        Ok(post)
    }

    pub fn update(&mut self, id: &Uuid, input: PostInput) -> Result<Post> {
        let pos = self.position(id).ok_or(PostError::PostNotFound(*id))?;
        input.validate()?;

        let previous = self.posts[pos].clone();
        self.posts[pos].apply(input);

        if let Err(e) = self.persist() {
            self.posts[pos] = previous;
            return Err(e);
        }

        info!(id = %id, "post updated");
        Ok(self.posts[pos].clone())
    }

    /// Removes the post if present. Deleting an unknown id is not an error;
    /// the returned option tells the caller whether anything was removed.
    pub fn delete(&mut self, id: &Uuid) -> Result<Option<Post>> {
        let removed = self.position(id).map(|pos| (pos, self.posts.remove(pos)));

        if let Err(e) = self.persist() {
            if let Some((pos, post)) = removed {
                self.posts.insert(pos, post);
            }
            return Err(e);
        }

        match &removed {
            Some(_) => info!(id = %id, "post deleted"),
            None => debug!(id = %id, "delete of unknown post ignored"),
        }
        Ok(removed.map(|(_, post)| post))
    }

    /// Overwrites the backend slot with the full collection.
    pub fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.posts)?;
        self.backend.write_slot(&self.key, &payload)
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.posts.iter().position(|p| p.id == *id)
    }
}

fn decode(raw: &str, key: &str) -> Vec<Post> {
    let posts: Vec<Post> = match serde_json::from_str(raw) {
        Ok(posts) => posts,
        Err(e) => {
            warn!(key = %key, error = %e, "persisted posts are malformed, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    posts.into_iter().filter(|p| seen.insert(p.id)).collect()
}
