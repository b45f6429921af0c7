use crate::error::{PostError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The user-editable fields of a post. All three are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
    Author,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Content => write!(f, "content"),
            Field::Author => write!(f, "author"),
        }
    }
}

/// A stored post. `id` and `created_at` are assigned once at creation and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Builds a new post with a fresh id and the current time.
    /// Callers are expected to have validated `input` already.
    pub fn new(input: PostInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            author: input.author,
            created_at: Utc::now(),
        }
    }

    /// Replaces the editable fields, keeping identity and creation time.
    pub fn apply(&mut self, input: PostInput) {
        self.title = input.title;
        self.content = input.content;
        self.author = input.author;
    }

    pub fn to_input(&self) -> PostInput {
        PostInput {
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
        }
    }
}

/// The fields a user supplies when creating or editing a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostInput {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    /// Fields that are empty once surrounding whitespace is trimmed.
    pub fn missing_fields(&self) -> Vec<Field> {
        [
            (Field::Title, &self.title),
            (Field::Content, &self.content),
            (Field::Author, &self.author),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PostError::Validation(missing))
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Content => &mut self.content,
            Field::Author => &mut self.author,
        }
    }
}
