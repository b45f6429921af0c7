use crate::config::PostboardConfig;
use crate::error::Result;
use crate::index::DisplayPost;
use crate::model::{Field, Post, PostInput};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod paths;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct PostboardPaths {
    pub data_dir: PathBuf,
}

impl PostboardPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn load_config(&self) -> Result<PostboardConfig> {
        PostboardConfig::load(&self.data_dir)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient notification for the user, rendered by whichever UI is
/// driving the commands.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_posts: Vec<Post>,
    pub listed_posts: Vec<DisplayPost>,
    pub paths: Vec<PathBuf>,
    pub config: Option<PostboardConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_posts(mut self, posts: Vec<Post>) -> Self {
        self.affected_posts = posts;
        self
    }

    pub fn with_listed_posts(mut self, posts: Vec<DisplayPost>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: PostboardConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field-level changes for an edit. `None` keeps the post's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    pub fn changes(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Title, &self.title),
            (Field::Content, &self.content),
            (Field::Author, &self.author),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}

impl From<PostInput> for PostPatch {
    fn from(input: PostInput) -> Self {
        Self {
            title: Some(input.title),
            content: Some(input.content),
            author: Some(input.author),
        }
    }
}
