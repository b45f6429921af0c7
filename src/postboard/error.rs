use crate::model::Field;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PostError {
    #[error("Required fields are empty: {}", join_fields(.0))]
    Validation(Vec<Field>),

    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("No post matches '{0}'")]
    InvalidSelector(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, PostError>;
