//! Content document errors.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a content document cannot be used.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("content document is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("project id `{0}` appears more than once")]
    DuplicateProjectId(String),

    #[error("project id `{0}` cannot be used as a URL path segment")]
    InvalidProjectId(String),
}
