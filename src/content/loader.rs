//! Content loading.
//!
//! The document comes either from the copy compiled into the binary or from
//! a file relative to the site root. A failed load is logged once and leaves
//! the site in [`LoadState::Loading`]; there is no retry.

use super::{ContentError, SiteContent};
use crate::log;
use std::{fs, path::PathBuf};

/// Sample document compiled into the binary.
pub const BUNDLED_CONTENT: &str = include_str!("../embed/content.json");

/// Where to obtain the content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Bundled,
    File(PathBuf),
}

impl ContentSource {
    /// Human-readable name for log lines.
    pub fn describe(&self) -> String {
        match self {
            Self::Bundled => "bundled content".into(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Outcome of loading, as seen by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Nothing usable yet; only the preloader can be shown.
    Loading,
    Ready(SiteContent),
}

impl LoadState {
    pub fn content(&self) -> Option<&SiteContent> {
        match self {
            Self::Loading => None,
            Self::Ready(content) => Some(content),
        }
    }
}

/// Read, parse and validate the content document.
pub fn load(source: &ContentSource) -> Result<SiteContent, ContentError> {
    let content: SiteContent = match source {
        ContentSource::Bundled => serde_json::from_str(BUNDLED_CONTENT)?,
        ContentSource::File(path) => {
            let text =
                fs::read_to_string(path).map_err(|err| ContentError::Io(path.clone(), err))?;
            serde_json::from_str(&text)?
        }
    };
    content.validate()?;
    Ok(content)
}

/// Load the document, logging and falling back to [`LoadState::Loading`] on failure.
pub fn load_state(source: &ContentSource) -> LoadState {
    match load(source) {
        Ok(content) => LoadState::Ready(content),
        Err(err) => {
            log!("content"; "{}: {}", source.describe(), error_chain(&err));
            LoadState::Loading
        }
    }
}

/// `err: source: source...` on one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
