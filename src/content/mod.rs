//! Content document: model, loading and validation.
//!
//! ```text
//! ContentSource ──► load() ──► SiteContent::validate() ──► LoadState::Ready
//!                     │
//!                     └── any error ──► logged ──► LoadState::Loading
//! ```

mod error;
mod loader;
mod types;

pub use error::ContentError;
pub use loader::{BUNDLED_CONTENT, ContentSource, LoadState, load, load_state};
pub use types::*;

use rustc_hash::FxHashSet;

impl SiteContent {
    /// Check the invariants serde cannot express.
    ///
    /// Project ids must be unique and usable as a single URL path segment.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = FxHashSet::default();
        for project in &self.projects {
            let id = project.id.as_str();
            if id.is_empty() || id.contains(['/', '\\', '?', '#']) || id == "." || id == ".." {
                return Err(ContentError::InvalidProjectId(project.id.clone()));
            }
            if !seen.insert(id) {
                return Err(ContentError::DuplicateProjectId(project.id.clone()));
            }
        }
        Ok(())
    }

    /// Look up a project by id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Featured projects in document order, at most `limit`.
    pub fn featured(&self, limit: usize) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured).take(limit)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{project, sample};
    use super::*;

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let content = SiteContent {
            projects: vec![project("a"), project("b"), project("a")],
            ..Default::default()
        };

        match content.validate() {
            Err(ContentError::DuplicateProjectId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_path_like_ids() {
        for bad in ["", "a/b", "..", "x?y"] {
            let content = SiteContent {
                projects: vec![project(bad)],
                ..Default::default()
            };
            assert!(
                matches!(content.validate(), Err(ContentError::InvalidProjectId(_))),
                "`{bad}` should be rejected"
            );
        }
    }

    #[test]
    fn test_featured_respects_limit_and_order() {
        let mut projects: Vec<_> = (0..6).map(|i| project(&format!("p{i}"))).collect();
        for p in &mut projects {
            p.featured = true;
        }
        projects[1].featured = false;
        let content = SiteContent {
            projects,
            ..Default::default()
        };

        let ids: Vec<_> = content.featured(4).map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p0", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_project_lookup() {
        let content = sample();
        let first = &content.projects[0];

        assert_eq!(content.project(&first.id), Some(first));
        assert_eq!(content.project("missing"), None);
    }
}
