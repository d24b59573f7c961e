//! Neighbour lookup for project detail navigation.
//!
//! Order is the array order of the content document, with wraparound.

use crate::content::Project;

fn position(projects: &[Project], id: &str) -> Option<usize> {
    projects.iter().position(|p| p.id == id)
}

/// Successor of `id`; the last project is followed by the first.
pub fn next_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    let index = position(projects, id)?;
    projects.get((index + 1) % projects.len())
}

/// Predecessor of `id`; the first project is preceded by the last.
pub fn previous_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    let index = position(projects, id)?;
    projects.get((index + projects.len() - 1) % projects.len())
}
