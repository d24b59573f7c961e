//! Navigation link dispatch.

use crate::{
    content::{LinkKind, NavLink},
    router::View,
};

/// Where a navigation link leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget<'a> {
    View(View),
    /// Fragment without the leading `#`.
    Anchor(&'a str),
    External(&'a str),
}

/// Resolve a link by its kind. `view` links naming an unknown view resolve to `None`.
pub fn resolve(link: &NavLink) -> Option<NavTarget<'_>> {
    match link.kind {
        LinkKind::View => View::from_name(&link.href).map(NavTarget::View),
        LinkKind::Internal => Some(NavTarget::Anchor(
            link.href.strip_prefix('#').unwrap_or(&link.href),
        )),
        LinkKind::External => Some(NavTarget::External(&link.href)),
    }
}

impl NavTarget<'_> {
    /// `href` attribute value for the static site.
    pub fn href(&self) -> String {
        match self {
            Self::View(view) => view.path().to_owned(),
            Self::Anchor(anchor) => format!("#{anchor}"),
            Self::External(url) => (*url).to_owned(),
        }
    }

    pub const fn opens_new_tab(&self) -> bool {
        matches!(self, Self::External(_))
    }
}
