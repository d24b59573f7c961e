//! In-memory view router.
//!
//! A [`Route`] is either one of the top-level [`View`]s or a project detail
//! overlay that remembers which view it covers. Leaving the overlay restores
//! that view, and no route can name a detail without a view behind it.
//!
//! ```text
//!   View(Home) ──select_project(id)──► Detail { id, return_to: Home }
//!       ▲                                   │
//!       └────────── clear_selection() ──────┘
//! ```
//!
//! Each route also has a site path, which is where the build writes it.

use crate::{
    content::{NavLink, Project},
    nav::{self, NavTarget},
};

/// Mutually exclusive top-level screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Work,
    About,
}

impl View {
    pub const ALL: [Self; 3] = [Self::Home, Self::Work, Self::About];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::About => "about",
        }
    }

    /// Parse a view name as used in `NavLink.href` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|view| view.name().eq_ignore_ascii_case(name.trim()))
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Work => "/work/",
            Self::About => "/about/",
        }
    }
}

/// What is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    View(View),
    Detail { project: String, return_to: View },
}

impl Default for Route {
    fn default() -> Self {
        Self::View(View::Home)
    }
}

impl Route {
    /// The top-level view, including the one hidden behind a detail overlay.
    pub fn current_view(&self) -> View {
        match self {
            Self::View(view) | Self::Detail { return_to: view, .. } => *view,
        }
    }

    pub fn selected_project(&self) -> Option<&str> {
        match self {
            Self::View(_) => None,
            Self::Detail { project, .. } => Some(project),
        }
    }

    /// Site path of this route, always with a trailing slash.
    ///
    /// Project ids are percent-encoded, so the path is a valid URL path.
    pub fn path(&self) -> String {
        match self {
            Self::View(view) => view.path().to_owned(),
            Self::Detail { project, .. } => format!("/work/{}/", urlencoding::encode(project)),
        }
    }

    /// Inverse of [`Route::path`]. Detail routes parse with `return_to: Work`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_suffix("index.html").unwrap_or(path);
        let segments: Vec<_> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Self::View(View::Home)),
            ["work"] => Some(Self::View(View::Work)),
            ["about"] => Some(Self::View(View::About)),
            ["work", id] => Some(Self::Detail {
                project: urlencoding::decode(id).ok()?.into_owned(),
                return_to: View::Work,
            }),
            _ => None,
        }
    }
}

/// Side effect requested by a transition, performed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScrollToTop,
    ScrollToAnchor(String),
    OpenExternal { url: String, new_tab: bool },
    /// The input named nothing the router knows about.
    Ignored,
}

/// Holds the current route and applies transitions.
#[derive(Debug, Clone, Default)]
pub struct Router {
    route: Route,
}

impl Router {
    /// Starts on the home view with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn current_view(&self) -> View {
        self.route.current_view()
    }

    pub fn selected_project(&self) -> Option<&str> {
        self.route.selected_project()
    }

    /// Clear any selection and show `view`.
    pub fn navigate_to_view(&mut self, view: View) -> Effect {
        self.route = Route::View(view);
        Effect::ScrollToTop
    }

    /// Overlay the detail view for `id`, keeping the view underneath.
    pub fn select_project(&mut self, id: impl Into<String>) -> Effect {
        self.route = Route::Detail {
            project: id.into(),
            return_to: self.current_view(),
        };
        Effect::ScrollToTop
    }

    /// Leave the detail overlay, back to whatever view it covered.
    pub fn clear_selection(&mut self) {
        self.route = Route::View(self.current_view());
    }

    /// Projects with an external link open it; others open their detail overlay.
    pub fn click_project(&mut self, project: &Project) -> Effect {
        match project.external() {
            Some(url) => Effect::OpenExternal {
                url: url.to_owned(),
                new_tab: project.open_in_new_tab,
            },
            None => self.select_project(project.id.clone()),
        }
    }

    /// Dispatch a navigation link on its `type`.
    pub fn follow(&mut self, link: &NavLink) -> Effect {
        match nav::resolve(link) {
            Some(NavTarget::View(view)) => self.navigate_to_view(view),
            Some(NavTarget::Anchor(anchor)) => Effect::ScrollToAnchor(anchor.to_owned()),
            Some(NavTarget::External(url)) => Effect::OpenExternal {
                url: url.to_owned(),
                new_tab: true,
            },
            None => Effect::Ignored,
        }
    }
}
