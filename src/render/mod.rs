//! Presentational components.
//!
//! Every component is a pure function from a slice of the content document
//! to an HTML string. [`render_route`] assembles a full page for one route,
//! [`render_loading`] the shell shown when no content could be loaded.
//!
//! ```text
//! render_route(route)
//!     │
//!     └── layout::page
//!             ├── preloader
//!             ├── navbar        (not on detail pages)
//!             ├── home | work | about | detail
//!             └── footer        (not on detail pages)
//! ```

mod about;
mod card;
mod detail;
mod footer;
mod home;
pub mod html;
mod layout;
mod navbar;
pub mod preloader;
mod work;

use crate::{
    config::SiteConfig,
    content::{Project, SiteContent},
    router::{Route, View},
};
use chrono::Datelike;

/// Inputs to rendering that do not come from the content document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Browser tab title; empty means `site_info.name`.
    pub title: String,
    /// Meta description; empty means `site_info.tagline`.
    pub description: String,
    pub language: String,
    pub featured_limit: usize,
    pub nav_hide_buffer: f64,
    /// Year used for tenure and the copyright line.
    pub current_year: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            language: crate::config::defaults::base::language(),
            featured_limit: crate::config::defaults::site::featured_limit(),
            nav_hide_buffer: crate::scroll::NAV_HIDE_BUFFER,
            current_year: chrono::Local::now().year(),
        }
    }
}

impl RenderOptions {
    /// Options from config, evaluated in the current calendar year.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.base.title.clone(),
            description: config.base.description.clone(),
            language: config.base.language.clone(),
            featured_limit: config.site.featured_limit,
            nav_hide_buffer: config.site.nav_hide_buffer,
            current_year: chrono::Local::now().year(),
        }
    }
}

/// Every route the static site contains, in output order.
///
/// Projects with an external link have no detail page.
pub fn routes(content: &SiteContent) -> Vec<Route> {
    View::ALL
        .into_iter()
        .map(Route::View)
        .chain(
            content
                .projects
                .iter()
                .filter(|p| p.external().is_none())
                .map(|p| Route::Detail {
                    project: p.id.clone(),
                    return_to: View::Work,
                }),
        )
        .collect()
}

/// Where clicking a project leads: its external link, or its detail page.
pub fn project_href(project: &Project) -> (String, bool) {
    match project.external() {
        Some(url) => (url.to_owned(), project.open_in_new_tab),
        None => (
            Route::Detail {
                project: project.id.clone(),
                return_to: View::Work,
            }
            .path(),
            false,
        ),
    }
}

/// Render the full page for `route`, or `None` if it names an unknown project.
pub fn render_route(content: &SiteContent, options: &RenderOptions, route: &Route) -> Option<String> {
    let body = match route {
        Route::View(View::Home) => home::render(content, options),
        Route::View(View::Work) => work::render(content),
        Route::View(View::About) => about::render(content, options),
        Route::Detail { project, return_to } => {
            let project = content.project(project)?;
            detail::render(project, &content.projects, *return_to)
        }
    };
    Some(layout::page(Some(content), options, route, &body))
}

/// Shell page for a site whose content failed to load.
pub fn render_loading(options: &RenderOptions) -> String {
    layout::page(None, options, &Route::default(), "")
}
