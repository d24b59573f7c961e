//! Page shell shared by every route.

use super::{RenderOptions, footer, html::escape, navbar, preloader};
use crate::{content::SiteContent, router::Route};

/// Stylesheet written next to the pages by the build.
pub const STYLESHEET_PATH: &str = "/folio.css";
/// Runtime script written next to the pages by the build.
pub const SCRIPT_PATH: &str = "/folio.js";

/// Wrap `body` in the document shell.
///
/// With no content the page holds only the loading preloader.
pub fn page(
    content: Option<&SiteContent>,
    options: &RenderOptions,
    route: &Route,
    body: &str,
) -> String {
    let (title, description) = match content {
        Some(content) => (
            fallback(&options.title, &content.site_info.name),
            fallback(&options.description, &content.site_info.tagline),
        ),
        None => (options.title.as_str(), options.description.as_str()),
    };
    let is_detail = route.selected_project().is_some();

    let mut out = String::with_capacity(body.len() + 4096);
    out.push_str(&format!(
        r#"<!DOCTYPE html><html lang="{lang}"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title}</title><meta name="description" content="{description}"><link rel="stylesheet" href="{STYLESHEET_PATH}"></head>"#,
        lang = escape(&options.language),
        title = escape(title),
        description = escape(description),
    ));
    out.push_str(&format!(
        r#"<body data-view="{view}" data-nav-buffer="{buffer}">"#,
        view = route.current_view().name(),
        buffer = options.nav_hide_buffer,
    ));
    out.push_str(&preloader::render(false, content.is_none()));

    if let Some(content) = content {
        out.push_str(r#"<div id="progress" class="progress" style="width:0%"></div>"#);
        if !is_detail {
            out.push_str(&navbar::render(content));
        }
        out.push_str(r#"<main id="main">"#);
        out.push_str(body);
        out.push_str("</main>");
        if !is_detail {
            out.push_str(&footer::render(content, options.current_year));
        }
    }

    out.push_str(&format!(r#"<script src="{SCRIPT_PATH}" defer></script></body></html>"#));
    out
}

fn fallback<'a>(configured: &'a str, from_content: &'a str) -> &'a str {
    if configured.is_empty() { from_content } else { configured }
}
