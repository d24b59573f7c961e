//! Floating navigation bar.

use super::html::{escape, target_attrs};
use crate::{
    content::{NavLink, SiteContent},
    nav,
    router::View,
};

pub fn render(content: &SiteContent) -> String {
    let links: String = content.navigation.iter().filter_map(item).collect();

    format!(
        r#"<nav id="navbar" class="navbar"><a class="brand" href="{home}">{name}</a><ul>{links}</ul></nav>"#,
        home = View::Home.path(),
        name = escape(content.site_info.last_name()),
    )
}

/// List item for a navigation link; links that resolve nowhere are dropped.
pub(super) fn item(link: &NavLink) -> Option<String> {
    let target = nav::resolve(link)?;
    Some(format!(
        r#"<li><a href="{}"{}>{}</a></li>"#,
        escape(&target.href()),
        target_attrs(target.opens_new_tab()),
        escape(&link.label)
    ))
}
