//! Project detail page.
//!
//! Every section is optional and rendered only when its field is present.
//! Previous/next links wrap around the project list.

use super::{
    html::{escape, label, link},
    project_href,
};
use crate::{
    content::{BlockKind, ContentBlock, Project},
    projects::{next_project, previous_project},
    router::View,
};

pub fn render(project: &Project, projects: &[Project], return_to: View) -> String {
    let mut out = format!(
        r#"<article class="detail" data-project-id="{id}"><a class="back" href="{back}" data-back>BACK TO {view}</a>"#,
        id = escape(&project.id),
        back = return_to.path(),
        view = return_to.name().to_ascii_uppercase(),
    );

    out.push_str(&format!(
        r#"<header>{}<h1>{}</h1><p class="tagline">{}</p></header>"#,
        label(&project.category),
        escape(&project.title),
        escape(project.tagline.as_deref().unwrap_or(&project.description)),
    ));
    out.push_str(&format!(
        r#"<img class="cover" src="{}" alt="{}">"#,
        escape(&project.image),
        escape(&project.title)
    ));
    out.push_str(&metadata(project));

    if let Some(url) = project.live_link.as_deref().filter(|url| !url.is_empty()) {
        out.push_str(&link(url, "VISIT LIVE SITE", "live", true));
    }
    if let Some(perf) = &project.performance {
        out.push_str(&format!(
            r#"<dl class="performance"><dt>CARBON FOOTPRINT</dt><dd>{}</dd><dt>LOAD</dt><dd>{}</dd></dl>"#,
            escape(&perf.carbon),
            escape(&perf.load_time),
        ));
    }

    for (title, text) in [
        ("OVERVIEW", &project.overview),
        ("CHALLENGE", &project.challenge),
        ("SOLUTION", &project.solution),
    ] {
        if let Some(text) = text {
            out.push_str(&format!(
                r#"<section class="story">{}<p>{}</p></section>"#,
                label(title),
                escape(text)
            ));
        }
    }

    if let Some(quote) = &project.client_quote {
        let role = quote
            .role
            .as_deref()
            .map(|role| format!(", {}", escape(role)))
            .unwrap_or_default();
        out.push_str(&format!(
            r#"<blockquote class="quote"><p>{}</p><cite>{}{role}</cite></blockquote>"#,
            escape(&quote.text),
            escape(&quote.author),
        ));
    }

    out.extend(project.content_blocks.iter().map(block));
    out.push_str(&pager(project, projects));
    out.push_str("</article>");
    out
}

fn metadata(project: &Project) -> String {
    let mut rows = vec![("YEAR".to_owned(), escape(&project.year).into_owned())];
    if !project.services.is_empty() {
        rows.push(("SERVICES".into(), join(&project.services)));
    }
    if !project.awards.is_empty() {
        rows.push(("AWARDS".into(), join(&project.awards)));
    }
    if let Some(location) = &project.location {
        rows.push(("LOCATION".into(), escape(location).into_owned()));
    }
    rows.extend(
        project
            .results
            .iter()
            .map(|r| (escape(&r.label).into_owned(), escape(&r.value).into_owned())),
    );

    let rows: String = rows
        .into_iter()
        .map(|(key, value)| format!("<dt>{key}</dt><dd>{value}</dd>"))
        .collect();
    format!(r#"<dl class="meta">{rows}</dl>"#)
}

fn join(items: &[String]) -> String {
    items
        .iter()
        .map(|item| escape(item))
        .collect::<Vec<_>>()
        .join(", ")
}

fn block(block: &ContentBlock) -> String {
    let kind = match block.kind {
        BlockKind::Text => "text",
        BlockKind::Image => "image",
        BlockKind::Gallery => "gallery",
    };
    let mut out = format!(r#"<section class="block block-{kind}">"#);
    if let Some(title) = &block.title {
        out.push_str(&format!("<h2>{}</h2>", escape(title)));
    }
    if let Some(body) = &block.body {
        out.push_str(&format!("<p>{}</p>", escape(body)));
    }
    if !block.images.is_empty() {
        out.push_str(r#"<div class="images">"#);
        for src in &block.images {
            out.push_str(&format!(
                r#"<img src="{}" alt="" loading="lazy">"#,
                escape(src)
            ));
        }
        out.push_str("</div>");
    }
    if let Some(caption) = &block.caption {
        out.push_str(&format!(r#"<p class="caption">{}</p>"#, escape(caption)));
    }
    out.push_str("</section>");
    out
}

fn pager(project: &Project, projects: &[Project]) -> String {
    let side = |label_text: &str, target: Option<&Project>| {
        target
            .map(|p| {
                let (href, new_tab) = project_href(p);
                format!(
                    r#"<div class="pager-item">{}{}</div>"#,
                    label(label_text),
                    link(&href, &p.title, "pager-link", new_tab)
                )
            })
            .unwrap_or_default()
    };

    format!(
        r#"<nav class="pager">{}{}</nav>"#,
        side("PREVIOUS", previous_project(projects, &project.id)),
        side("NEXT", next_project(projects, &project.id)),
    )
}
