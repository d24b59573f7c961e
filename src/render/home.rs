//! Home view: hero, featured projects and a short about section.

use super::{
    RenderOptions, card,
    html::{escape, label},
};
use crate::{content::SiteContent, router::View};

pub fn render(content: &SiteContent, options: &RenderOptions) -> String {
    let mut out = hero(content);

    let cards: String = content.featured(options.featured_limit).map(card::render).collect();
    out.push_str(&format!(
        r#"<section class="featured">{}<div class="grid">{cards}</div><a class="view-all" href="{}">VIEW ALL WORK [ {} ]</a></section>"#,
        label("FEATURED"),
        View::Work.path(),
        content.projects.len(),
    ));

    // main_copy is trusted inline markup
    out.push_str(&format!(
        r#"<section class="quick-about">{}<p class="statement">{}</p><a class="learn-more" href="{}">LEARN MORE</a></section>"#,
        label(&content.about.label),
        content.about.main_copy,
        View::About.path(),
    ));
    out
}

fn hero(content: &SiteContent) -> String {
    let info = &content.site_info;
    format!(
        concat!(
            r#"<section class="hero"><h1><span class="line">{first}</span><span class="line">{rest}</span></h1>"#,
            r#"<p class="role">{role}</p><p class="label">[ BASED IN {location} ]</p>"#,
            r#"<p class="tagline">{tagline}</p></section>"#
        ),
        first = escape(info.first_name()),
        rest = escape(info.rest_of_name()),
        role = escape(&info.role),
        location = escape(&info.location),
        tagline = escape(&info.tagline),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::sample;

    #[test]
    fn test_hero_splits_name() {
        let html = hero(&sample());
        assert!(html.contains(r#"<span class="line">MIRA</span><span class="line">OKAFOR</span>"#));
        assert!(html.contains("[ BASED IN LISBON, PORTUGAL ]"));
    }

    #[test]
    fn test_main_copy_is_not_escaped() {
        let html = render(&sample(), &RenderOptions::default());
        assert!(html.contains("<i>obvious</i>"));
        assert!(html.contains(r#"href="/about/">LEARN MORE"#));
    }

    #[test]
    fn test_zero_featured_limit_renders_no_cards() {
        let options = RenderOptions {
            featured_limit: 0,
            ..Default::default()
        };
        assert!(!render(&sample(), &options).contains("data-project-id"));
    }
}
