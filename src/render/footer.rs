//! Footer with the contact call to action.

use super::{
    html::{escape, label, link},
    navbar,
};
use crate::content::SiteContent;

/// Word of the CTA that gets the highlight.
const HIGHLIGHT: &str = "NEW.";

pub fn render(content: &SiteContent, current_year: i32) -> String {
    let info = &content.site_info;
    let footer = &content.footer;

    let socials: String = footer
        .socials
        .iter()
        .map(|s| format!("<li>{}</li>", link(&s.url, &s.label, "social", true)))
        .collect();
    let sitemap: String = content.navigation.iter().filter_map(navbar::item).collect();

    format!(
        concat!(
            r#"<footer id="contact" class="footer"><h2 class="cta">{cta}</h2>"#,
            r#"<a class="email" href="mailto:{email}">{email}</a>"#,
            r#"<div class="columns"><div>{socials_label}<ul>{socials}</ul></div>"#,
            r#"<div>{sitemap_label}<ul>{sitemap}</ul></div></div>"#,
            r#"<div class="legal"><span>© {year} {copyright}</span><span>MADE WITH INTENTION IN {location}.</span></div>"#,
            "</footer>"
        ),
        cta = highlight(&footer.cta),
        email = escape(&info.email),
        socials_label = label("SOCIALS"),
        socials = socials,
        sitemap_label = label("SITEMAP"),
        sitemap = sitemap,
        year = current_year,
        copyright = escape(&footer.copyright),
        location = escape(&info.location),
    )
}

/// Escape the CTA and wrap the first occurrence of the highlighted word.
fn highlight(cta: &str) -> String {
    escape(cta).replacen(
        HIGHLIGHT,
        &format!(r#"<span class="highlight">{HIGHLIGHT}</span>"#),
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::sample;

    #[test]
    fn test_cta_highlight() {
        assert_eq!(
            highlight("LET'S MAKE SOMETHING NEW."),
            r#"LET&#39;S MAKE SOMETHING <span class="highlight">NEW.</span>"#
        );
        assert_eq!(highlight("SAY HELLO"), "SAY HELLO");
    }

    #[test]
    fn test_cta_highlight_first_only() {
        assert_eq!(
            highlight("NEW. NEW."),
            r#"<span class="highlight">NEW.</span> NEW."#
        );
    }

    #[test]
    fn test_footer_contents() {
        let html = render(&sample(), 2031);

        assert!(html.contains(r#"href="mailto:hello@mira-okafor.design""#));
        assert!(html.contains("© 2031 MIRA OKAFOR. ALL RIGHTS RESERVED."));
        assert!(html.contains("MADE WITH INTENTION IN LISBON, PORTUGAL."));
        assert!(html.contains(r#"href="https://github.com" target="_blank""#));
        assert!(html.contains(r#"<a href="/about/">ABOUT</a>"#));
    }
}
