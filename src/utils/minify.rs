//! Minification for rendered pages and the sitemap.
//!
//! Minification is switched by `[build].minify`.

use std::borrow::Cow;

/// Content type for minification.
pub enum MinifyType<'a> {
    /// HTML content
    Html(&'a [u8]),
    /// XML content
    Xml(&'a [u8]),
}

/// Minify content when `enabled`.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify(content: MinifyType<'_>, enabled: bool) -> Cow<'_, [u8]> {
    match (content, enabled) {
        (MinifyType::Html(bytes) | MinifyType::Xml(bytes), false) => Cow::Borrowed(bytes),
        (MinifyType::Html(html), true) => Cow::Owned(minify_html_inner(html)),
        (MinifyType::Xml(xml), true) => Cow::Owned(minify_xml_inner(xml)),
    }
}

/// Minify HTML content using `minify_html` crate.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    minify_html::minify(html, &cfg)
}

/// Minify XML by removing indentation and blank lines.
fn minify_xml_inner(xml: &[u8]) -> Vec<u8> {
    String::from_utf8_lossy(xml)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<String>()
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_html_basic() {
        let html = b"<html>\n  <head>\n  </head>\n  <body>\n    <p>Hello</p>\n  </body>\n</html>";
        let result = minify(MinifyType::Html(html), true);
        let result_str = String::from_utf8_lossy(&result);

        assert!(!result_str.contains("\n  "));
        assert!(result_str.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_minify_html_keeps_data_attributes() {
        let html = br#"<article data-project-id="lumina"><h3>Lumina</h3></article>"#;
        let result = minify(MinifyType::Html(html), true);
        let result_str = String::from_utf8_lossy(&result);

        assert!(result_str.contains("data-project-id=lumina") || result_str.contains(r#"data-project-id="lumina""#));
        assert!(result_str.contains("Lumina"));
    }

    #[test]
    fn test_minify_html_disabled() {
        let html = b"<html>\n  <body>\n  </body>\n</html>";
        let result = minify(MinifyType::Html(html), false);

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(&*result, html);
    }

    #[test]
    fn test_minify_xml_sitemap_like() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/work/</loc>
  </url>
</urlset>"#;
        let result = minify(MinifyType::Xml(xml), true);
        let result_str = String::from_utf8_lossy(&result);

        assert!(!result_str.contains('\n'));
        assert!(result_str.contains("<loc>https://example.com/work/</loc>"));
    }

    #[test]
    fn test_minify_xml_disabled() {
        let xml = b"<root>\n  <item/>\n</root>";
        assert_eq!(&*minify(MinifyType::Xml(xml), false), xml.as_slice());
    }
}
