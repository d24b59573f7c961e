//! Sitemap generation.
//!
//! Lists every route of the site for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/work/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    log,
    router::Route,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use std::fs;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Write the sitemap if enabled in config. Returns whether a file was written.
pub fn build_sitemap(config: &SiteConfig, routes: &[Route]) -> Result<bool> {
    if !config.build.sitemap.enable {
        return Ok(false);
    }
    // validate() guarantees a url whenever the sitemap is enabled
    let base_url = config.base.url.as_deref().unwrap_or_default();
    let lastmod = chrono::Local::now().format("%Y-%m-%d").to_string();

    Sitemap::from_routes(base_url, routes, Some(&lastmod)).write(config)?;
    Ok(true)
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date, YYYY-MM-DD
    lastmod: Option<String>,
}

impl Sitemap {
    fn from_routes(base_url: &str, routes: &[Route], lastmod: Option<&str>) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let urls = routes
            .iter()
            .map(|route| UrlEntry {
                loc: format!("{base_url}{}", route.path()),
                lastmod: lastmod.map(str::to_owned),
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.sitemap_path();
        let xml = self.into_xml();
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config.build.minify);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::View;

    fn detail(id: &str) -> Route {
        Route::Detail {
            project: id.into(),
            return_to: View::Work,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's <x>"), "it&apos;s &lt;x&gt;");
    }

    #[test]
    fn test_sitemap_lists_routes() {
        let routes = [Route::View(View::Home), Route::View(View::Work), detail("tideline")];
        let xml = Sitemap::from_routes("https://mira.example/", &routes, Some("2025-01-01")).into_xml();

        assert!(xml.contains("<loc>https://mira.example/</loc>"));
        assert!(xml.contains("<loc>https://mira.example/work/</loc>"));
        assert!(xml.contains("<loc>https://mira.example/work/tideline/</loc>"));
        assert!(xml.contains("<lastmod>2025-01-01</lastmod>"));
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn test_sitemap_encodes_project_ids() {
        let xml = Sitemap::from_routes("https://mira.example", &[detail("north wind")], None).into_xml();
        assert!(xml.contains("<loc>https://mira.example/work/north%20wind/</loc>"));
    }

    #[test]
    fn test_sitemap_without_lastmod() {
        let xml = Sitemap::from_routes("https://mira.example", &[Route::default()], None).into_xml();

        assert!(xml.contains("<loc>https://mira.example/</loc>"));
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = Sitemap::from_routes("https://mira.example", &[], None).into_xml();
        let lines: Vec<&str> = xml.lines().collect();

        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }

    #[test]
    fn test_build_sitemap_disabled_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();

        assert!(!build_sitemap(&config, &[Route::default()]).unwrap());
        assert!(!dir.path().join("sitemap.xml").exists());
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.build.sitemap.enable = true;
        config.base.url = Some("https://mira.example".into());

        assert!(build_sitemap(&config, &[Route::default()]).unwrap());
        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://mira.example/</loc>"));
    }
}
