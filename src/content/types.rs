//! Serde model of the content document.
//!
//! Top-level and `site_info`/`about` keys are snake_case; project keys are
//! camelCase. Keys the model does not know are ignored.

use serde::{Deserialize, Serialize};

/// Root aggregate, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub site_info: SiteInfo,
    #[serde(default)]
    pub navigation: Vec<NavLink>,
    pub about: About,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    pub footer: Footer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub resume_url: String,
}

impl SiteInfo {
    /// First word of the name, for the hero's first line.
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }

    /// Everything after the first word, for the hero's second line.
    pub fn rest_of_name(&self) -> &str {
        self.name
            .split_once(' ')
            .map(|(_, rest)| rest)
            .unwrap_or_default()
    }

    /// Last word of the name, used as the navbar's home link.
    pub fn last_name(&self) -> &str {
        self.name.rsplit(' ').next().unwrap_or_default()
    }
}

/// How a navigation link is dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// In-page anchor such as `#contact`.
    #[default]
    Internal,
    /// Another site.
    External,
    /// One of the top-level views; `href` holds the view name.
    View,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(rename = "type", default)]
    pub kind: LinkKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub label: String,
    pub intro: String,
    /// Trusted inline HTML, rendered without escaping.
    pub main_copy: String,
    pub sub_copy: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Thumbnail
    pub image: String,
    pub description: String,
    pub year: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub open_in_new_tab: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub client_quote: Option<ClientQuote>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub results: Vec<ProjectResult>,
    #[serde(default)]
    pub performance: Option<Performance>,
    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,
}

impl Project {
    /// External link, ignoring empty strings.
    pub fn external(&self) -> Option<&str> {
        self.external_link.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientQuote {
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResult {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub carbon: String,
    pub load_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
    Gallery,
}

/// A section of a project detail page.
///
/// `kind` selects the layout, but every field is optional at every kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    /// Free text such as `2023 — PRESENT`.
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub cta: String,
    pub copyright: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parts() {
        let info = SiteInfo {
            name: "Mira Okafor Lund".into(),
            ..Default::default()
        };

        assert_eq!(info.first_name(), "Mira");
        assert_eq!(info.rest_of_name(), "Okafor Lund");
        assert_eq!(info.last_name(), "Lund");
    }

    #[test]
    fn test_single_word_name() {
        let info = SiteInfo {
            name: "Mira".into(),
            ..Default::default()
        };

        assert_eq!(info.first_name(), "Mira");
        assert_eq!(info.rest_of_name(), "");
        assert_eq!(info.last_name(), "Mira");
    }

    #[test]
    fn test_nav_link_kind_defaults_to_internal() {
        let link: NavLink = serde_json::from_str(r##"{"label":"CONTACT","href":"#contact"}"##).unwrap();
        assert_eq!(link.kind, LinkKind::Internal);

        let link: NavLink =
            serde_json::from_str(r#"{"label":"WORK","href":"work","type":"view"}"#).unwrap();
        assert_eq!(link.kind, LinkKind::View);
    }

    #[test]
    fn test_project_camel_case_and_unknown_keys() {
        let json = r#"{
            "id": "gain",
            "title": "Gain Network",
            "category": "Marketing Site",
            "image": "gain.jpg",
            "description": "DeFi marketing site.",
            "year": "2024",
            "featured": false,
            "externalLink": "https://gain.network",
            "openInNewTab": true,
            "internalSlug": "ignored",
            "performance": { "carbon": "0.2g", "loadTime": "0.8s" }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.external(), Some("https://gain.network"));
        assert!(project.open_in_new_tab);
        assert_eq!(project.performance.unwrap().load_time, "0.8s");
        assert!(project.content_blocks.is_empty());
    }

    #[test]
    fn test_empty_external_link_is_none() {
        let project = Project {
            external_link: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(project.external(), None);
    }

    #[test]
    fn test_content_block_fields_optional() {
        let block: ContentBlock = serde_json::from_str(r#"{"type":"gallery"}"#).unwrap();

        assert_eq!(block.kind, BlockKind::Gallery);
        assert!(block.images.is_empty());
        assert!(block.title.is_none());
        assert!(block.caption.is_none());
    }
}
