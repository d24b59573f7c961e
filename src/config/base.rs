//! `[base]` section configuration.
//!
//! Page metadata that does not live in the content document.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - page metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Mira Okafor, Portfolio"
/// description = "Designing calm, human-centered experiences"
/// url = "https://mira.example"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Browser tab title. Falls back to `site_info.name` when empty.
    #[serde(default)]
    pub title: String,

    /// `<meta name="description">`. Falls back to `site_info.tagline` when empty.
    #[serde(default)]
    pub description: String,

    /// Absolute site URL for sitemap generation.
    /// Required when `[build.sitemap].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code for `<html lang>`.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}
