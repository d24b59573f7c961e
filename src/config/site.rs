//! `[site]` section configuration.
//!
//! Presentation knobs that the content document does not carry.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in folio.toml.
///
/// # Example
/// ```toml
/// [site]
/// featured_limit = 4     # projects shown on the home view
/// nav_hide_buffer = 10.0 # px from the top where the navbar never hides
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Maximum number of featured projects on the home view.
    #[serde(default = "defaults::site::featured_limit")]
    #[educe(Default = defaults::site::featured_limit())]
    pub featured_limit: usize,

    /// Scroll offset below which the floating navbar stays visible.
    #[serde(default = "defaults::site::nav_hide_buffer")]
    #[educe(Default = defaults::site::nav_hide_buffer())]
    pub nav_hide_buffer: f64,
}
