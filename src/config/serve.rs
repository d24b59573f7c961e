//! `[serve]` section: where `folio serve` listens and whether it rebuilds.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Local preview of the build output.
///
/// ```toml
/// [serve]
/// port = 3000
/// watch = false   # serve the current output without rebuilding
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    /// Address to bind, `127.0.0.1` unless the preview should reach the LAN.
    #[serde(default = "defaults::serve::interface")]
    #[educe(Default = defaults::serve::interface())]
    pub interface: String,

    /// First port to try; taken ports move the server up by one.
    #[serde(default = "defaults::serve::port")]
    #[educe(Default = defaults::serve::port())]
    pub port: u16,

    /// Rebuild when `content.json`, the assets or `folio.toml` change.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub watch: bool,
}
