//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement, so the
//! watcher thread can swap in a new `folio.toml` while the server keeps
//! answering requests.
//!
//! ```text
//!   server thread ──► cfg()            (lock-free load)
//!   watch thread  ──► reload_config()  (atomic replace)
//! ```

use super::SiteConfig;
use crate::utils::hash;
use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use std::{
    fs,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicU64, Ordering},
    },
};

/// Global config storage, replaced with the loaded config in main.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Hash of the config file content at the last (re)load.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

/// Get current config as `Arc<SiteConfig>`.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Initialize global config (called once at startup).
pub fn init_config(config: SiteConfig) {
    if let Ok(content) = fs::read_to_string(&config.config_path) {
        CONFIG_HASH.store(hash::compute(content.as_bytes()), Ordering::Relaxed);
    }
    CONFIG.store(Arc::new(config));
}

/// Replace config atomically when `folio.toml` changes.
///
/// Returns `false` when the file content matches the last load.
pub fn reload_config() -> Result<bool> {
    let c = cfg();
    let cli = c.cli.context("config was not initialized from the CLI")?;

    let content = fs::read_to_string(&c.config_path)
        .with_context(|| format!("Failed to read {}", c.config_path.display()))?;
    let new_hash = hash::compute(content.as_bytes());
    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let new_config = SiteConfig::load(cli)?;
    new_config.validate()?;

    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);

    Ok(true)
}
