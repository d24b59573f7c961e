//! File system watcher for live rebuilds.
//!
//! Watches the site root (for `folio.toml` and the content file) and the
//! assets directory. Every batch of changes rebuilds the whole site; a
//! config change reloads `folio.toml` first.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌─────────────────────────────┐
//! │ notify   │───▶│ Debouncer│───▶│ handle_changes()            │
//! │ events   │    │ (300ms)  │    │   config? ──► reload_config │
//! └──────────┘    └──────────┘    │   build_site()              │
//!                                 └─────────────────────────────┘
//! ```

use crate::{
    build::build_site,
    config::{SiteConfig, cfg, reload_config},
    log,
};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::RecvTimeoutError,
    time::{Duration, Instant},
};

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

/// What a changed path means for the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileCategory {
    Config,
    Content,
    Asset,
    Unknown,
}

fn categorize(path: &Path, config: &SiteConfig) -> FileCategory {
    if path == config.config_path {
        FileCategory::Config
    } else if path == config.build.content {
        FileCategory::Content
    } else if path.starts_with(&config.build.assets) {
        FileCategory::Asset
    } else {
        FileCategory::Unknown
    }
}

/// Editor swap and backup files.
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

fn rel_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

/// Batches rapid file events with debouncing and rebuild cooldown.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    fn in_cooldown(&self) -> bool {
        self.last_rebuild
            .is_some_and(|t| t.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS))
    }

    fn add(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        for path in paths {
            if !is_temp_file(&path) {
                self.pending.insert(path);
            }
        }
        self.last_event = Some(Instant::now());
    }

    /// Pending changes are settled and the last rebuild has cooled down.
    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && !self.in_cooldown()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn mark_rebuild(&mut self) {
        self.last_rebuild = Some(Instant::now());
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            return Duration::from_secs(60);
        }
        let cooldown_left = self.last_rebuild.map_or(Duration::ZERO, |t| {
            Duration::from_millis(REBUILD_COOLDOWN_MS).saturating_sub(t.elapsed())
        });
        cooldown_left.max(Duration::from_millis(DEBOUNCE_MS))
    }
}

/// Rebuild for a batch of changed paths. Returns true if a rebuild succeeded.
fn handle_changes(paths: &[PathBuf]) -> bool {
    let config = cfg();
    let categories: Vec<_> = paths
        .iter()
        .map(|p| (p, categorize(p, &config)))
        .filter(|(_, cat)| *cat != FileCategory::Unknown)
        .collect();
    if categories.is_empty() {
        return false;
    }

    if categories.iter().any(|(_, cat)| *cat == FileCategory::Config) {
        match reload_config() {
            Ok(true) => log!("watch"; "config reloaded"),
            Ok(false) => {}
            Err(e) => {
                log!("watch"; "config reload failed: {e:#}");
                return false;
            }
        }
    }

    let root = config.get_root();
    let changed: Vec<_> = categories.iter().map(|(p, _)| rel_path(p, root)).collect();
    log!("watch"; "{} changed, rebuilding...", changed.join(", "));

    match build_site(&cfg()) {
        Ok(_) => true,
        Err(e) => {
            log!("watch"; "build failed: {e:#}");
            false
        }
    }
}

fn setup_watchers(watcher: &mut impl Watcher, config: &SiteConfig) -> Result<()> {
    let root = config.get_root();
    watcher
        .watch(root, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", root.display()))?;
    log!("watch"; "{}, {}", rel_path(&config.config_path, root), rel_path(&config.build.content, root));

    let assets = &config.build.assets;
    if assets.is_dir() {
        watcher
            .watch(assets, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch assets: {}", assets.display()))?;
        log!("watch"; "{}/", rel_path(assets, root));
    }
    Ok(())
}

const fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

/// Start blocking file watcher with debouncing and live rebuild.
pub fn watch_for_changes_blocking() -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    setup_watchers(&mut watcher, &cfg())?;

    let mut debouncer = Debouncer::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) => {
                debouncer.add(event.paths);
            }
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(RecvTimeoutError::Timeout) if debouncer.ready() => {
                if handle_changes(&debouncer.take()) {
                    debouncer.mark_rebuild();
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.config_path = PathBuf::from("/site/folio.toml");
        config.build.content = PathBuf::from("/site/content.json");
        config.build.assets = PathBuf::from("/site/assets");
        config
    }

    #[test]
    fn test_categorize() {
        let config = config();
        let cat = |p: &str| categorize(Path::new(p), &config);

        assert_eq!(cat("/site/folio.toml"), FileCategory::Config);
        assert_eq!(cat("/site/content.json"), FileCategory::Content);
        assert_eq!(cat("/site/assets/images/a.jpg"), FileCategory::Asset);
        assert_eq!(cat("/site/public/index.html"), FileCategory::Unknown);
        assert_eq!(cat("/site/notes.md"), FileCategory::Unknown);
    }

    #[test]
    fn test_is_temp_file() {
        assert!(is_temp_file(Path::new("/site/content.json~")));
        assert!(is_temp_file(Path::new("/site/.content.json.swp")));
        assert!(!is_temp_file(Path::new("/site/content.json")));
    }

    #[test]
    fn test_debouncer_batches_and_filters() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.ready());

        debouncer.add([
            PathBuf::from("/site/content.json"),
            PathBuf::from("/site/content.json"),
            PathBuf::from("/site/x.tmp"),
        ]);
        assert_eq!(debouncer.timeout(), Duration::from_millis(DEBOUNCE_MS));

        // not ready until the debounce window passes
        assert!(!debouncer.ready());
        debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS));
        assert!(debouncer.ready());
        assert_eq!(debouncer.take(), vec![PathBuf::from("/site/content.json")]);
        assert!(!debouncer.ready());
    }

    #[test]
    fn test_cooldown_after_rebuild() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.in_cooldown());
        debouncer.mark_rebuild();
        assert!(debouncer.in_cooldown());
    }

    #[test]
    fn test_changes_during_cooldown_are_kept() {
        let mut debouncer = Debouncer::new();
        debouncer.mark_rebuild();
        debouncer.add([PathBuf::from("/site/content.json")]);
        debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS));

        // held back while cooling down, then released
        assert!(!debouncer.ready());
        assert!(debouncer.timeout() > Duration::from_millis(DEBOUNCE_MS));
        debouncer.last_rebuild =
            Some(Instant::now() - Duration::from_millis(REBUILD_COOLDOWN_MS));
        assert!(debouncer.ready());
        assert_eq!(debouncer.take(), vec![PathBuf::from("/site/content.json")]);
    }
}
