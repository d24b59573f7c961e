//! Site initialization.
//!
//! Writes a ready-to-build site: default `folio.toml`, the bundled sample
//! `content.json`, an empty `assets/` directory and a `.gitignore`.

use crate::{config::SiteConfig, content::BUNDLED_CONTENT, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Create a new site at the configured root.
///
/// Without a name the root must be empty, so an existing project is never
/// overwritten.
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `folio init <SITE_NAME>` to create in a subdirectory."
        );
    }

    fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;
    create_new(&config.build.assets, None)?;
    create_new(&config.build.content, Some(BUNDLED_CONTENT))?;
    init_default_config(&config.config_path)?;

    let output = config.build.output.strip_prefix(root).unwrap_or(&config.build.output);
    init_ignored_files(root, &[output])?;

    log!("init"; "created site at {}", root.display());
    Ok(())
}

fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Create a file with `content`, or a directory when `content` is `None`.
fn create_new(path: &Path, content: Option<&str>) -> Result<()> {
    if path.exists() {
        bail!(
            "Path `{}` already exists. Try `folio init <SITE_NAME>` instead.",
            path.display()
        );
    }
    let result = match content {
        Some(content) => path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::write(path, content)),
        None => fs::create_dir_all(path),
    };
    result.with_context(|| format!("Failed to create {}", path.display()))
}

fn init_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write ignore files listing `paths`, leaving existing ones alone.
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .filter_map(|p| p.to_str())
        .map(|p| format!("/{}/\n", p.trim_matches('/')))
        .collect::<String>();

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn load(args: &[&str]) -> SiteConfig {
        let cli: &'static Cli = Box::leak(Box::new(Cli::parse_from(args)));
        SiteConfig::load(cli).unwrap()
    }

    #[test]
    fn test_new_site_with_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&["folio", "-r", dir.path().to_str().unwrap(), "init", "portfolio"]);

        new_site(&config, true).unwrap();

        let site = dir.path().join("portfolio");
        assert!(site.join("assets").is_dir());
        assert_eq!(fs::read_to_string(site.join("content.json")).unwrap(), BUNDLED_CONTENT);
        assert_eq!(fs::read_to_string(site.join(".gitignore")).unwrap(), "/public/\n");

        let written = SiteConfig::from_path(&site.join("folio.toml")).unwrap();
        assert_eq!(written.site.featured_limit, 4);
        assert!(written.build.minify);
    }

    #[test]
    fn test_new_site_refuses_non_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();
        let config = load(&["folio", "-r", dir.path().to_str().unwrap(), "init"]);

        assert!(new_site(&config, false).is_err());
        assert!(!dir.path().join("content.json").exists());
    }

    #[test]
    fn test_default_config_round_trips() {
        let text = toml::to_string_pretty(&SiteConfig::default()).unwrap();
        assert!(SiteConfig::from_str(&text).is_ok());
    }
}
