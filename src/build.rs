//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_state() ──► Loading ──► write shell page, fail
//!     │
//!     ├── render every route (parallel) ──► <route>/index.html
//!     │
//!     ├── folio.css, folio.js
//!     │
//!     ├── copy assets (parallel, skips up-to-date files)
//!     │
//!     └── build_sitemap()
//! ```

use crate::{
    config::SiteConfig,
    content::{self, LoadState},
    generator::sitemap::build_sitemap,
    log,
    render::{self, RenderOptions},
    router::Route,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};
use walkdir::WalkDir;

const STYLESHEET: &str = include_str!("embed/folio.css");
const SCRIPT: &str = include_str!("embed/folio.js");

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub assets: usize,
    pub sitemap: bool,
}

/// Build the whole site into `[build].output`.
///
/// When the content cannot be loaded, only the preloader shell is written
/// as the home page and the build fails.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let options = RenderOptions::from_config(config);
    let content = match content::load_state(&config.content_source()) {
        LoadState::Ready(content) => content,
        LoadState::Loading => {
            let shell = render::render_loading(&options);
            write_page(output, &Route::default(), &shell, config.build.minify)?;
            bail!(
                "content could not be loaded from {}",
                config.content_source().describe()
            );
        }
    };

    let routes = render::routes(&content);
    routes.par_iter().try_for_each(|route| {
        let html = render::render_route(&content, &options, route)
            .with_context(|| format!("no project for route {}", route.path()))?;
        write_page(output, route, &html, config.build.minify)
    })?;

    fs::write(output.join("folio.css"), STYLESHEET)?;
    fs::write(output.join("folio.js"), SCRIPT)?;

    let assets = copy_assets(&config.build.assets, output, config.build.clean)?;
    let sitemap = build_sitemap(config, &routes)?;

    let report = BuildReport {
        pages: routes.len(),
        assets,
        sitemap,
    };
    log!("build"; "{} pages, {} assets copied", report.pages, report.assets);
    Ok(report)
}

/// Create the output directory, removing it first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Output file for a route: `/work/x/` is written to `work/x/index.html`.
///
/// Detail directories use the raw project id, which is what the server
/// finds after percent-decoding the request path.
pub fn page_path(output: &Path, route: &Route) -> PathBuf {
    let dir = match route {
        Route::View(view) => output.join(view.path().trim_matches('/')),
        Route::Detail { project, .. } => output.join("work").join(project),
    };
    dir.join("index.html")
}

fn write_page(output: &Path, route: &Route, html: &str, minify_enabled: bool) -> Result<()> {
    let path = page_path(output, route);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let html = minify(MinifyType::Html(html.as_bytes()), minify_enabled);
    fs::write(&path, &*html).with_context(|| format!("Failed to write {}", path.display()))
}

/// Copy the assets directory to `<output>/<dir name>`. Returns how many files were copied.
fn copy_assets(assets: &Path, output: &Path, clean: bool) -> Result<usize> {
    if !assets.is_dir() {
        return Ok(0);
    }
    let dest_root = output.join(assets.file_name().unwrap_or("assets".as_ref()));

    let copied = collect_all_files(assets)
        .par_iter()
        .map(|path| -> Result<usize> {
            let rel = path.strip_prefix(assets)?;
            let dest = dest_root.join(rel);
            if !clean && is_up_to_date(path, &dest) {
                return Ok(0);
            }
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)
                .with_context(|| format!("Failed to copy {}", path.display()))?;
            Ok(1)
        })
        .sum::<Result<usize>>()?;
    Ok(copied)
}

/// Collect all files from a directory recursively.
fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Destination exists and is not older than the source.
fn is_up_to_date(src: &Path, dst: &Path) -> bool {
    let modified = |p: &Path| -> Option<SystemTime> { p.metadata().ok()?.modified().ok() };
    match (modified(src), modified(dst)) {
        (Some(src_time), Some(dst_time)) => src_time <= dst_time,
        _ => false,
    }
}
