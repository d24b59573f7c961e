//! Development server.
//!
//! A small `tiny_http` server over the build output:
//!
//! - Static file serving with `index.html` resolution for directories
//! - A plain 404 page linking back home
//! - Optional watcher thread that rebuilds on change (see `watch`)
//! - Graceful shutdown on Ctrl+C
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │   Main Thread   │     │  Watcher Thread  │
//! │  (HTTP Server)  │     │  (File Monitor)  │
//! └────────┬────────┘     └────────┬─────────┘
//!          │                       │
//!          ▼                       ▼
//!    Serve files            Rebuild on change
//!          │                       │
//!          └───────────┬───────────┘
//!                      ▼
//!             config.build.output
//! ```

use crate::{config::cfg, log, router::Route, watch::watch_for_changes_blocking};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    net::{IpAddr, SocketAddr},
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>404</title><link rel="stylesheet" href="/folio.css"></head><body><main><h1>404.</h1><p class="label">PAGE NOT FOUND</p><a class="learn-more" href="/">BACK HOME</a></main></body></html>"#;

/// Start the development server, blocking until Ctrl+C.
///
/// Binds to the configured interface and port, moving to the next port
/// when one is taken, and spawns the watcher when `[serve].watch` is set.
pub fn serve_site() -> Result<()> {
    let c = cfg();
    let interface: IpAddr = c.serve.interface.parse()?;

    let (server, addr) = try_bind_port(interface, c.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    if c.serve.watch {
        std::thread::spawn(move || {
            if let Err(err) = watch_for_changes_blocking() {
                log!("watch"; "{err}");
            }
        });
    }

    for request in server.incoming_requests() {
        // Output dir may change when folio.toml is reloaded
        let root = cfg().build.output.clone();
        if let Err(e) = handle_request(request, &root) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Bind to `base_port`, or the next free port within `max_retries`.
fn try_bind_port(
    interface: IpAddr,
    base_port: u16,
    max_retries: u16,
) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }
    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

fn handle_request(request: Request, root: &Path) -> Result<()> {
    match resolve(root, request.url()) {
        Some(path) => serve_file(request, &path),
        None => {
            if let Some(Route::Detail { project, .. }) = Route::from_path(request.url()) {
                log!("serve"; "no detail page for project `{project}`");
            }
            serve_not_found(request)
        }
    }
}

/// Map a request URL to a file under `root`.
///
/// The path is percent-decoded and stripped of its query string; directories
/// resolve to their `index.html`. Paths escaping `root` resolve to nothing.
fn resolve(root: &Path, url: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(url).ok()?;
    let path = decoded.split(['?', '#']).next().unwrap_or_default();
    let relative = Path::new(path.trim_matches('/'));

    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let local = root.join(relative);
    if local.is_file() {
        return Some(local);
    }
    let index = local.join("index.html");
    index.is_file().then_some(index)
}

fn serve_file(request: Request, path: &Path) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let response = Response::from_data(content).with_header(content_type(guess_content_type(path))?);
    request.respond(response)?;
    Ok(())
}

fn serve_not_found(request: Request) -> Result<()> {
    let response = Response::from_string(NOT_FOUND_PAGE)
        .with_status_code(404)
        .with_header(content_type("text/html; charset=utf-8")?);
    request.respond(response)?;
    Ok(())
}

fn content_type(value: &str) -> Result<Header> {
    Header::from_bytes("Content-Type", value).map_err(|()| anyhow!("invalid header: {value}"))
}

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",

        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",

        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("work/tideline")).unwrap();
        fs::write(dir.path().join("index.html"), "home").unwrap();
        fs::write(dir.path().join("work/tideline/index.html"), "detail").unwrap();
        fs::write(dir.path().join("folio.css"), "css").unwrap();
        dir
    }

    #[test]
    fn test_resolve_directory_index() {
        let dir = site();
        let root = dir.path();

        assert_eq!(resolve(root, "/"), Some(root.join("index.html")));
        assert_eq!(
            resolve(root, "/work/tideline/"),
            Some(root.join("work/tideline/index.html"))
        );
        assert_eq!(
            resolve(root, "/work/tideline"),
            Some(root.join("work/tideline/index.html"))
        );
    }

    #[test]
    fn test_resolve_strips_query_and_decodes() {
        let dir = site();
        let root = dir.path();
        fs::write(root.join("my file.txt"), "x").unwrap();

        assert_eq!(resolve(root, "/folio.css?t=1"), Some(root.join("folio.css")));
        assert_eq!(resolve(root, "/my%20file.txt"), Some(root.join("my file.txt")));
    }

    #[test]
    fn test_resolve_missing_and_traversal() {
        let dir = site();
        let root = dir.path().join("work");

        assert_eq!(resolve(&root, "/nope/"), None);
        assert_eq!(resolve(&root, "/../index.html"), None);
        assert_eq!(resolve(&root, "/%2e%2e/index.html"), None);
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type(Path::new("a.html")), "text/html; charset=utf-8");
        assert_eq!(guess_content_type(Path::new("a.JPG")), "application/octet-stream");
        assert_eq!(guess_content_type(Path::new("resume.pdf")), "application/pdf");
    }
}
