//! Folio: a static site generator for a single-page designer portfolio.
//!
//! One JSON document drives every page. The domain modules (`router`,
//! `tenure`, `scroll`, `projects`, `nav`) are pure; `render` turns them into
//! HTML and `build` writes the site.

pub mod build;
pub mod cli;
pub mod config;
pub mod content;
pub mod generator;
pub mod init;
pub mod nav;
pub mod projects;
pub mod render;
pub mod router;
pub mod scroll;
pub mod serve;
pub mod tenure;
pub mod utils;
pub mod watch;
