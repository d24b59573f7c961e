//! Generated files other than pages.

pub mod sitemap;
