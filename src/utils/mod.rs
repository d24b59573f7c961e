//! Utility modules for the portfolio generator.

pub mod hash;
pub mod log;
pub mod minify;
