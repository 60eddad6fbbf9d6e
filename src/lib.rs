//! sfc: self-similar fractal curves
//!
//! L-system curve definitions are expanded depth-first and interpreted by a
//! turtle into SVG path data with a padded viewport.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
