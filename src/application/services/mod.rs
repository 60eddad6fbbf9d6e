//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod render;

pub use render::{DepthPolicy, RenderRequest, RenderResult, RenderService};
