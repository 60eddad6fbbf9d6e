//! Application layer: services and use cases
//!
//! This layer turns user requests into core renders and serializes results.

pub mod error;
pub mod error_ext;
pub mod output;
pub mod services;
pub mod state;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::{write_output, IoResultExt};
pub use output::{format_result, to_svg, OutputFormat};
pub use state::CurveState;
