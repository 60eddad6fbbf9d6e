//! Domain layer: curve grammars, expansion and turtle geometry
//!
//! This layer is pure computation (no I/O, no CLI, no config loading).

pub mod drawing;
pub mod error;
pub mod expander;
pub mod grammar;
pub mod path;
pub mod table;
pub mod turtle;
pub mod viewport;

pub use drawing::{draw, Drawing};
pub use error::{DomainError, DomainResult};
pub use expander::{expand, expand_axiom, SymbolSink};
pub use grammar::{CurveDefinition, CurveSpec, RuleId, Symbol, MAX_SUPPORTED_DEPTH};
pub use path::{format_number, PathBuilder, PathCommand, Point, PRECISION};
pub use table::{builtin_specs, CurveTable, DEFAULT_CURVE};
pub use turtle::{Turtle, TurtleState, STEP_FACTOR};
pub use viewport::{Bounds, Viewport, PAD_FACTOR};
