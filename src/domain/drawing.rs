//! The pure core: definition + depth + thickness in, geometry out.

use serde::Serialize;
use tracing::trace;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::expander::expand_axiom;
use crate::domain::grammar::CurveDefinition;
use crate::domain::path::PathBuilder;
use crate::domain::turtle::Turtle;
use crate::domain::viewport::Viewport;

/// Geometry of one rendered curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drawing {
    pub effective_depth: u32,
    pub path: PathBuilder,
    pub viewport: Viewport,
    pub stroke_width: f64,
}

/// Render `definition` at a user depth (saturated to its range).
pub fn draw(
    definition: &CurveDefinition,
    user_depth: u32,
    thickness: f64,
) -> DomainResult<Drawing> {
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(DomainError::InvalidThickness(thickness));
    }

    let effective_depth = definition.effective_depth(user_depth);
    let mut turtle = Turtle::new(definition, effective_depth);
    expand_axiom(definition, effective_depth, &mut turtle)?;
    let (path, bounds) = turtle.finish();
    trace!(
        curve = definition.name(),
        effective_depth,
        primitives = path.len(),
        "traversal complete"
    );

    let viewport = bounds.viewport(thickness);
    let stroke_width = viewport.stroke_width(thickness);
    Ok(Drawing {
        effective_depth,
        path,
        viewport,
        stroke_width,
    })
}
