//! Curve rendering service
//!
//! Resolves a request against the curve table, applies the depth policy and
//! runs the core. Holds no mutable state, so one service can serve many
//! renders at once.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{draw, CurveDefinition, CurveTable, DomainError, PathBuilder, Viewport};

/// What to do with a user depth outside a curve's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthPolicy {
    /// Saturate to the nearest valid depth
    #[default]
    Clamp,
    /// Reject with `DepthOutOfRange`
    Strict,
}

/// Input for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub curve: String,
    /// User-facing depth, may be out of range
    pub depth: i64,
    pub thickness: f64,
    /// Passed through unvalidated
    pub color: String,
}

/// Output of one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderResult {
    pub curve: String,
    /// User depth actually rendered
    pub depth: u32,
    pub effective_depth: u32,
    pub thickness: f64,
    pub color: String,
    pub path: PathBuilder,
    pub viewport: Viewport,
    pub stroke_width: f64,
}

impl RenderResult {
    pub fn path_data(&self) -> String {
        self.path.to_path_data()
    }
}

/// Service for rendering named curves.
#[derive(Debug, Clone, Copy)]
pub struct RenderService<'t> {
    table: &'t CurveTable,
    policy: DepthPolicy,
}

impl RenderService<'static> {
    /// Service over the built-in curve families.
    pub fn builtin(policy: DepthPolicy) -> Self {
        Self::new(CurveTable::builtin(), policy)
    }
}

impl<'t> RenderService<'t> {
    pub fn new(table: &'t CurveTable, policy: DepthPolicy) -> Self {
        Self { table, policy }
    }

    pub fn table(&self) -> &'t CurveTable {
        self.table
    }

    /// Render one request.
    pub fn render(&self, request: &RenderRequest) -> ApplicationResult<RenderResult> {
        debug!(
            "render: curve={} depth={} thickness={}",
            request.curve, request.depth, request.thickness
        );
        let context = |source: DomainError| ApplicationError::Render {
            curve: request.curve.clone(),
            depth: request.depth,
            source,
        };

        let definition = self.table.get(&request.curve).map_err(context)?;
        let depth = self.resolve_depth(definition, request.depth).map_err(context)?;
        let drawing = draw(definition, depth, request.thickness).map_err(context)?;

        debug!(
            "render: {} primitives ({} segments), stroke_width={}",
            drawing.path.len(),
            drawing.path.segment_count(),
            drawing.stroke_width
        );
        Ok(RenderResult {
            curve: definition.name().to_string(),
            depth,
            effective_depth: drawing.effective_depth,
            thickness: request.thickness,
            color: request.color.clone(),
            path: drawing.path,
            viewport: drawing.viewport,
            stroke_width: drawing.stroke_width,
        })
    }

    /// Render many requests in parallel.
    ///
    /// Results keep the input order; the first failure is returned.
    pub fn render_all(&self, requests: &[RenderRequest]) -> ApplicationResult<Vec<RenderResult>> {
        debug!("render_all: {} requests", requests.len());

        let results: Vec<ApplicationResult<RenderResult>> =
            requests.par_iter().map(|r| self.render(r)).collect();

        // Collect successes, propagate first error
        let mut outputs = Vec::with_capacity(results.len());
        for result in results {
            outputs.push(result?);
        }
        Ok(outputs)
    }

    fn resolve_depth(
        &self,
        definition: &CurveDefinition,
        depth: i64,
    ) -> Result<u32, DomainError> {
        match self.policy {
            DepthPolicy::Clamp => {
                let clamped = definition.clamp_user_depth(depth);
                if i64::from(clamped) != depth {
                    debug!(
                        "resolve_depth: clamped {} to {} for {}",
                        depth,
                        clamped,
                        definition.name()
                    );
                }
                Ok(clamped)
            }
            DepthPolicy::Strict => definition.check_user_depth(depth),
        }
    }
}
