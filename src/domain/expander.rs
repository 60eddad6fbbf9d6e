//! Depth-first grammar expansion.
//!
//! Symbols are handed to a [`SymbolSink`] as soon as they are reached, so
//! memory use is bounded by the recursion depth rather than the size of the
//! expanded sequence.

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::grammar::{CurveDefinition, Symbol, MAX_SUPPORTED_DEPTH};

/// Consumer of the expanded symbol stream.
pub trait SymbolSink {
    fn execute(&mut self, symbol: Symbol) -> DomainResult<()>;
}

/// Expand `symbols` to `depth` levels, feeding leaves to `sink` in order.
///
/// Symbols without a rule go to the sink immediately regardless of the
/// remaining depth.
pub fn expand<S: SymbolSink + ?Sized>(
    definition: &CurveDefinition,
    symbols: &[Symbol],
    depth: u32,
    sink: &mut S,
) -> DomainResult<()> {
    if depth == 0 {
        for &symbol in symbols {
            sink.execute(symbol)?;
        }
        return Ok(());
    }

    for &symbol in symbols {
        match symbol.rule() {
            Some(id) => expand(definition, definition.replacement(id), depth - 1, sink)?,
            None => sink.execute(symbol)?,
        }
    }
    Ok(())
}

/// Expand the axiom of `definition` to an effective depth.
///
/// The depth must lie within the definition's range; this keeps recursion
/// bounded even for callers that skip clamping.
pub fn expand_axiom<S: SymbolSink + ?Sized>(
    definition: &CurveDefinition,
    effective_depth: u32,
    sink: &mut S,
) -> DomainResult<()> {
    let max = definition.max_depth().min(MAX_SUPPORTED_DEPTH);
    if effective_depth < definition.min_depth() || effective_depth > max {
        return Err(DomainError::DepthOutOfRange {
            curve: definition.name().to_string(),
            depth: i64::from(effective_depth),
            min: definition.min_depth(),
            max,
        });
    }
    expand(definition, definition.axiom(), effective_depth, sink)
}
