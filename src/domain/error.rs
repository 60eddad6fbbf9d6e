//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors cover lookups, request bounds and malformed curve definitions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown curve: {name}")]
    UnknownCurve { name: String },

    #[error("depth {depth} out of range for curve '{curve}' (valid: {min}..={max})")]
    DepthOutOfRange {
        curve: String,
        depth: i64,
        min: u32,
        max: u32,
    },

    #[error("invalid symbol '{symbol}' in curve '{curve}'")]
    InvalidSymbol { curve: String, symbol: char },

    #[error("unbalanced branch brackets in curve '{curve}'")]
    UnbalancedBranch { curve: String },

    #[error("invalid definition for curve '{curve}': {message}")]
    InvalidDefinition { curve: String, message: String },

    #[error("invalid thickness: {0} (must be a positive number)")]
    InvalidThickness(f64),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
