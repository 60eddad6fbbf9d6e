//! Shareable curve state: `name-depth-thickness-color`
//!
//! Compact encoding of everything needed to reproduce a render, used for
//! links and as the default download file name.

use std::fmt;
use std::str::FromStr;

use crate::application::services::RenderRequest;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::DEFAULT_CURVE;

pub const DEFAULT_DEPTH: i64 = 2;
pub const DEFAULT_THICKNESS: f64 = 3.0;
pub const DEFAULT_COLOR: &str = "black";

const SEPARATOR: char = '-';

/// Curve choice plus display parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveState {
    pub name: String,
    pub depth: i64,
    pub thickness: f64,
    pub color: String,
}

impl Default for CurveState {
    fn default() -> Self {
        Self {
            name: DEFAULT_CURVE.into(),
            depth: DEFAULT_DEPTH,
            thickness: DEFAULT_THICKNESS,
            color: DEFAULT_COLOR.into(),
        }
    }
}

impl CurveState {
    /// Decode against the compiled defaults.
    pub fn decode(encoded: &str) -> ApplicationResult<Self> {
        Self::decode_with_defaults(encoded, &Self::default())
    }

    /// Decode, taking missing parts from `defaults`.
    ///
    /// An empty string yields `defaults`. Parts beyond the fourth are ignored.
    pub fn decode_with_defaults(encoded: &str, defaults: &CurveState) -> ApplicationResult<Self> {
        if encoded.is_empty() {
            return Ok(defaults.clone());
        }
        let invalid = |message: String| ApplicationError::InvalidState {
            state: encoded.to_string(),
            message,
        };

        let mut parts = encoded.split(SEPARATOR);
        let name = parts
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| defaults.name.clone());
        let depth = match parts.next() {
            Some(d) => d
                .parse::<i64>()
                .map_err(|e| invalid(format!("depth '{d}': {e}")))?,
            None => defaults.depth,
        };
        let thickness = match parts.next() {
            Some(t) => t
                .parse::<f64>()
                .map_err(|e| invalid(format!("thickness '{t}': {e}")))?,
            None => defaults.thickness,
        };
        let color = parts
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| defaults.color.clone());

        Ok(Self {
            name,
            depth,
            thickness,
            color,
        })
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Default file name for a downloaded SVG.
    pub fn file_name(&self) -> String {
        format!("{self}.svg")
    }

    pub fn to_request(&self) -> RenderRequest {
        RenderRequest {
            curve: self.name.clone(),
            depth: self.depth,
            thickness: self.thickness,
            color: self.color.clone(),
        }
    }
}

impl fmt::Display for CurveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            self.name, self.depth, self.thickness, self.color
        )
    }
}

impl FromStr for CurveState {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
