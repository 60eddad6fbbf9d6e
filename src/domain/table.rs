//! Registry of named curve definitions.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::grammar::{CurveDefinition, CurveSpec};

/// Curve used when none is requested.
pub const DEFAULT_CURVE: &str = "koch";

/// Read-only lookup table of curve definitions, in listing order.
#[derive(Debug, Clone)]
pub struct CurveTable {
    curves: Vec<CurveDefinition>,
}

impl CurveTable {
    /// Validate every spec and build a table from them.
    pub fn new(specs: impl IntoIterator<Item = CurveSpec>) -> DomainResult<Self> {
        let mut curves: Vec<CurveDefinition> = Vec::new();
        for spec in specs {
            if curves.iter().any(|c| c.name() == spec.name) {
                return Err(DomainError::InvalidDefinition {
                    curve: spec.name,
                    message: "duplicate curve name".into(),
                });
            }
            curves.push(CurveDefinition::new(spec)?);
        }
        Ok(Self { curves })
    }

    /// The built-in families, compiled on first use.
    ///
    /// # Panics
    /// If a built-in definition is malformed. That is a defect in this
    /// module and surfaces on the first render of any process.
    pub fn builtin() -> &'static CurveTable {
        static BUILTIN: OnceLock<CurveTable> = OnceLock::new();
        BUILTIN.get_or_init(|| match CurveTable::new(builtin_specs()) {
            Ok(table) => table,
            Err(e) => panic!("built-in curve table is invalid: {e}"),
        })
    }

    pub fn get(&self, name: &str) -> DomainResult<&CurveDefinition> {
        self.curves
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| DomainError::UnknownCurve {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(|c| c.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurveDefinition> {
        self.curves.iter()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

struct Family {
    name: &'static str,
    axiom: &'static str,
    rules: &'static [(char, &'static str)],
    angle: f64,
    start: f64,
    turn: bool,
    base: f64,
    min: u32,
    max: u32,
}

impl From<&Family> for CurveSpec {
    fn from(f: &Family) -> Self {
        CurveSpec {
            name: f.name.into(),
            axiom: f.axiom.into(),
            rules: f.rules.iter().map(|(k, v)| (*k, v.to_string())).collect(),
            angle: f.angle,
            initial_heading: f.start,
            turn_by_depth: f.turn,
            growth_base: f.base,
            min_depth: f.min,
            max_depth: f.max,
        }
    }
}

const FAMILIES: &[Family] = &[
    Family {
        name: "koch",
        axiom: "F++F++F",
        rules: &[('F', "F-F++F-F")],
        angle: PI / 3.0,
        start: 0.0,
        turn: false,
        base: 3.0,
        min: 0,
        max: 7,
    },
    Family {
        name: "hilbert",
        axiom: "a",
        rules: &[('a', "+bF-aFa-Fb+"), ('b', "-aF+bFb+Fa-")],
        angle: PI / 2.0,
        start: 0.0,
        turn: false,
        base: 2.0,
        min: 1,
        max: 8,
    },
    Family {
        name: "peano",
        axiom: "a",
        rules: &[
            ('a', "aFbFa-F-bFaFb+F+aFbFa"),
            ('b', "bFaFb+F+aFbFa-F-bFaFb"),
        ],
        angle: PI / 2.0,
        start: PI / 2.0,
        turn: false,
        base: 3.0,
        min: 1,
        max: 5,
    },
    Family {
        name: "gosper",
        axiom: "A",
        rules: &[('A', "A-B--B+A++AA+B-"), ('B', "+A-BB--B-A++A+B")],
        angle: PI / 3.0,
        start: PI / 9.0,
        turn: true,
        base: 2.6,
        min: 0,
        max: 5,
    },
    Family {
        name: "sierpinski",
        axiom: "A",
        rules: &[('A', "+B-A-B+"), ('B', "-A+B+A-")],
        angle: PI / 3.0,
        start: 0.0,
        turn: false,
        base: 2.0,
        min: 1,
        max: 9,
    },
    Family {
        name: "rings",
        axiom: "F+F+F+F",
        rules: &[('F', "FF+F+F+F+F+F-F")],
        angle: PI / 2.0,
        start: -37.0 * PI / 360.0,
        turn: true,
        base: 3.0,
        min: 0,
        max: 5,
    },
    Family {
        name: "tree",
        axiom: "A",
        rules: &[('A', "B[+A]-A"), ('B', "BB")],
        angle: PI / 4.0,
        start: PI / 2.0,
        turn: false,
        base: 1.9,
        min: 0,
        max: 9,
    },
    Family {
        name: "plant",
        axiom: "a",
        rules: &[('a', "F+[[a]-a]-F[-Fa]+a"), ('F', "FF")],
        angle: 25.0 / 180.0 * PI,
        start: PI / 4.0,
        turn: false,
        base: 2.0,
        min: 1,
        max: 7,
    },
    Family {
        name: "willow",
        axiom: "a",
        rules: &[('a', "bFF[+a]c"), ('b', "bF"), ('c', "bFF[-a]a")],
        angle: PI / 6.0,
        start: 80.0 / 180.0 * PI,
        turn: false,
        base: 1.3,
        min: 1,
        max: 12,
    },
    Family {
        name: "dragon",
        axiom: "Fa",
        rules: &[('a', "a-bF-"), ('b', "+Fa+b")],
        angle: PI / 2.0,
        start: PI / 4.0,
        turn: true,
        base: 1.4,
        min: 0,
        max: 15,
    },
    Family {
        name: "island",
        axiom: "F+F+F+F",
        rules: &[('F', "F+F-F-FF+F+F-F")],
        angle: PI / 2.0,
        start: PI / 4.0,
        turn: false,
        base: 4.0,
        min: 0,
        max: 4,
    },
];

/// Specs of the built-in curve families.
pub fn builtin_specs() -> Vec<CurveSpec> {
    FAMILIES.iter().map(CurveSpec::from).collect()
}
