//! Curve grammars: tagged symbols and validated curve definitions.
//!
//! A [`CurveSpec`] is the textual form of an L-system (axiom, rewrite rules,
//! turtle parameters). [`CurveDefinition::new`] compiles it once into
//! [`Symbol`]s so that expansion and interpretation never look at characters
//! again.

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Upper bound on any definition's internal recursion depth.
pub const MAX_SUPPORTED_DEPTH: u32 = 15;

/// Index of a rewrite rule within its [`CurveDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(usize);

impl RuleId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A compiled grammar symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Step forward and draw. Letters that are also rule keys carry their rule.
    Draw(Option<RuleId>),
    TurnLeft,
    TurnRight,
    Push,
    Pop,
    /// Pure non-terminal, no turtle effect at the leaf level.
    NonTerminal(RuleId),
}

impl Symbol {
    /// The rule that rewrites this symbol, if any.
    pub fn rule(self) -> Option<RuleId> {
        match self {
            Symbol::Draw(rule) => rule,
            Symbol::NonTerminal(id) => Some(id),
            Symbol::TurnLeft | Symbol::TurnRight | Symbol::Push | Symbol::Pop => None,
        }
    }

    fn structural(c: char) -> Option<Symbol> {
        match c {
            '+' => Some(Symbol::TurnLeft),
            '-' => Some(Symbol::TurnRight),
            '[' => Some(Symbol::Push),
            ']' => Some(Symbol::Pop),
            _ => None,
        }
    }
}

/// Textual description of a curve family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub name: String,
    /// Initial symbols
    pub axiom: String,
    /// Rewrite rules, in declaration order
    pub rules: Vec<(char, String)>,
    /// Turn increment for `+`/`-`, in radians
    pub angle: f64,
    /// Base heading, in radians
    pub initial_heading: f64,
    /// Multiply the base heading by the effective depth
    pub turn_by_depth: bool,
    /// Geometric growth factor per depth level
    pub growth_base: f64,
    pub min_depth: u32,
    pub max_depth: u32,
}

/// A validated curve definition, immutable after construction.
#[derive(Debug, Clone)]
pub struct CurveDefinition {
    spec: CurveSpec,
    axiom: Vec<Symbol>,
    rules: Vec<Vec<Symbol>>,
}

impl CurveDefinition {
    /// Compile and validate a curve spec.
    ///
    /// Rejects structural rule keys, duplicate keys, unknown symbols,
    /// unbalanced brackets in any single replacement, a growth base not above
    /// one, and depth ranges outside `0..=MAX_SUPPORTED_DEPTH`.
    pub fn new(spec: CurveSpec) -> DomainResult<Self> {
        let invalid = |message: String| DomainError::InvalidDefinition {
            curve: spec.name.clone(),
            message,
        };

        let mut keys: Vec<char> = Vec::with_capacity(spec.rules.len());
        for (key, _) in &spec.rules {
            if Symbol::structural(*key).is_some() {
                return Err(invalid(format!("rule keyed by structural symbol '{key}'")));
            }
            if keys.contains(key) {
                return Err(invalid(format!("duplicate rule for '{key}'")));
            }
            keys.push(*key);
        }

        if spec.axiom.is_empty() {
            return Err(invalid("empty axiom".into()));
        }
        if !spec.angle.is_finite() || !spec.initial_heading.is_finite() {
            return Err(invalid("angles must be finite".into()));
        }
        if !spec.growth_base.is_finite() || spec.growth_base <= 1.0 {
            return Err(invalid(format!(
                "growth base must be greater than 1, got {}",
                spec.growth_base
            )));
        }
        if spec.min_depth > spec.max_depth {
            return Err(invalid(format!(
                "min depth {} exceeds max depth {}",
                spec.min_depth, spec.max_depth
            )));
        }
        if spec.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(invalid(format!(
                "max depth {} exceeds supported maximum {MAX_SUPPORTED_DEPTH}",
                spec.max_depth
            )));
        }

        let axiom = compile(&spec.name, &spec.axiom, &keys)?;
        let rules = spec
            .rules
            .iter()
            .map(|(_, replacement)| compile(&spec.name, replacement, &keys))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self { spec, axiom, rules })
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &CurveSpec {
        &self.spec
    }

    pub fn axiom(&self) -> &[Symbol] {
        &self.axiom
    }

    /// Replacement sequence for a rule of this definition.
    pub fn replacement(&self, id: RuleId) -> &[Symbol] {
        &self.rules[id.index()]
    }

    pub fn angle(&self) -> f64 {
        self.spec.angle
    }

    pub fn growth_base(&self) -> f64 {
        self.spec.growth_base
    }

    pub fn min_depth(&self) -> u32 {
        self.spec.min_depth
    }

    pub fn max_depth(&self) -> u32 {
        self.spec.max_depth
    }

    /// Largest user-facing depth.
    pub fn max_user_depth(&self) -> u32 {
        self.spec.max_depth - self.spec.min_depth
    }

    /// Saturate a user depth into `0..=max_user_depth()`.
    pub fn clamp_user_depth(&self, depth: i64) -> u32 {
        depth.clamp(0, i64::from(self.max_user_depth())) as u32
    }

    /// Accept a user depth only if it is already in range.
    pub fn check_user_depth(&self, depth: i64) -> DomainResult<u32> {
        if (0..=i64::from(self.max_user_depth())).contains(&depth) {
            Ok(depth as u32)
        } else {
            Err(DomainError::DepthOutOfRange {
                curve: self.spec.name.clone(),
                depth,
                min: 0,
                max: self.max_user_depth(),
            })
        }
    }

    /// Internal recursion depth for a user depth, clamped to the valid range.
    pub fn effective_depth(&self, user_depth: u32) -> u32 {
        self.spec.min_depth + user_depth.min(self.max_user_depth())
    }

    /// Starting heading of the turtle at the given effective depth.
    pub fn initial_heading(&self, effective_depth: u32) -> f64 {
        if self.spec.turn_by_depth {
            self.spec.initial_heading * f64::from(effective_depth)
        } else {
            self.spec.initial_heading
        }
    }
}

fn compile(curve: &str, text: &str, keys: &[char]) -> DomainResult<Vec<Symbol>> {
    let mut symbols = Vec::with_capacity(text.len());
    let mut open = 0usize;

    for c in text.chars() {
        let rule = keys.iter().position(|k| *k == c).map(RuleId);
        let symbol = match Symbol::structural(c) {
            Some(Symbol::Push) => {
                open += 1;
                Symbol::Push
            }
            Some(Symbol::Pop) => {
                if open == 0 {
                    return Err(DomainError::UnbalancedBranch {
                        curve: curve.to_string(),
                    });
                }
                open -= 1;
                Symbol::Pop
            }
            Some(symbol) => symbol,
            None if c.is_ascii_uppercase() => Symbol::Draw(rule),
            None => match rule {
                Some(id) => Symbol::NonTerminal(id),
                None => {
                    return Err(DomainError::InvalidSymbol {
                        curve: curve.to_string(),
                        symbol: c,
                    })
                }
            },
        };
        symbols.push(symbol);
    }

    if open != 0 {
        return Err(DomainError::UnbalancedBranch {
            curve: curve.to_string(),
        });
    }
    Ok(symbols)
}
