//! Turtle interpreter: turns the symbol stream into path primitives.

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::expander::SymbolSink;
use crate::domain::grammar::{CurveDefinition, Symbol};
use crate::domain::path::{PathBuilder, Point};
use crate::domain::viewport::Bounds;

/// Approximate extent of every rendered curve, independent of depth.
pub const STEP_FACTOR: f64 = 600.0;

/// Position and heading of the turtle. Copied by value onto the branch stack.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TurtleState {
    pub position: Point,
    /// Radians, standard position
    pub heading: f64,
    /// Displacement of one forward step
    pub velocity: Point,
}

/// Stateful interpreter for one traversal.
#[derive(Debug)]
pub struct Turtle<'a> {
    definition: &'a CurveDefinition,
    step: f64,
    state: TurtleState,
    stack: Vec<TurtleState>,
    path: PathBuilder,
    bounds: Bounds,
}

impl<'a> Turtle<'a> {
    /// Turtle at the origin, oriented and scaled for `effective_depth`.
    pub fn new(definition: &'a CurveDefinition, effective_depth: u32) -> Self {
        let exponent = -f64::from(effective_depth);
        let mut turtle = Self {
            definition,
            step: STEP_FACTOR * definition.growth_base().powf(exponent),
            state: TurtleState::default(),
            stack: Vec::new(),
            path: PathBuilder::new(),
            bounds: Bounds::default(),
        };
        turtle.rotate(definition.initial_heading(effective_depth));
        turtle
    }

    pub fn state(&self) -> TurtleState {
        self.state
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn path(&self) -> &PathBuilder {
        &self.path
    }

    /// Consume the turtle, keeping only the path and extents.
    pub fn finish(self) -> (PathBuilder, Bounds) {
        (self.path, self.bounds)
    }

    fn rotate(&mut self, delta: f64) {
        self.state.heading += delta;
        self.state.velocity = Point::new(
            self.step * self.state.heading.cos(),
            self.step * self.state.heading.sin(),
        );
    }

    fn advance(&mut self) {
        self.state.position.x += self.state.velocity.x;
        // y grows downward in output space
        self.state.position.y -= self.state.velocity.y;
        let p = self.track();
        self.path.line_to(p);
    }

    /// Current position as emitted, recorded in the bounds. The turtle itself
    /// keeps full precision.
    fn track(&mut self) -> Point {
        let p = self.state.position.rounded();
        self.bounds.include(p);
        p
    }

    fn restore(&mut self) -> DomainResult<()> {
        self.state = self
            .stack
            .pop()
            .ok_or_else(|| DomainError::UnbalancedBranch {
                curve: self.definition.name().to_string(),
            })?;
        let p = self.track();
        self.path.move_to(p);
        Ok(())
    }
}

impl SymbolSink for Turtle<'_> {
    fn execute(&mut self, symbol: Symbol) -> DomainResult<()> {
        match symbol {
            Symbol::Draw(_) => self.advance(),
            Symbol::TurnLeft => self.rotate(self.definition.angle()),
            Symbol::TurnRight => self.rotate(-self.definition.angle()),
            Symbol::Push => self.stack.push(self.state),
            Symbol::Pop => self.restore()?,
            Symbol::NonTerminal(_) => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grammar::CurveSpec;
    use crate::domain::path::PathCommand;
    use std::f64::consts::FRAC_PI_2;

    fn square() -> CurveDefinition {
        CurveDefinition::new(CurveSpec {
            name: "square".into(),
            axiom: "F".into(),
            rules: vec![],
            angle: FRAC_PI_2,
            initial_heading: 0.0,
            turn_by_depth: false,
            growth_base: 2.0,
            min_depth: 0,
            max_depth: 3,
        })
        .unwrap()
    }

    #[test]
    fn given_depth_when_creating_then_step_shrinks_geometrically() {
        let def = square();
        assert_eq!(Turtle::new(&def, 0).step(), STEP_FACTOR);
        assert_eq!(Turtle::new(&def, 2).step(), STEP_FACTOR / 4.0);
    }

    #[test]
    fn given_draw_when_executing_then_advances_and_emits_line() {
        let def = square();
        let mut t = Turtle::new(&def, 0);
        t.execute(Symbol::Draw(None)).unwrap();
        assert_eq!(t.state().position, Point::new(600.0, 0.0));
        assert_eq!(
            t.path().commands(),
            &[
                PathCommand::MoveTo(Point::ORIGIN),
                PathCommand::LineTo(Point::new(600.0, 0.0))
            ]
        );
    }

    #[test]
    fn given_left_turn_when_drawing_then_moves_up_in_output_space() {
        let def = square();
        let mut t = Turtle::new(&def, 0);
        t.execute(Symbol::TurnLeft).unwrap();
        t.execute(Symbol::Draw(None)).unwrap();
        let p = t.state().position;
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 600.0).abs() < 1e-9);
        let (_, bounds) = t.finish();
        assert!((bounds.min_y + 600.0).abs() < 1e-9);
        assert_eq!(bounds.max_y, 0.0);
    }

    #[test]
    fn given_push_then_pop_when_executing_then_restores_exactly() {
        let def = square();
        let mut t = Turtle::new(&def, 1);
        t.execute(Symbol::TurnRight).unwrap();
        t.execute(Symbol::Draw(None)).unwrap();
        let before = t.state();

        t.execute(Symbol::Push).unwrap();
        assert_eq!(t.stack_depth(), 1);
        t.execute(Symbol::TurnLeft).unwrap();
        t.execute(Symbol::TurnLeft).unwrap();
        t.execute(Symbol::Pop).unwrap();

        assert_eq!(t.state(), before);
        assert_eq!(t.stack_depth(), 0);
    }

    #[test]
    fn given_branch_when_popping_then_emits_move_to_restored_point() {
        let def = square();
        let mut t = Turtle::new(&def, 0);
        t.execute(Symbol::Push).unwrap();
        t.execute(Symbol::Draw(None)).unwrap();
        t.execute(Symbol::Pop).unwrap();
        assert_eq!(t.state().position, Point::ORIGIN);
        assert_eq!(
            t.path().commands().last(),
            Some(&PathCommand::MoveTo(Point::ORIGIN))
        );
    }

    #[test]
    fn given_unrounded_position_when_advancing_then_bounds_match_emitted_point() {
        let def = square();
        let mut t = Turtle::new(&def, 0);
        t.rotate(1.0);
        t.execute(Symbol::Draw(None)).unwrap();
        let emitted = t.path().commands()[1].point();
        assert_ne!(emitted, t.state().position);

        let (_, bounds) = t.finish();
        assert_eq!(bounds.max_x, emitted.x);
        assert_eq!(bounds.min_y, emitted.y);
    }

    #[test]
    fn given_empty_stack_when_popping_then_unbalanced_branch() {
        let def = square();
        let mut t = Turtle::new(&def, 0);
        let err = t.execute(Symbol::Pop).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnbalancedBranch {
                curve: "square".into()
            }
        );
    }
}
