//! Numeric evaluation of expression trees

use crate::data::node::{BinaryOp, Constant, UnaryOp};

use super::Visitor;

/// Folds a tree into its value.
///
/// Arithmetic follows IEEE 754: dividing by zero yields an infinity or NaN,
/// which then flows through the rest of the tree like any other value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator
    }
}

impl Visitor<f64> for Evaluator {
    fn visit_constant(&mut self, constant: &Constant) -> f64 {
        constant.value()
    }

    fn visit_unary(&mut self, unary: &UnaryOp) -> f64 {
        let arg = unary.child().accept(self);
        unary.call(arg)
    }

    fn visit_binary(&mut self, binary: &BinaryOp) -> f64 {
        let left = binary.left().accept(self);
        let right = binary.right().accept(self);
        binary.call(left, right)
    }
}
