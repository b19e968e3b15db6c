//! Evenness check over every constant of a tree

use crate::data::node::{BinaryOp, Constant, UnaryOp};

use super::Visitor;

/// Whether every constant in the tree is even.
///
/// A constant counts as even when `value % 2.0 == 0.0`; fractions, NaN and
/// infinities never do.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllEven;

impl AllEven {
    pub fn new() -> AllEven {
        AllEven
    }
}

impl Visitor<bool> for AllEven {
    fn visit_constant(&mut self, constant: &Constant) -> bool {
        constant.value() % 2.0 == 0.0
    }

    fn visit_unary(&mut self, unary: &UnaryOp) -> bool {
        unary.child().accept(self)
    }

    fn visit_binary(&mut self, binary: &BinaryOp) -> bool {
        binary.left().accept(self) && binary.right().accept(self)
    }
}
