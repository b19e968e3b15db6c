//! Left/right mirroring of expression trees

use crate::data::node::{BinaryOp, Constant, Node, UnaryOp};

use super::Visitor;

/// Produces a new tree with the operands of every binary node swapped.
///
/// Functions and name tags are kept as they are, so mirroring twice gives
/// back a tree equal to the original.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mirror;

impl Mirror {
    pub fn new() -> Mirror {
        Mirror
    }
}

impl Visitor<Node> for Mirror {
    fn visit_constant(&mut self, constant: &Constant) -> Node {
        Node::Constant(*constant)
    }

    fn visit_unary(&mut self, unary: &UnaryOp) -> Node {
        Node::Unary(unary.rebuild(unary.child().accept(self)))
    }

    fn visit_binary(&mut self, binary: &BinaryOp) -> Node {
        let left = binary.right().accept(self);
        let right = binary.left().accept(self);
        Node::Binary(binary.rebuild(left, right))
    }
}
