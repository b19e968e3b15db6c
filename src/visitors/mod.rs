//! Double dispatch over expression trees
//!
//! A node hands itself to the one handler matching its variant. Handlers
//! never recurse on their own: each visitor calls `accept` on the children
//! it needs, in the order it needs them.

pub mod all_even;
pub mod evaluator;
pub mod mirror;
pub mod printer;
mod tests;

use tracing::trace;

use crate::data::node::*;

pub trait Visitor<T> {
    fn visit_constant(&mut self, constant: &Constant) -> T;
    fn visit_unary(&mut self, unary: &UnaryOp) -> T;
    fn visit_binary(&mut self, binary: &BinaryOp) -> T;

    /// Same as `node.accept(self)`.
    fn apply(&mut self, node: &Node) -> T {
        node.accept(self)
    }
}

impl Node {
    pub fn accept<T, V>(&self, visitor: &mut V) -> T
    where
        V: Visitor<T> + ?Sized,
    {
        match self {
            Node::Constant(constant) => {
                trace!(value = constant.value(), "visiting constant");
                visitor.visit_constant(constant)
            }
            Node::Unary(unary) => {
                trace!(name = unary.name(), "visiting unary operator");
                visitor.visit_unary(unary)
            }
            Node::Binary(binary) => {
                trace!(name = binary.name(), "visiting binary operator");
                visitor.visit_binary(binary)
            }
        }
    }
}
