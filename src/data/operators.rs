//! Named operators, built on top of the generic unary and binary nodes
//!
//! These are plain factories: the nodes they return are ordinary
//! [`Node::Unary`] and [`Node::Binary`] values, indistinguishable from ones
//! built by hand with the same function and name tag.

use std::{fmt::Display, rc::Rc};

use super::node::{BinaryFn, BinaryOp, Node, UnaryFn, UnaryOp};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UnaryOperator {
    Negation,
    Square,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 2] = [UnaryOperator::Negation, UnaryOperator::Square];

    pub fn name(self) -> &'static str {
        match self {
            UnaryOperator::Negation => "neg",
            UnaryOperator::Square => "sqr",
        }
    }

    pub fn function(self) -> fn(f64) -> f64 {
        match self {
            UnaryOperator::Negation => |x| -x,
            UnaryOperator::Square => |x| x * x,
        }
    }

    pub fn build(self, child: impl Into<Node>) -> Node {
        let func: UnaryFn = Rc::new(self.function());
        Node::Unary(UnaryOp::named(func, self.name(), child.into()))
    }
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 4] = [
        BinaryOperator::Addition,
        BinaryOperator::Subtraction,
        BinaryOperator::Multiplication,
        BinaryOperator::Division,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BinaryOperator::Addition => "plus",
            BinaryOperator::Subtraction => "minus",
            BinaryOperator::Multiplication => "mul",
            BinaryOperator::Division => "div",
        }
    }

    pub fn function(self) -> fn(f64, f64) -> f64 {
        match self {
            BinaryOperator::Addition => |l, r| l + r,
            BinaryOperator::Subtraction => |l, r| l - r,
            BinaryOperator::Multiplication => |l, r| l * r,
            BinaryOperator::Division => |l, r| l / r,
        }
    }

    pub fn build(self, left: impl Into<Node>, right: impl Into<Node>) -> Node {
        let func: BinaryFn = Rc::new(self.function());
        Node::Binary(BinaryOp::named(
            func,
            self.name(),
            left.into(),
            right.into(),
        ))
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ========== Factories ==========

pub fn negation(child: impl Into<Node>) -> Node {
    UnaryOperator::Negation.build(child)
}

pub fn square(child: impl Into<Node>) -> Node {
    UnaryOperator::Square.build(child)
}

pub fn addition(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    BinaryOperator::Addition.build(left, right)
}

pub fn subtraction(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    BinaryOperator::Subtraction.build(left, right)
}

pub fn multiplication(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    BinaryOperator::Multiplication.build(left, right)
}

pub fn division(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    BinaryOperator::Division.build(left, right)
}
