//! Immutable arithmetic expression trees and the visitors that walk them.
//!
//! ```
//! use exprtree::{addition, negation, Evaluator, Printer, Visitor};
//!
//! let tree = addition(negation(1), 4);
//! assert_eq!(tree.accept(&mut Evaluator::new()), 3.0);
//! assert_eq!(Printer::new().apply(&tree), "(plus (neg 1.0) 4.0)");
//! ```

#![forbid(unsafe_code)]

pub mod data;
pub mod error;
pub mod samples;
pub mod visitors;

pub use data::{
    list::List,
    node::{BinaryFn, BinaryOp, Constant, Node, UnaryFn, UnaryOp},
    operators::{
        addition, division, multiplication, negation, square, subtraction, BinaryOperator,
        UnaryOperator,
    },
};
pub use error::{ExprError, ExprResult};
pub use visitors::{
    all_even::AllEven, evaluator::Evaluator, mirror::Mirror, printer::Printer, Visitor,
};
