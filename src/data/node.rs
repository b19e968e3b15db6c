//! Expression nodes, the immutable trees every visitor walks
//!
//! A tree is built once and never changed afterwards: fields are private and
//! only readable through accessors, and every transformation produces a new
//! tree. Functions are stored as shared closures and are never evaluated at
//! construction time.

use std::{fmt, rc::Rc};

use tracing::debug;

use crate::{
    error::{ExprError, ExprResult},
    visitors::{all_even::AllEven, evaluator::Evaluator, mirror::Mirror, printer::Printer, Visitor},
};

pub type UnaryFn = Rc<dyn Fn(f64) -> f64>;
pub type BinaryFn = Rc<dyn Fn(f64, f64) -> f64>;

/// Name tags end up verbatim in the printed form, so anything that would
/// make the output ambiguous is rejected.
fn validate_name(name: &str) -> ExprResult<()> {
    let error = if name.is_empty() {
        "operator name must not be empty".to_string()
    } else if name
        .chars()
        .any(|c| c.is_whitespace() || c == '(' || c == ')')
    {
        format!(
            "operator name '{}' must not contain whitespace or parentheses",
            name
        )
    } else {
        return Ok(());
    };

    debug!(name, "rejected operator name");
    Err(ExprError::InvalidArgument(error))
}

// ========== Constant ==========

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub fn new(value: f64) -> Constant {
        Constant { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

// ========== Unary operator ==========

#[derive(Clone)]
pub struct UnaryOp {
    func: UnaryFn,
    name: String,
    child: Box<Node>,
}

impl UnaryOp {
    pub fn new(func: UnaryFn, name: &str, child: Node) -> ExprResult<UnaryOp> {
        validate_name(name)?;
        Ok(UnaryOp::named(func, name, child))
    }

    /// Skips name validation; only for tags known to be valid.
    pub(crate) fn named(func: UnaryFn, name: &str, child: Node) -> UnaryOp {
        UnaryOp {
            func,
            name: name.to_string(),
            child: Box::new(child),
        }
    }

    /// Same function and name tag over a different child.
    pub(crate) fn rebuild(&self, child: Node) -> UnaryOp {
        UnaryOp {
            func: Rc::clone(&self.func),
            name: self.name.clone(),
            child: Box::new(child),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn child(&self) -> &Node {
        &self.child
    }

    /// Applies the stored function to an already computed argument.
    pub fn call(&self, arg: f64) -> f64 {
        (self.func)(arg)
    }
}

impl PartialEq for UnaryOp {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.child == other.child
    }
}

impl fmt::Debug for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryOp")
            .field("name", &self.name)
            .field("child", &self.child)
            .finish_non_exhaustive()
    }
}

// ========== Binary operator ==========

#[derive(Clone)]
pub struct BinaryOp {
    func: BinaryFn,
    name: String,
    left: Box<Node>,
    right: Box<Node>,
}

impl BinaryOp {
    pub fn new(func: BinaryFn, name: &str, left: Node, right: Node) -> ExprResult<BinaryOp> {
        validate_name(name)?;
        Ok(BinaryOp::named(func, name, left, right))
    }

    /// Skips name validation; only for tags known to be valid.
    pub(crate) fn named(func: BinaryFn, name: &str, left: Node, right: Node) -> BinaryOp {
        BinaryOp {
            func,
            name: name.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Same function and name tag over different operands.
    pub(crate) fn rebuild(&self, left: Node, right: Node) -> BinaryOp {
        BinaryOp {
            func: Rc::clone(&self.func),
            name: self.name.clone(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn right(&self) -> &Node {
        &self.right
    }

    /// Applies the stored function to already computed operands, in order.
    pub fn call(&self, left: f64, right: f64) -> f64 {
        (self.func)(left, right)
    }
}

impl PartialEq for BinaryOp {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.left == other.left && self.right == other.right
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryOp")
            .field("name", &self.name)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

// ========== Node ==========

/// An arithmetic expression tree.
///
/// Equality is structural: variants, name tags, constant values and
/// children are compared, the stored functions never are. Two trees built
/// through different constructors but with the same shape are equal.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Constant(Constant),
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl Node {
    pub fn constant(value: f64) -> Node {
        Node::Constant(Constant::new(value))
    }

    pub fn unary<F>(func: F, name: &str, child: impl Into<Node>) -> ExprResult<Node>
    where
        F: Fn(f64) -> f64 + 'static,
    {
        UnaryOp::new(Rc::new(func), name, child.into()).map(Node::Unary)
    }

    pub fn binary<F>(
        func: F,
        name: &str,
        left: impl Into<Node>,
        right: impl Into<Node>,
    ) -> ExprResult<Node>
    where
        F: Fn(f64, f64) -> f64 + 'static,
    {
        BinaryOp::new(Rc::new(func), name, left.into(), right.into()).map(Node::Binary)
    }

    /// Rebuilds the tree using only the generic node shapes, recursively.
    pub fn to_base(&self) -> Node {
        match self {
            Node::Constant(constant) => Node::constant(constant.value()),
            Node::Unary(unary) => Node::Unary(unary.rebuild(unary.child().to_base())),
            Node::Binary(binary) => Node::Binary(
                binary.rebuild(binary.left().to_base(), binary.right().to_base()),
            ),
        }
    }

    pub fn evaluate(&self) -> f64 {
        Evaluator::new().apply(self)
    }

    pub fn all_even(&self) -> bool {
        AllEven::new().apply(self)
    }

    pub fn mirror(&self) -> Node {
        Mirror::new().apply(self)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Constant(_) => 1,
            Node::Unary(unary) => 1 + unary.child().depth(),
            Node::Binary(binary) => 1 + binary.left().depth().max(binary.right().depth()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Node::Constant(_) => 1,
            Node::Unary(unary) => 1 + unary.child().node_count(),
            Node::Binary(binary) => 1 + binary.left().node_count() + binary.right().node_count(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Printer::new().apply(self))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::constant(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::constant(value.into())
    }
}

impl From<Constant> for Node {
    fn from(constant: Constant) -> Self {
        Node::Constant(constant)
    }
}

impl From<UnaryOp> for Node {
    fn from(unary: UnaryOp) -> Self {
        Node::Unary(unary)
    }
}

impl From<BinaryOp> for Node {
    fn from(binary: BinaryOp) -> Self {
        Node::Binary(binary)
    }
}
