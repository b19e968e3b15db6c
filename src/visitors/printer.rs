//! S-expression rendering

use crate::data::node::{BinaryOp, Constant, UnaryOp};

use super::Visitor;

/// Renders a tree as `(name child)` / `(name left right)`, with constants
/// in their round-trip form (`2.0`, `0.5`, `1.0e20`, `NaN`, `inf`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Printer {
        Printer
    }
}

/// Shortest round-trip form, with a decimal point on every finite value,
/// including ones printed in exponent notation (`1e-7` becomes `1.0e-7`).
fn format_value(value: f64) -> String {
    let rendered = format!("{:?}", value);
    if !value.is_finite() || rendered.contains('.') {
        return rendered;
    }

    match rendered.find('e') {
        Some(exponent) => format!("{}.0{}", &rendered[..exponent], &rendered[exponent..]),
        None => format!("{}.0", rendered),
    }
}

impl Visitor<String> for Printer {
    fn visit_constant(&mut self, constant: &Constant) -> String {
        format_value(constant.value())
    }

    fn visit_unary(&mut self, unary: &UnaryOp) -> String {
        format!("({} {})", unary.name(), unary.child().accept(self))
    }

    fn visit_binary(&mut self, binary: &BinaryOp) -> String {
        let left = binary.left().accept(self);
        let right = binary.right().accept(self);
        format!("({} {} {})", binary.name(), left, right)
    }
}
