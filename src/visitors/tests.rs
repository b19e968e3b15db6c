#![cfg(test)]

use pretty_assertions::assert_eq;

use crate::{
    data::{node::*, operators::*},
    samples::SAMPLES,
};

use super::{all_even::AllEven, evaluator::Evaluator, mirror::Mirror, printer::Printer, Visitor};

macro_rules! visitor_test {
    ($name:ident, $visitor:expr, $tree:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let tree = $tree;
            assert_eq!(tree.accept(&mut $visitor), $expected);
            assert_eq!($visitor.apply(&tree), $expected);
        }
    };
}

fn nested() -> Node {
    multiplication(
        multiplication(2, subtraction(2, 5)),
        addition(negation(1), division(addition(2, 3), 5)),
    )
}

// ========== Evaluator ==========

visitor_test!(test_evaluate_constant, Evaluator::new(), Node::constant(2.0), 2.0);
visitor_test!(test_evaluate_negation, Evaluator::new(), negation(2), -2.0);
visitor_test!(test_evaluate_square, Evaluator::new(), square(2), 4.0);
visitor_test!(test_evaluate_addition, Evaluator::new(), addition(1, 2), 3.0);
visitor_test!(test_evaluate_division, Evaluator::new(), division(1, 2), 0.5);
visitor_test!(
    test_evaluate_operand_order,
    Evaluator::new(),
    subtraction(2, 5),
    -3.0
);
visitor_test!(
    test_evaluate_nested_squares,
    Evaluator::new(),
    square(multiplication(square(10), square(63))),
    157529610000.0
);
// (2 * (2 - 5)) * (-1 + (2 + 3) / 5)
visitor_test!(test_evaluate_nested, Evaluator::new(), nested(), 0.0);
visitor_test!(
    test_evaluate_custom_operator,
    Evaluator::new(),
    Node::binary(f64::powf, "pow", 2, Node::unary(f64::abs, "abs", -3).unwrap()).unwrap(),
    8.0
);

#[test]
fn test_evaluate_division_by_zero() {
    assert_eq!(division(1, 0).evaluate(), f64::INFINITY);
    assert_eq!(division(negation(1), 0).evaluate(), f64::NEG_INFINITY);
    assert!(division(0, 0).evaluate().is_nan());
    assert!(addition(division(0, 0), 1).evaluate().is_nan());
}

// ========== Printer ==========

visitor_test!(
    test_print_addition,
    Printer::new(),
    addition(1, 2),
    "(plus 1.0 2.0)"
);
visitor_test!(test_print_negation, Printer::new(), negation(2), "(neg 2.0)");
visitor_test!(test_print_fraction, Printer::new(), Node::constant(0.25), "0.25");
visitor_test!(test_print_huge, Printer::new(), Node::constant(1e20), "1.0e20");
visitor_test!(test_print_tiny, Printer::new(), Node::constant(1e-7), "1.0e-7");
visitor_test!(
    test_print_exponent_with_fraction,
    Printer::new(),
    Node::constant(-2.5e-7),
    "-2.5e-7"
);
visitor_test!(
    test_print_large_operands,
    Printer::new(),
    addition(1e16, 1e20),
    "(plus 1.0e16 1.0e20)"
);
visitor_test!(
    test_print_nested,
    Printer::new(),
    nested(),
    "(mul (mul 2.0 (minus 2.0 5.0)) (plus (neg 1.0) (div (plus 2.0 3.0) 5.0)))"
);
visitor_test!(
    test_print_custom_name,
    Printer::new(),
    Node::unary(f64::sqrt, "sqrt", 16).unwrap(),
    "(sqrt 16.0)"
);

#[test]
fn test_print_non_finite() {
    let evaluated = |tree: Node| Node::constant(tree.evaluate()).to_string();
    assert_eq!(evaluated(division(1, 0)), "inf");
    assert_eq!(evaluated(division(negation(1), 0)), "-inf");
    assert_eq!(evaluated(division(0, 0)), "NaN");
}

#[test]
fn test_display_matches_printer() {
    let tree = nested();
    assert_eq!(tree.to_string(), Printer::new().apply(&tree));
}

// ========== AllEven ==========

visitor_test!(test_all_even_sum, AllEven::new(), addition(24, 136), true);
visitor_test!(test_all_even_odd_sum, AllEven::new(), addition(1, 2), false);
visitor_test!(test_all_even_half, AllEven::new(), division(1, 2), false);
visitor_test!(test_all_even_one, AllEven::new(), division(2, 2), true);
visitor_test!(test_all_even_unary, AllEven::new(), negation(square(4)), true);
visitor_test!(test_all_even_negative, AllEven::new(), Node::constant(-4.0), true);
visitor_test!(test_all_even_zero, AllEven::new(), Node::constant(0.0), true);
visitor_test!(test_all_even_fraction, AllEven::new(), Node::constant(2.5), false);
visitor_test!(test_all_even_nan, AllEven::new(), Node::constant(f64::NAN), false);
visitor_test!(
    test_all_even_infinity,
    AllEven::new(),
    Node::constant(f64::INFINITY),
    false
);
visitor_test!(
    test_all_even_deep_odd,
    AllEven::new(),
    multiplication(2, addition(4, negation(3))),
    false
);

// ========== Mirror ==========

visitor_test!(test_mirror_addition, Mirror::new(), addition(1, 2), addition(2, 1));
visitor_test!(test_mirror_constant, Mirror::new(), Node::constant(7.0), Node::constant(7.0));
visitor_test!(
    test_mirror_every_level,
    Mirror::new(),
    subtraction(division(1, 2), multiplication(3, negation(subtraction(4, 5)))),
    subtraction(multiplication(negation(subtraction(5, 4)), 3), division(2, 1))
);

#[test]
fn test_mirror_keeps_functions() {
    let mirrored = subtraction(10, 4).mirror();
    assert_eq!(mirrored.evaluate(), -6.0);
    assert_eq!(mirrored.to_string(), "(minus 4.0 10.0)");
}

#[test]
fn test_mirror_involution() {
    for sample in SAMPLES {
        let tree = sample.build();
        assert_eq!(tree.mirror().mirror(), tree, "sample {}", sample.name);
    }

    let custom = Node::binary(f64::max, "max", negation(1), square(3)).unwrap();
    assert_eq!(Mirror::new().apply(&custom.mirror()), custom);
}

#[test]
fn test_mirror_leaves_input_untouched() {
    let tree = nested();
    let before = tree.to_string();
    let _ = tree.mirror();
    assert_eq!(tree.to_string(), before);
}

// ========== Protocol ==========

#[test]
fn test_dispatch_symmetry() {
    for sample in SAMPLES {
        let tree = sample.build();

        let value = tree.accept(&mut Evaluator::new());
        let applied = Evaluator::new().apply(&tree);
        assert!(value == applied || value.is_nan() && applied.is_nan());

        assert_eq!(tree.accept(&mut Printer::new()), Printer::new().apply(&tree));
        assert_eq!(tree.accept(&mut AllEven::new()), AllEven::new().apply(&tree));
        assert_eq!(tree.accept(&mut Mirror::new()), Mirror::new().apply(&tree));
    }
}

/// Records constants in the order a visitor chooses to reach them.
#[derive(Default)]
struct ConstantCollector {
    values: Vec<f64>,
}

impl Visitor<()> for ConstantCollector {
    fn visit_constant(&mut self, constant: &Constant) {
        self.values.push(constant.value());
    }

    fn visit_unary(&mut self, unary: &UnaryOp) {
        unary.child().accept(self)
    }

    fn visit_binary(&mut self, binary: &BinaryOp) {
        binary.left().accept(self);
        binary.right().accept(self);
    }
}

#[test]
fn test_stateful_visitor() {
    let mut collector = ConstantCollector::default();
    collector.apply(&nested());
    assert_eq!(collector.values, vec![2.0, 2.0, 5.0, 1.0, 2.0, 3.0, 5.0]);

    let mut mirrored = ConstantCollector::default();
    nested().mirror().accept(&mut mirrored);
    assert_eq!(
        mirrored.values,
        collector.values.iter().rev().copied().collect::<Vec<_>>()
    );
}

#[test]
fn test_visitor_as_trait_object() {
    let tree = addition(1, 2);
    let mut visitor: Box<dyn Visitor<String>> = Box::new(Printer::new());
    assert_eq!(tree.accept(visitor.as_mut()), "(plus 1.0 2.0)");
    assert_eq!(visitor.apply(&tree), "(plus 1.0 2.0)");
}
