use exprtree::{
    addition, division, multiplication, negation, samples, square, subtraction, AllEven,
    Evaluator, ExprError, Mirror, Node, Printer, Visitor,
};
use pretty_assertions::assert_eq;

#[test]
fn test_all_visitors_over_one_tree() {
    let tree = square(multiplication(square(10), square(63)));

    assert_eq!(tree.evaluate(), 157529610000.0);
    assert_eq!(
        Printer::new().apply(&tree),
        "(sqr (mul (sqr 10.0) (sqr 63.0)))"
    );
    assert!(!AllEven::new().apply(&tree));
    assert_eq!(tree.accept(&mut Mirror::new()), square(multiplication(square(63), square(10))));
    assert_eq!(tree.accept(&mut Evaluator::new()), tree.mirror().evaluate());
}

#[test]
fn test_literals_and_subtrees_mix() {
    assert_eq!(addition(1, negation(2)).to_string(), "(plus 1.0 (neg 2.0))");
    assert_eq!(addition(negation(2), 1.5).to_string(), "(plus (neg 2.0) 1.5)");
    assert_eq!(subtraction(3, 1).evaluate(), 2.0);
    assert_eq!(division(square(3), 3.0).evaluate(), 3.0);
}

#[test]
fn test_generic_and_named_construction_agree() {
    let named = subtraction(square(4), 1);
    let generic = Node::binary(
        |l, r| l - r,
        "minus",
        Node::unary(|x| x * x, "sqr", 4).unwrap(),
        1,
    )
    .unwrap();

    assert_eq!(named, generic);
    assert_eq!(named.to_base(), generic.to_base());
    assert_eq!(named.evaluate(), generic.evaluate());
}

#[test]
fn test_malformed_construction_fails_early() {
    let result = Node::binary(|l, r| l + r, "  ", 1, 2);
    assert!(matches!(result, Err(ExprError::InvalidArgument(_))));
}

#[test]
fn test_every_sample_renders_and_mirrors() {
    for sample in samples::SAMPLES {
        let tree = samples::get_sample(sample.name).unwrap();
        assert!(!tree.to_string().is_empty());
        assert_eq!(tree.mirror().mirror(), tree);
        assert_eq!(tree.mirror().node_count(), tree.node_count());
    }
}
