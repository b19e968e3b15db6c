//! Ready-made expression trees, looked up by name from the command line

use crate::{
    data::{node::Node, operators::*},
    error::{ExprError, ExprResult},
};

pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Node,
}

impl Sample {
    pub fn build(&self) -> Node {
        (self.build)()
    }
}

pub const DEFAULT_SAMPLE: &str = "nested";

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "constant",
        description: "a single constant",
        build: || Node::constant(2.0),
    },
    Sample {
        name: "negation",
        description: "negation of a constant",
        build: || negation(2),
    },
    Sample {
        name: "square",
        description: "square of a constant",
        build: || square(2),
    },
    Sample {
        name: "sum",
        description: "sum of an odd and an even constant",
        build: || addition(1, 2),
    },
    Sample {
        name: "even-sum",
        description: "sum of two even constants",
        build: || addition(24, 136),
    },
    Sample {
        name: "half",
        description: "division producing a fraction",
        build: || division(1, 2),
    },
    Sample {
        name: "squares",
        description: "nested squares of a product",
        build: || square(multiplication(square(10), square(63))),
    },
    Sample {
        name: "nested",
        description: "every binary operator, nested several levels deep",
        build: || {
            multiplication(
                multiplication(2, subtraction(2, 5)),
                addition(negation(1), division(addition(2, 3), 5)),
            )
        },
    },
    Sample {
        name: "div-zero",
        description: "division by zero, yielding infinity",
        build: || division(1, 0),
    },
];

pub fn get_sample(name: &str) -> ExprResult<Node> {
    SAMPLES
        .iter()
        .find(|sample| sample.name == name)
        .map(Sample::build)
        .ok_or_else(|| ExprError::UnknownSample(name.to_string()))
}
