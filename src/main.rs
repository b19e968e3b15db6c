#![forbid(unsafe_code)]

use std::io;

use clap::Parser as ArgParser;
use colored::Colorize;
use exprtree::{
    error::ErrorHandler,
    samples::{get_sample, DEFAULT_SAMPLE, SAMPLES},
    AllEven, BinaryOperator, Evaluator, Mirror, Printer, UnaryOperator, Visitor,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Runs the standard visitors over a sample arithmetic expression tree
#[derive(ArgParser)]
#[clap(about)]
struct Args {
    /// Name of the sample tree to use
    #[clap(default_value = DEFAULT_SAMPLE)]
    sample: String,

    /// Print the available samples and exit
    #[clap(short, long)]
    list: bool,

    /// Whether to enable the debug mode
    #[clap(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    // RUST_LOG wins over the --debug flag
    let default_level = if debug { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn list_samples() {
    for sample in SAMPLES {
        println!("{:<10} {}", sample.name.bold(), sample.description);
    }

    let operators = UnaryOperator::ALL
        .iter()
        .map(|op| op.to_string())
        .chain(BinaryOperator::ALL.iter().map(|op| op.to_string()))
        .collect::<Vec<_>>();
    println!("\n{} {}", "operators:".bold(), operators.join(" "));
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if args.list {
        list_samples();
        return;
    }

    let tree = ErrorHandler::handle_result(get_sample(&args.sample));
    info!(
        sample = args.sample.as_str(),
        depth = tree.depth(),
        nodes = tree.node_count(),
        "running visitors"
    );

    let rendered = Printer::new().apply(&tree);
    let value = tree.accept(&mut Evaluator::new());
    let all_even = AllEven::new().apply(&tree);
    let mirrored = tree.accept(&mut Mirror::new());

    println!("{} {}", "tree:    ".bold(), rendered);
    println!("{} {:?}", "value:   ".bold(), value);
    println!("{} {}", "all even:".bold(), all_even);
    println!("{} {}", "mirrored:".bold(), mirrored);
}
