use std::{fs, process};

use clap::Parser;
use foldcalc::interpreter::{
    evaluator::{core::Calculator, trace::Trace},
    variables::Binding,
};

/// foldcalc evaluates arithmetic expressions with `+ - * / %`, parentheses
/// and single-letter variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells foldcalc to read expressions from a file, one per line, instead
    /// of evaluating the argument.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable before evaluating, as `name=value`. May be repeated.
    #[arg(short, long = "define", value_name = "NAME=VALUE")]
    define: Vec<Binding>,

    /// Prints the token sequence after each reduction pass to stderr.
    #[arg(short, long)]
    trace: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let mut calculator = Calculator::new();
    for binding in &args.define {
        calculator.set_variable(binding.name, binding.value);
    }

    let expressions: Vec<String> = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        });
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'))
              .map(ToString::to_string)
              .collect()
    } else {
        vec![args.contents]
    };

    let mut failed = false;
    let mut trace = Trace::new();
    for expression in &expressions {
        trace.clear();
        let result = calculator.calculate_traced(expression, &mut trace);

        if args.trace && !trace.is_empty() {
            eprint!("{trace}");
        }

        match result {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed {
        process::exit(1);
    }
}
