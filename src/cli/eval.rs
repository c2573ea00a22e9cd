//! Interactive curve evaluation.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the evaluate loop provides the "fit once, probe repeatedly" UX
//!
//! Malformed input is recoverable: the loop reports it and re-prompts instead
//! of exiting.

use std::io::{self, Write};

use crate::domain::FittedCurve;
use crate::error::AppError;
use crate::models::{format_sig, predict};

/// Words that end the evaluate loop (a blank line works too).
const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// One parsed line of evaluate-loop input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalInput {
    Value(f64),
    Quit,
}

/// Parse one line of loop input: a number, a quit word, or blank.
pub fn parse_eval_line(line: &str) -> Result<EvalInput, AppError> {
    let line = line.trim();
    if line.is_empty() || QUIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w)) {
        return Ok(EvalInput::Quit);
    }
    line.parse::<f64>().map(EvalInput::Value).map_err(|_| {
        AppError::input(format!("Not a number: '{line}'. Enter a value like 2.5."))
    })
}

/// Evaluate `curve` at each of `xs`.
pub fn eval_batch(curve: &FittedCurve, xs: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .map(|&x| (x, predict(curve.kind, &curve.params, x)))
        .collect()
}

/// Print one `f(x) = y` line per evaluated point.
pub fn print_batch(pairs: &[(f64, f64)]) {
    for (x, y) in pairs {
        println!("f({}) = {}", format_sig(*x), format_sig(*y));
    }
}

/// Prompt for x values on stdin and print predictions until the user quits.
pub fn run_eval_loop(curve: &FittedCurve) -> Result<(), AppError> {
    println!(
        "Evaluate {} interactively. Enter x (blank, q, quit, or exit to stop).",
        curve.kind.display_name()
    );

    loop {
        print!("x = ");
        io::stdout()
            .flush()
            .map_err(|e| AppError::input(format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::input(format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            // EOF: finish the line the prompt started, then stop cleanly.
            println!();
            return Ok(());
        }

        match parse_eval_line(&input) {
            Ok(EvalInput::Quit) => return Ok(()),
            Ok(EvalInput::Value(x)) => {
                let y = predict(curve.kind, &curve.params, x);
                println!("f({}) = {}", format_sig(x), format_sig(y));
            }
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
    }
}
