//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the requested sheet and columns
//! - runs curve fitting (or ranking/inspection)
//! - prints and persists the summary
//! - evaluates the fitted curve at requested points

use clap::Parser;

use crate::cli::{Command, EvalArgs, FitArgs, InspectArgs, RankArgs};
use crate::domain::{FitConfig, Selector};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `tabfit` binary.
pub fn run() -> Result<(), AppError> {
    // We want `tabfit -f data.csv --xcol x --ycol y` to behave like
    // `tabfit fit ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Rank(args) => handle_rank(args),
        Command::Inspect(args) => handle_inspect(args),
        Command::Eval(args) => handle_eval(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    println!("{}", run.summary);

    crate::io::summary::write_summary(&config.save, &run.summary)?;
    println!("Saved summary to {}", config.save.display());

    if let Some(path) = &config.export_curve {
        crate::io::curve::write_curve_json(path, &run.result, &config, &run.sample)?;
        println!("Saved curve JSON to {}", path.display());
    }

    if !args.at.is_empty() {
        crate::cli::eval::print_batch(&crate::cli::eval::eval_batch(&run.result.curve, &args.at));
    }

    if args.interactive {
        crate::cli::eval::run_eval_loop(&run.result.curve)?;
    }

    Ok(())
}

fn handle_rank(args: RankArgs) -> Result<(), AppError> {
    let sample = crate::io::table::load_samples(
        &args.file,
        &Selector::parse(&args.sheet),
        &Selector::parse(&args.xcol),
        &Selector::parse(&args.ycol),
        args.dropna,
    )?;

    let ranking = crate::fit::selection::rank_models(args.degree, args.autoscale, &sample)?;
    println!("{}", crate::report::format_rank_table(&ranking));

    Ok(())
}

fn handle_inspect(args: InspectArgs) -> Result<(), AppError> {
    let sheets = crate::io::table::sheet_names(&args.file)?;
    let table = crate::io::table::load_table(&args.file, &Selector::parse(&args.sheet))?;

    println!("{}", crate::report::format_inspect(&sheets, &table));

    Ok(())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    println!(
        "Loaded {} curve: {}",
        curve.model.kind.display_name(),
        curve.equation
    );

    if !args.at.is_empty() {
        crate::cli::eval::print_batch(&crate::cli::eval::eval_batch(&curve.model, &args.at));
    }

    // With no --at, eval is interactive by default.
    if args.interactive || args.at.is_empty() {
        crate::cli::eval::run_eval_loop(&curve.model)?;
    }

    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        file: args.file.clone(),
        sheet: Selector::parse(&args.sheet),
        xcol: Selector::parse(&args.xcol),
        ycol: Selector::parse(&args.ycol),
        model: args.model,
        degree: args.degree,
        dropna: args.dropna,
        autoscale: args.autoscale,
        save: args.save.clone(),
        export_curve: args.export_curve.clone(),
    }
}

/// Rewrite argv so `tabfit` defaults to `tabfit fit`.
///
/// Rules:
/// - `tabfit`                      -> `tabfit fit`
/// - `tabfit -f data.csv ...`      -> `tabfit fit -f data.csv ...`
/// - `tabfit --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "rank" | "inspect" | "eval");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_fit() {
        assert_eq!(rewrite_args(args(&["tabfit"])), args(&["tabfit", "fit"]));
    }

    #[test]
    fn leading_flags_get_the_fit_subcommand() {
        assert_eq!(
            rewrite_args(args(&["tabfit", "-f", "data.csv"])),
            args(&["tabfit", "fit", "-f", "data.csv"])
        );
        assert_eq!(
            rewrite_args(args(&["tabfit", "--file", "data.csv", "--xcol", "x"])),
            args(&["tabfit", "fit", "--file", "data.csv", "--xcol", "x"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["tabfit", "rank", "-f", "d.csv"])),
            args(&["tabfit", "rank", "-f", "d.csv"])
        );
        assert_eq!(
            rewrite_args(args(&["tabfit", "--help"])),
            args(&["tabfit", "--help"])
        );
        assert_eq!(rewrite_args(args(&["tabfit", "-V"])), args(&["tabfit", "-V"]));
    }
}
