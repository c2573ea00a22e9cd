//! Command-line parsing for the spreadsheet curve fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ModelKind;

pub mod eval;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tabfit", version, about = "Least-squares curve fitting for spreadsheet data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit one model to two columns, print the summary, and save it.
    Fit(FitArgs),
    /// Fit every applicable model and compare them by BIC.
    Rank(RankArgs),
    /// List the sheets and columns of a file without fitting.
    Inspect(InspectArgs),
    /// Evaluate a saved curve JSON at given points or interactively.
    Eval(EvalArgs),
}

/// Options for fitting a single model.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Input file (.csv, .xlsx, .xlsm, .xlsb, .xls, or .ods).
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Sheet to read: a name or a 0-based index.
    #[arg(long, default_value = "0")]
    pub sheet: String,

    /// X column: a header name or a 0-based index.
    #[arg(long)]
    pub xcol: String,

    /// Y column: a header name or a 0-based index.
    #[arg(long)]
    pub ycol: String,

    /// Model family to fit.
    #[arg(long, value_enum, default_value_t = ModelKind::Poly)]
    pub model: ModelKind,

    /// Polynomial degree (poly only).
    #[arg(long, default_value_t = 2)]
    pub degree: usize,

    /// Drop rows with missing or non-numeric cells before fitting.
    #[arg(long)]
    pub dropna: bool,

    /// Rescale x and y to [0, 1] before a polynomial fit.
    #[arg(long)]
    pub autoscale: bool,

    /// Evaluate the fitted curve interactively after the summary.
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Where to save the plain-text summary.
    #[arg(long, default_value = "fit_result.txt")]
    pub save: PathBuf,

    /// Evaluate the fitted curve at these x values.
    #[arg(long, value_delimiter = ',', value_name = "X,...")]
    pub at: Vec<f64>,

    /// Export the fitted curve (model + params + quality) to JSON.
    #[arg(long = "export-curve", value_name = "JSON")]
    pub export_curve: Option<PathBuf>,
}

/// Options for comparing model families.
#[derive(Debug, Parser, Clone)]
pub struct RankArgs {
    /// Input file (.csv, .xlsx, .xlsm, .xlsb, .xls, or .ods).
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Sheet to read: a name or a 0-based index.
    #[arg(long, default_value = "0")]
    pub sheet: String,

    /// X column: a header name or a 0-based index.
    #[arg(long)]
    pub xcol: String,

    /// Y column: a header name or a 0-based index.
    #[arg(long)]
    pub ycol: String,

    /// Polynomial degree for the poly candidate.
    #[arg(long, default_value_t = 2)]
    pub degree: usize,

    /// Drop rows with missing or non-numeric cells before fitting.
    #[arg(long)]
    pub dropna: bool,

    /// Rescale x and y to [0, 1] before the polynomial fit.
    #[arg(long)]
    pub autoscale: bool,
}

/// Options for listing file structure.
#[derive(Debug, Parser)]
pub struct InspectArgs {
    /// Input file (.csv, .xlsx, .xlsm, .xlsb, .xls, or .ods).
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Sheet whose columns to list: a name or a 0-based index.
    #[arg(long, default_value = "0")]
    pub sheet: String,
}

/// Options for evaluating a saved curve.
#[derive(Debug, Parser)]
pub struct EvalArgs {
    /// Curve JSON file produced by `tabfit fit --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Evaluate the curve at these x values.
    #[arg(long, value_delimiter = ',', value_name = "X,...")]
    pub at: Vec<f64>,

    /// Start the interactive evaluate loop (default when --at is absent).
    #[arg(short = 'i', long)]
    pub interactive: bool,
}
