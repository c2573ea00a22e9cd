//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON
//! - reloaded later for evaluation without refitting

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Curve families the fitter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// `y = c_d·x^d + ... + c_1·x + c_0`
    Poly,
    /// `y = a · exp(b·x)` (requires all y > 0)
    Exp,
    /// `y = a · x^b` (requires all x > 0 and y > 0)
    Power,
    /// `y = a + b · ln(x)` (requires all x > 0)
    Log,
}

impl ModelKind {
    /// Label used in terminal output and error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Poly => "poly",
            ModelKind::Exp => "exp",
            ModelKind::Power => "power",
            ModelKind::Log => "log",
        }
    }

    /// Number of fitted parameters (`degree` only matters for `Poly`).
    pub fn param_count(self, degree: usize) -> usize {
        match self {
            ModelKind::Poly => degree + 1,
            ModelKind::Exp | ModelKind::Power | ModelKind::Log => 2,
        }
    }
}

/// A sheet or column specifier.
///
/// A string composed entirely of ASCII digits is a 0-based positional index;
/// anything else is a literal name. This is the one place where stringly-typed
/// input is interpreted; everything downstream works with the resolved form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Index(usize),
    Name(String),
}

impl Selector {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(idx) = trimmed.parse::<usize>() {
                return Selector::Index(idx);
            }
        }
        Selector::Name(trimmed.to_string())
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Index(idx) => write!(f, "#{idx}"),
            Selector::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// The (x, y) observations extracted from one sheet.
///
/// Invariant: `x.len() == y.len() >= 1`. Missing cells surface as NaN unless
/// the loader dropped their rows.
#[derive(Debug, Clone)]
pub struct SampleSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Resolved sheet and header names (for reporting).
    pub sheet_name: String,
    pub x_name: String,
    pub y_name: String,
    /// Rows read from the sheet, excluding the header.
    pub rows_read: usize,
    /// Rows removed because x or y was missing (only non-zero with dropna).
    pub rows_dropped: usize,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub file: PathBuf,
    pub sheet: Selector,
    pub xcol: Selector,
    pub ycol: Selector,
    pub model: ModelKind,
    /// Polynomial degree; ignored by the other families.
    pub degree: usize,
    pub dropna: bool,
    pub autoscale: bool,
    pub save: PathBuf,
    pub export_curve: Option<PathBuf>,
}

/// Fitted model parameters.
///
/// For `Poly` the parameters are coefficients in descending power order
/// (`degree + 1` of them); for the other families they are `[a, b]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedCurve {
    pub kind: ModelKind,
    pub params: Vec<f64>,
}

impl FittedCurve {
    /// Polynomial degree implied by the parameter count (poly only).
    pub fn degree(&self) -> Option<usize> {
        match self.kind {
            ModelKind::Poly => Some(self.params.len().saturating_sub(1)),
            _ => None,
        }
    }
}

/// Fit quality diagnostics.
///
/// `r2` is NaN when the total variance of y is zero; reporting renders that
/// as "undefined" rather than failing the run.
#[derive(Debug, Clone)]
pub struct FitQuality {
    pub r2: f64,
    pub sse: f64,
    pub rmse: f64,
    pub n: usize,
}

/// Fit output for a single model.
#[derive(Debug, Clone)]
pub struct FitResult {
    pub curve: FittedCurve,
    pub equation: String,
    pub quality: FitQuality,
}

/// A saved curve file (JSON).
///
/// `r2` is `None` when the statistic is undefined, since JSON cannot carry NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub created: DateTime<Utc>,
    pub source_file: String,
    pub sheet: String,
    pub x_column: String,
    pub y_column: String,
    pub n: usize,
    pub model: FittedCurve,
    pub equation: String,
    pub r2: Option<f64>,
    pub sse: f64,
    pub rmse: f64,
}
