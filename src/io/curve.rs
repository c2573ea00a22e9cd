//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a fitted curve: model kind
//! plus parameters, source metadata, and the fit quality numbers. It is what
//! `eval` loads to evaluate a curve without refitting.
//!
//! The schema is defined by `domain::CurveFile`. R² is stored as `null` when
//! it is undefined (constant y), since JSON has no NaN.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{CurveFile, FitConfig, FitResult, SampleSet};
use crate::error::AppError;

/// Write a curve JSON file describing `result`.
pub fn write_curve_json(
    path: &Path,
    result: &FitResult,
    config: &FitConfig,
    sample: &SampleSet,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::load(format!(
            "Failed to create curve JSON '{}': {e}",
            path.display()
        ))
    })?;

    let curve = CurveFile {
        tool: "tabfit".to_string(),
        created: Utc::now(),
        source_file: config.file.display().to_string(),
        sheet: sample.sheet_name.clone(),
        x_column: sample.x_name.clone(),
        y_column: sample.y_name.clone(),
        n: sample.len(),
        model: result.curve.clone(),
        equation: result.equation.clone(),
        r2: finite_or_none(result.quality.r2),
        sse: result.quality.sse,
        rmse: result.quality.rmse,
    };

    serde_json::to_writer_pretty(file, &curve)
        .map_err(|e| AppError::load(format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::load(format!(
            "Failed to open curve JSON '{}': {e}",
            path.display()
        ))
    })?;
    let curve: CurveFile = serde_json::from_reader(file)
        .map_err(|e| AppError::load(format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}

fn finite_or_none(v: f64) -> Option<f64> {
    if v.is_finite() { Some(v) } else { None }
}
