//! Low-level fitting routines for a single model kind.
//!
//! All four families reduce to ordinary least squares:
//! - poly: direct OLS on the Vandermonde design matrix
//! - exp / power / log: OLS on log-transformed axes, with the line mapped
//!   back to the closed form afterwards
//!
//! Domain preconditions are checked before any solve, so violations surface
//! as data errors rather than numerical ones.

use log::{debug, warn};

use crate::domain::{FitConfig, FitQuality, FitResult, FittedCurve, ModelKind, SampleSet};
use crate::error::AppError;
use crate::fit::scale::{rescale_poly_coeffs, scale_to_unit};
use crate::math::{polyfit, r_squared, sse};
use crate::models::{check_domain, predict, render_equation};

/// Fit the configured model to the sample.
pub fn fit_curve(config: &FitConfig, sample: &SampleSet) -> Result<FitResult, AppError> {
    fit_model(config.model, config.degree, config.autoscale, sample)
}

/// Fit a single model kind.
pub fn fit_model(
    kind: ModelKind,
    degree: usize,
    autoscale: bool,
    sample: &SampleSet,
) -> Result<FitResult, AppError> {
    if sample.is_empty() {
        return Err(AppError::data("No data points to fit."));
    }

    let k = kind.param_count(degree);
    if sample.len() < k {
        return Err(AppError::data(format!(
            "Not enough rows to fit {}: need at least {k}, got {}.",
            kind.display_name(),
            sample.len()
        )));
    }

    check_domain(kind, &sample.x, &sample.y).map_err(AppError::domain)?;

    if autoscale && kind != ModelKind::Poly {
        warn!(
            "--autoscale only affects poly fits; ignoring for {}",
            kind.display_name()
        );
    }

    let params = match kind {
        ModelKind::Poly => fit_poly(&sample.x, &sample.y, degree, autoscale)?,
        ModelKind::Exp => {
            // ln(y) = ln(a) + b·x
            let ln_y: Vec<f64> = sample.y.iter().map(|v| v.ln()).collect();
            let line = fit_line(&sample.x, &ln_y, kind)?;
            vec![line.intercept.exp(), line.slope]
        }
        ModelKind::Power => {
            // ln(y) = ln(a) + b·ln(x)
            let ln_x: Vec<f64> = sample.x.iter().map(|v| v.ln()).collect();
            let ln_y: Vec<f64> = sample.y.iter().map(|v| v.ln()).collect();
            let line = fit_line(&ln_x, &ln_y, kind)?;
            vec![line.intercept.exp(), line.slope]
        }
        ModelKind::Log => {
            // y = a + b·ln(x); no back-transform needed.
            let ln_x: Vec<f64> = sample.x.iter().map(|v| v.ln()).collect();
            let line = fit_line(&ln_x, &sample.y, kind)?;
            vec![line.intercept, line.slope]
        }
    };

    let y_hat: Vec<f64> = sample
        .x
        .iter()
        .map(|&xv| predict(kind, &params, xv))
        .collect();

    if params.iter().any(|v| !v.is_finite()) || y_hat.iter().any(|v| !v.is_finite()) {
        return Err(solve_failed(kind));
    }

    let n = sample.len();
    let sse_v = sse(&sample.y, &y_hat);
    let quality = FitQuality {
        r2: r_squared(&sample.y, &y_hat),
        sse: sse_v,
        rmse: (sse_v / n as f64).sqrt(),
        n,
    };

    let equation = render_equation(kind, &params);

    Ok(FitResult {
        curve: FittedCurve { kind, params },
        equation,
        quality,
    })
}

fn fit_poly(x: &[f64], y: &[f64], degree: usize, autoscale: bool) -> Result<Vec<f64>, AppError> {
    if !autoscale {
        return polyfit(x, y, degree).ok_or_else(|| solve_failed(ModelKind::Poly));
    }

    let (x_unit, xs) = scale_to_unit(x);
    let (y_unit, ys) = scale_to_unit(y);
    debug!(
        "autoscale: x span {} from {}, y span {} from {}",
        xs.span, xs.offset, ys.span, ys.offset
    );

    let scaled = polyfit(&x_unit, &y_unit, degree).ok_or_else(|| solve_failed(ModelKind::Poly))?;
    Ok(rescale_poly_coeffs(&scaled, xs, ys))
}

/// A degree-1 fit in whatever space the caller linearized into.
struct Line {
    intercept: f64,
    slope: f64,
}

fn fit_line(x: &[f64], y: &[f64], kind: ModelKind) -> Result<Line, AppError> {
    // polyfit returns descending order: [slope, intercept].
    let coeffs = polyfit(x, y, 1).ok_or_else(|| solve_failed(kind))?;
    Ok(Line {
        intercept: coeffs[1],
        slope: coeffs[0],
    })
}

fn solve_failed(kind: ModelKind) -> AppError {
    AppError::fit(format!(
        "Least-squares solve failed for {} (singular or non-finite data; consider --dropna).",
        kind.display_name()
    ))
}
