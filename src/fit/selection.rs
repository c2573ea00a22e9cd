//! Model comparison using BIC.
//!
//! `rank` fits every family the data admits and computes:
//! - R² / SSE / RMSE
//! - BIC = n * ln(SSE/n) + k * ln(n)
//!
//! Families whose domain preconditions fail are skipped with the reason kept
//! for the report; the rest are ordered by ascending BIC, ties broken by
//! fewer parameters.

use crate::domain::{FitResult, ModelKind, SampleSet};
use crate::error::AppError;
use crate::fit::fitter::fit_model;
use crate::models::check_domain;

/// Output of fitting all applicable models.
#[derive(Debug, Clone)]
pub struct ModelRanking {
    /// Successful fits, best (lowest BIC) first.
    pub fits: Vec<RankedFit>,
    /// Families that were skipped and why (for diagnostics).
    pub skipped: Vec<(ModelKind, String)>,
}

/// One family's fit plus its information criterion.
#[derive(Debug, Clone)]
pub struct RankedFit {
    pub result: FitResult,
    pub bic: f64,
}

/// Fit every applicable family and rank by BIC (lower is better).
pub fn rank_models(
    degree: usize,
    autoscale: bool,
    sample: &SampleSet,
) -> Result<ModelRanking, AppError> {
    let kinds = [
        ModelKind::Poly,
        ModelKind::Exp,
        ModelKind::Power,
        ModelKind::Log,
    ];

    let mut fits = Vec::new();
    let mut skipped = Vec::new();

    for kind in kinds {
        let k = kind.param_count(degree);
        if sample.len() < k {
            skipped.push((
                kind,
                format!("needs at least {k} rows, sample has {}", sample.len()),
            ));
            continue;
        }
        if let Err(reason) = check_domain(kind, &sample.x, &sample.y) {
            skipped.push((kind, reason));
            continue;
        }

        match fit_model(kind, degree, autoscale && kind == ModelKind::Poly, sample) {
            Ok(result) => {
                let bic = bic(result.quality.n, result.quality.sse, k);
                fits.push(RankedFit { result, bic });
            }
            Err(err) => skipped.push((kind, err.to_string())),
        }
    }

    if fits.is_empty() {
        return Err(AppError::data("No model could be fitted to this sample."));
    }

    fits.sort_by(|a, b| {
        a.bic
            .partial_cmp(&b.bic)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.result.curve.params.len().cmp(&b.result.curve.params.len()))
    });

    Ok(ModelRanking { fits, skipped })
}

fn bic(n: usize, sse: f64, k: usize) -> f64 {
    let n_f = n as f64;
    let sse_per = (sse / n_f).max(1e-12);
    n_f * sse_per.ln() + (k as f64) * n_f.ln()
}
