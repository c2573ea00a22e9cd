//! Model evaluation for the supported curve families.
//!
//! The fitter relies on two primitive operations:
//! - check the family's domain preconditions against the raw sample
//! - predict y(x) given the fitted parameters
//!
//! Both are pure functions of `(kind, params, x)`; nothing is captured, so a
//! reloaded curve file evaluates exactly like a fresh fit.

use crate::domain::ModelKind;

/// Predict `y(x)` for the given model kind.
///
/// For `Poly`, `params` are coefficients in descending power order and the
/// polynomial is evaluated by Horner's rule. For the other families `params`
/// is `[a, b]`.
pub fn predict(kind: ModelKind, params: &[f64], x: f64) -> f64 {
    match kind {
        ModelKind::Poly => horner(params, x),
        ModelKind::Exp => params[0] * (params[1] * x).exp(),
        ModelKind::Power => params[0] * x.powf(params[1]),
        ModelKind::Log => params[0] + params[1] * x.ln(),
    }
}

fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Check the family's domain preconditions against the sample.
///
/// Violations surface before any fitting is attempted. The comparisons are
/// strict, so NaN values pass through here and are caught later by the
/// solver's finite guard.
pub fn check_domain(kind: ModelKind, x: &[f64], y: &[f64]) -> Result<(), String> {
    match kind {
        ModelKind::Poly => Ok(()),
        ModelKind::Exp => {
            if y.iter().any(|&v| v <= 0.0) {
                return Err("exp model requires all y values > 0".to_string());
            }
            Ok(())
        }
        ModelKind::Power => {
            if x.iter().any(|&v| v <= 0.0) {
                return Err("power model requires all x values > 0".to_string());
            }
            if y.iter().any(|&v| v <= 0.0) {
                return Err("power model requires all y values > 0".to_string());
            }
            Ok(())
        }
        ModelKind::Log => {
            if x.iter().any(|&v| v <= 0.0) {
                return Err("log model requires all x values > 0".to_string());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_direct_evaluation() {
        // 3x^2 - 2x + 1 at x = 2 is 9.
        let y = predict(ModelKind::Poly, &[3.0, -2.0, 1.0], 2.0);
        assert!((y - 9.0).abs() < 1e-12);
    }

    #[test]
    fn closed_forms_evaluate() {
        let y = predict(ModelKind::Exp, &[2.0, 0.0], 5.0);
        assert!((y - 2.0).abs() < 1e-12);

        let y = predict(ModelKind::Power, &[2.0, 3.0], 2.0);
        assert!((y - 16.0).abs() < 1e-12);

        let y = predict(ModelKind::Log, &[1.0, 2.0], 1.0);
        assert!((y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn domain_checks_catch_non_positive_values() {
        let ok = [1.0, 2.0];
        let bad = [1.0, -1.0];
        let zero = [1.0, 0.0];

        assert!(check_domain(ModelKind::Poly, &bad, &bad).is_ok());

        assert!(check_domain(ModelKind::Exp, &bad, &ok).is_ok());
        assert!(check_domain(ModelKind::Exp, &ok, &bad).is_err());

        assert!(check_domain(ModelKind::Power, &bad, &ok).is_err());
        assert!(check_domain(ModelKind::Power, &ok, &zero).is_err());

        assert!(check_domain(ModelKind::Log, &zero, &bad).is_err());
        assert!(check_domain(ModelKind::Log, &ok, &bad).is_ok());
    }

    #[test]
    fn domain_checks_let_nan_through() {
        // NaN is not "<= 0"; missing values are the dropna/solver guard's job.
        let with_nan = [1.0, f64::NAN];
        let ok = [1.0, 2.0];
        assert!(check_domain(ModelKind::Exp, &ok, &with_nan).is_ok());
        assert!(check_domain(ModelKind::Log, &with_nan, &ok).is_ok());
    }
}
