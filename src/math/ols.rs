//! Least squares solver.
//!
//! Every model in this project reduces to a small linear regression:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! either directly (polynomials) or after a log transform of one or both
//! axes (exp / power / log).
//!
//! Implementation choices:
//! - We use SVD to solve the least-squares problem robustly even when the
//!   design matrix is tall (more rows than columns).
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - Vandermonde columns become nearly collinear for high degrees or narrow
//!   x ranges, so the solve tries a ladder of tolerances before giving up.

use log::debug;
use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                if tol > 1e-10 {
                    debug!("least-squares solve needed relaxed tolerance {tol:e}");
                }
                return Some(beta);
            }
        }
    }

    None
}

/// Fit a polynomial of the given degree by ordinary least squares.
///
/// Coefficients come back in descending power order (`c_d, ..., c_1, c_0`).
/// Returns `None` when there are fewer rows than coefficients or the solve
/// fails.
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Option<Vec<f64>> {
    let n = x.len();
    let p = degree + 1;
    if n < p || y.len() != n {
        return None;
    }

    // Vandermonde design matrix with powers descending left to right, so the
    // solution vector is already in descending power order.
    let mut design = DMatrix::<f64>::zeros(n, p);
    for (i, &xi) in x.iter().enumerate() {
        for j in 0..p {
            design[(i, j)] = xi.powi((degree - j) as i32);
        }
    }
    let obs = DVector::from_column_slice(y);

    solve_least_squares(&design, &obs).map(|beta| beta.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn polyfit_recovers_line() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];

        let coeffs = polyfit(&x, &y, 1).unwrap();
        assert_eq!(coeffs.len(), 2);
        assert!((coeffs[0] - 2.0).abs() < 1e-9, "slope, got {}", coeffs[0]);
        assert!(coeffs[1].abs() < 1e-9, "intercept, got {}", coeffs[1]);
    }

    #[test]
    fn polyfit_degree_zero_is_the_mean() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 3.0, 5.0, 7.0];

        let coeffs = polyfit(&x, &y, 0).unwrap();
        assert_eq!(coeffs.len(), 1);
        assert!((coeffs[0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn polyfit_rejects_underdetermined() {
        let x = [1.0, 2.0];
        let y = [1.0, 2.0];
        assert!(polyfit(&x, &y, 3).is_none());
    }
}
