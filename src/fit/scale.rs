//! Unit rescaling for polynomial conditioning.
//!
//! Vandermonde columns explode when x spans large magnitudes, so the
//! polynomial path can optionally fit on data mapped to [0, 1] and then
//! express the coefficients back in raw units. Predictions and reporting see
//! only raw-unit coefficients either way.

/// Affine description of one axis mapped onto [0, 1]:
/// `u = (v - offset) / span`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub offset: f64,
    pub span: f64,
}

impl AxisScale {
    /// The do-nothing scale, used when an axis is degenerate.
    pub fn identity() -> Self {
        Self {
            offset: 0.0,
            span: 1.0,
        }
    }
}

/// Map values onto [0, 1] via `(v - min) / (max - min)`.
///
/// A zero or non-finite span (constant axis, or no finite values) returns
/// the values untouched with the identity scale, so degenerate data falls
/// through to the unscaled fit.
pub fn scale_to_unit(values: &[f64]) -> (Vec<f64>, AxisScale) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }

    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) {
        return (values.to_vec(), AxisScale::identity());
    }

    let scaled = values.iter().map(|&v| (v - lo) / span).collect();
    (scaled, AxisScale { offset: lo, span })
}

/// Re-express polynomial coefficients fitted on scaled axes in raw units.
///
/// `coeffs` are descending-power coefficients of `p(u)` fitted against the
/// scaled y axis, with `u = (x - xs.offset) / xs.span`. The returned
/// coefficients (same order) satisfy `y = q(x)` directly.
pub fn rescale_poly_coeffs(coeffs: &[f64], xs: AxisScale, ys: AxisScale) -> Vec<f64> {
    let degree = coeffs.len().saturating_sub(1);

    // Work in ascending order and substitute u = s·x + t with s = 1/span,
    // t = -offset/span, expanding (s·x + t)^k binomially.
    let ascending: Vec<f64> = coeffs.iter().rev().copied().collect();
    let s = 1.0 / xs.span;
    let t = -xs.offset / xs.span;

    let mut raw = vec![0.0; degree + 1];
    for (k, &a) in ascending.iter().enumerate() {
        if a == 0.0 {
            continue;
        }
        for j in 0..=k {
            raw[j] += a * binomial(k, j) * s.powi(j as i32) * t.powi((k - j) as i32);
        }
    }

    // Undo the y map: y = offset + span · p(u).
    for c in raw.iter_mut() {
        *c *= ys.span;
    }
    raw[0] += ys.offset;

    raw.reverse();
    raw
}

fn binomial(n: usize, k: usize) -> f64 {
    // Degrees stay in the single digits in practice, so the multiplicative
    // form is exact far beyond anything we fit.
    let k = k.min(n - k);
    let mut acc = 1.0;
    for i in 0..k {
        acc = acc * (n - i) as f64 / (i + 1) as f64;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_to_unit_interval() {
        let (scaled, scale) = scale_to_unit(&[10.0, 20.0, 30.0]);
        assert_eq!(scale.offset, 10.0);
        assert_eq!(scale.span, 20.0);
        assert!((scaled[0] - 0.0).abs() < 1e-12);
        assert!((scaled[1] - 0.5).abs() < 1e-12);
        assert!((scaled[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_axis_is_left_alone() {
        let (scaled, scale) = scale_to_unit(&[7.0, 7.0, 7.0]);
        assert_eq!(scale, AxisScale::identity());
        assert_eq!(scaled, vec![7.0, 7.0, 7.0]);
    }

    #[test]
    fn rescale_undoes_the_unit_map() {
        // p(u) = u with x in [1, 4], y in [2, 8] describes y = 2x.
        let xs = AxisScale {
            offset: 1.0,
            span: 3.0,
        };
        let ys = AxisScale {
            offset: 2.0,
            span: 6.0,
        };

        let raw = rescale_poly_coeffs(&[1.0, 0.0], xs, ys);
        assert_eq!(raw.len(), 2);
        assert!((raw[0] - 2.0).abs() < 1e-12, "slope, got {}", raw[0]);
        assert!(raw[1].abs() < 1e-12, "intercept, got {}", raw[1]);
    }

    #[test]
    fn identity_scales_change_nothing() {
        let coeffs = [3.0, -2.0, 1.0];
        let raw = rescale_poly_coeffs(&coeffs, AxisScale::identity(), AxisScale::identity());
        for (a, b) in raw.iter().zip(coeffs.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn binomial_small_values() {
        assert_eq!(binomial(0, 0), 1.0);
        assert_eq!(binomial(4, 2), 6.0);
        assert_eq!(binomial(5, 0), 1.0);
        assert_eq!(binomial(5, 5), 1.0);
    }
}
