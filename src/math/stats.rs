//! Scalar fit statistics.

/// Arithmetic mean. NaN on empty input (callers guard for that upstream).
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared residuals between observations and predictions.
pub fn sse(y: &[f64], y_hat: &[f64]) -> f64 {
    y.iter()
        .zip(y_hat)
        .map(|(obs, fit)| {
            let r = obs - fit;
            r * r
        })
        .sum()
}

/// Coefficient of determination, `1 - SS_res / SS_tot`.
///
/// Returns NaN when the total sum of squares is zero (constant y); the
/// statistic does not exist there and reporting renders it as "undefined".
pub fn r_squared(y: &[f64], y_hat: &[f64]) -> f64 {
    let y_bar = mean(y);
    let ss_tot: f64 = y
        .iter()
        .map(|v| {
            let d = v - y_bar;
            d * d
        })
        .sum();

    if ss_tot > 0.0 {
        1.0 - sse(y, y_hat) / ss_tot
    } else {
        f64::NAN
    }
}
