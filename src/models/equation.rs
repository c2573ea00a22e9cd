//! Equation rendering.
//!
//! Fitted parameters are reported as a human-readable equation string with
//! 6 significant digits per coefficient. The strings are stable: they go
//! into the saved summary and the curve JSON, and tests assert on them.

use crate::domain::ModelKind;

/// Render the fitted equation for the given family.
pub fn render_equation(kind: ModelKind, params: &[f64]) -> String {
    match kind {
        ModelKind::Poly => render_poly(params),
        ModelKind::Exp => format!(
            "y = {} · exp({}·x)",
            format_sig(params[0]),
            format_sig(params[1])
        ),
        ModelKind::Power => format!(
            "y = {} · x^{}",
            format_sig(params[0]),
            format_sig(params[1])
        ),
        ModelKind::Log => format!(
            "y = {} + {} · ln(x)",
            format_sig(params[0]),
            format_sig(params[1])
        ),
    }
}

/// Polynomial terms, highest power first, joined with `" + "`; the substring
/// `"+ -"` then collapses to `"- "` so negative coefficients read naturally.
fn render_poly(coeffs: &[f64]) -> String {
    let degree = coeffs.len().saturating_sub(1);

    let terms: Vec<String> = coeffs
        .iter()
        .enumerate()
        .map(|(i, &c)| match degree - i {
            0 => format_sig(c),
            1 => format!("{}·x", format_sig(c)),
            p => format!("{}·x^{p}", format_sig(c)),
        })
        .collect();

    format!("y = {}", terms.join(" + ")).replace("+ -", "- ")
}

/// Format a value with 6 significant digits, printf-`%.6g` style.
///
/// Plain decimal notation inside `[1e-4, 1e6)`, scientific outside, trailing
/// zeros trimmed in both forms. The scientific form uses Rust's exponent
/// spelling (`1.23457e6`).
pub fn format_sig(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        return format!("{v}");
    }

    // Round to 6 significant digits first so the magnitude test sees the
    // rounded value (999999.7 rounds to 1e6 and must go scientific).
    let sci = format!("{v:.5e}");
    let exp = exponent_of(&sci);

    if (-4..6).contains(&exp) {
        let decimals = (5 - exp).max(0) as usize;
        trim_zeros(&format!("{v:.decimals$}"))
    } else {
        let mantissa = sci.split('e').next().unwrap_or(&sci);
        format!("{}e{exp}", trim_zeros(mantissa))
    }
}

fn exponent_of(sci: &str) -> i32 {
    sci.split('e')
        .nth(1)
        .and_then(|e| e.parse().ok())
        .unwrap_or(0)
}

fn trim_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
