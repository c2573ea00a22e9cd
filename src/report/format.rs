//! Reporting utilities: formatted terminal output and the saved summary.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! The fit summary printed to the terminal is byte-identical to the one
//! persisted with `--save`.

use crate::domain::{FitConfig, FitResult, SampleSet};
use crate::fit::selection::ModelRanking;
use crate::io::table::Table;
use crate::models::format_sig;

/// Format the fit summary (source + sample + model + quality).
pub fn format_fit_summary(config: &FitConfig, sample: &SampleSet, result: &FitResult) -> String {
    let mut out = String::new();

    out.push_str("=== tabfit - curve fit ===\n");
    out.push_str(&format!("File: {}\n", config.file.display()));
    out.push_str(&format!("Sheet: {}\n", sample.sheet_name));
    out.push_str(&format!(
        "Columns: x={}, y={}\n",
        sample.x_name, sample.y_name
    ));
    out.push_str(&format!("Rows: n={}", sample.len()));
    if sample.rows_dropped > 0 {
        out.push_str(&format!(" (dropped {})", sample.rows_dropped));
    }
    out.push('\n');

    out.push_str(&format!("Model: {}", result.curve.kind.display_name()));
    if let Some(degree) = result.curve.degree() {
        out.push_str(&format!(" (degree {degree})"));
    }
    out.push('\n');

    out.push_str(&format!(
        "Parameters: {}\n",
        fmt_vec(&result.curve.params)
    ));
    out.push_str(&format!("Equation: {}\n", result.equation));
    out.push_str(&format!("R^2: {}\n", fmt_r2(result.quality.r2)));

    out
}

/// Format the model comparison table produced by `rank`.
pub fn format_rank_table(ranking: &ModelRanking) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<8} {:>10} {:>12} {:>12} {:>12}\n",
        "model", "r2", "sse", "rmse", "bic"
    ));
    for fit in &ranking.fits {
        out.push_str(&format!(
            "{:<8} {:>10} {:>12.6} {:>12.6} {:>12.3}\n",
            fit.result.curve.kind.display_name(),
            fmt_r2(fit.result.quality.r2),
            fit.result.quality.sse,
            fit.result.quality.rmse,
            fit.bic
        ));
    }
    for (kind, reason) in &ranking.skipped {
        out.push_str(&format!("  (skipped {}) {reason}\n", kind.display_name()));
    }

    if let Some(best) = ranking.fits.first() {
        out.push_str(&format!("\nBest: {}\n", best.result.equation));
    }

    out
}

/// Format the sheet/column listing produced by `inspect`.
pub fn format_inspect(sheets: &[String], table: &Table) -> String {
    let mut out = String::new();

    out.push_str(&format!("Sheets ({}):\n", sheets.len()));
    for (idx, name) in sheets.iter().enumerate() {
        let marker = if *name == table.sheet_name { "*" } else { " " };
        out.push_str(&format!("{marker} {idx}) {name}\n"));
    }

    out.push_str(&format!(
        "\nColumns in '{}' ({} data row(s)):\n",
        table.sheet_name,
        table.rows.len()
    ));
    for (idx, name) in table.headers.iter().enumerate() {
        out.push_str(&format!("  {idx}) {name}\n"));
    }

    out
}

/// R² rendered to 6 significant digits, or `undefined` when it does not exist.
pub fn fmt_r2(r2: f64) -> String {
    if r2.is_finite() {
        format_sig(r2)
    } else {
        "undefined".to_string()
    }
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format_sig(*x)).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitQuality, FittedCurve, ModelKind, Selector};
    use std::path::PathBuf;

    fn sample() -> SampleSet {
        SampleSet {
            x: vec![1.0, 2.0, 3.0],
            y: vec![4.0, 4.0, 4.0],
            sheet_name: "data".to_string(),
            x_name: "x".to_string(),
            y_name: "y".to_string(),
            rows_read: 5,
            rows_dropped: 2,
        }
    }

    fn config() -> FitConfig {
        FitConfig {
            file: PathBuf::from("points.csv"),
            sheet: Selector::Index(0),
            xcol: Selector::Name("x".to_string()),
            ycol: Selector::Name("y".to_string()),
            model: ModelKind::Poly,
            degree: 1,
            dropna: true,
            autoscale: false,
            save: PathBuf::from("fit_result.txt"),
            export_curve: None,
        }
    }

    #[test]
    fn summary_reports_equation_and_undefined_r2() {
        let result = FitResult {
            curve: FittedCurve {
                kind: ModelKind::Poly,
                params: vec![0.0, 4.0],
            },
            equation: "y = 0·x + 4".to_string(),
            quality: FitQuality {
                r2: f64::NAN,
                sse: 0.0,
                rmse: 0.0,
                n: 3,
            },
        };

        let text = format_fit_summary(&config(), &sample(), &result);
        assert!(text.contains("Equation: y = 0·x + 4"));
        assert!(text.contains("R^2: undefined"));
        assert!(text.contains("Model: poly (degree 1)"));
        assert!(text.contains("Rows: n=3 (dropped 2)"));
    }

    #[test]
    fn rank_table_lists_fits_and_skips() {
        let ranking = ModelRanking {
            fits: vec![crate::fit::selection::RankedFit {
                result: FitResult {
                    curve: FittedCurve {
                        kind: ModelKind::Log,
                        params: vec![1.0, 2.0],
                    },
                    equation: "y = 1 + 2 · ln(x)".to_string(),
                    quality: FitQuality {
                        r2: 1.0,
                        sse: 0.0,
                        rmse: 0.0,
                        n: 3,
                    },
                },
                bic: -10.0,
            }],
            skipped: vec![(
                ModelKind::Exp,
                "exp model requires all y values > 0".to_string(),
            )],
        };

        let text = format_rank_table(&ranking);
        assert!(text.contains("(skipped exp)"));
        assert!(text.contains("Best: y = 1 + 2 · ln(x)"));
    }

    #[test]
    fn inspect_marks_the_selected_sheet() {
        let table = Table {
            sheet_name: "second".to_string(),
            headers: vec!["t".to_string(), "v".to_string()],
            rows: vec![vec![Some(1.0), Some(2.0)]],
        };
        let sheets = vec!["first".to_string(), "second".to_string()];

        let text = format_inspect(&sheets, &table);
        assert!(text.contains("* 1) second"));
        assert!(text.contains("  0) t"));
        assert!(text.contains("(1 data row(s))"));
    }
}
