//! Shared "fit pipeline" logic behind the `fit` subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load sheet -> extract columns -> fit -> format summary
//!
//! The CLI layer can then focus on presentation (printing, saving, the
//! evaluate loop).

use crate::domain::{FitConfig, FitResult, SampleSet};
use crate::error::AppError;
use crate::fit::fitter::fit_curve;
use crate::io::table::load_samples;
use crate::report::format_fit_summary;

/// All computed outputs of a single `tabfit fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub sample: SampleSet,
    pub result: FitResult,
    pub summary: String,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let sample = load_samples(
        &config.file,
        &config.sheet,
        &config.xcol,
        &config.ycol,
        config.dropna,
    )?;

    let result = fit_curve(config, &sample)?;
    let summary = format_fit_summary(config, &sample, &result);

    Ok(RunOutput {
        sample,
        result,
        summary,
    })
}
