//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - model identifiers and run configuration (`ModelKind`, `FitConfig`)
//! - the extracted sample and sheet/column specifiers (`SampleSet`, `Selector`)
//! - fit outputs (`FitResult`, `FittedCurve`, `CurveFile`)

pub mod types;

pub use types::*;
