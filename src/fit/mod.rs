//! Curve fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit a single model family to a sample
//! - optionally rescale data to the unit interval before a polynomial fit
//! - compare families using BIC

pub mod fitter;
pub mod scale;
pub mod selection;

pub use fitter::*;
pub use scale::*;
pub use selection::*;
