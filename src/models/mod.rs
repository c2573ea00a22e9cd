//! Curve family implementations.
//!
//! Models are implemented as small, pure functions so that fitting/reporting
//! code can stay generic.

pub mod equation;
pub mod model;

pub use equation::*;
pub use model::*;
