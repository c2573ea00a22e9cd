//! Report formatting for fit summaries, rankings, and sheet listings.

pub mod format;

pub use format::*;
