//! Input/output helpers.
//!
//! - table loading for CSV files and workbooks (`table`)
//! - plain-text summary persistence (`summary`)
//! - curve JSON read/write (`curve`)

pub mod curve;
pub mod summary;
pub mod table;

pub use curve::*;
pub use summary::*;
pub use table::*;
