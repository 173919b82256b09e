//! Per-render bookkeeping.
//!
//! - [`ImportTable`] - Referenced types with their aliases

mod imports;

pub use imports::ImportTable;
