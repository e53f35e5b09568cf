//! Pure billing calculations shared between the library API and the CLI.
//!
//! Everything here is a total function: no I/O, no state, no failure
//! paths. Identical inputs always produce identical output, so callers
//! may invoke these from any number of threads without coordination.

pub mod charset;
pub mod estimate;

pub use charset::{charset_report, extended_char_count, CharsetReport};
pub use estimate::{estimate, EstimateOptions};
