// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - cast_precision_loss: segment and recipient counts stay far below the
//   f64 integer ceiling, so converting them for credit math is exact
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - items_after_statements: Output structs are clearer near their usage
// - fn_params_excessive_bools: CLI flags are naturally boolean
// - module_name_repetitions: re-exported names read better qualified
#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::items_after_statements,
    clippy::fn_params_excessive_bools,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;
