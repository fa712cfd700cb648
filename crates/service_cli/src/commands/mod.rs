//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod plot;
pub mod price;

mod charts;
