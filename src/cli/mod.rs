//! Command-line support: graph assembly from arguments and command output.

pub mod commands;
pub mod input;

pub use input::{parse_edge, EdgeSpec, GraphInput};
