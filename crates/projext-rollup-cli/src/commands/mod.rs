//! CLI command implementations.
//!
//! Each command renders its output to a string first so it can be tested
//! without capturing stdout.

mod config;
mod targets;
mod utils;

pub use config::{config_execute, render_config};
pub use targets::{render_targets, targets_execute};
