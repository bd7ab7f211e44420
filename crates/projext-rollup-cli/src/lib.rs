//! Command-line interface for projext-rollup.
//!
//! Loads a projext project, resolves one of its targets and prints the Rollup
//! configuration derived for it as JSON, so a Node-side driver can hand it to
//! Rollup.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`settings`] - CLI settings layered with figment
//! - [`commands`] - `config` and `targets`
//! - [`error`] - `CliError` and its miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status output on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;
pub mod ui;

pub use error::{CliError, Result};
