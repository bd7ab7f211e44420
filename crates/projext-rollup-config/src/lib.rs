//! Declarative target descriptions for the projext Rollup plugin.
//!
//! A project declares its targets in `projext.toml` (or the `projext` field of
//! `package.json`). This crate loads that file, resolves each target on top of
//! the per-type templates and exposes the typed [`Target`] model consumed by
//! `projext-rollup`.

pub mod discovery;
pub mod error;
pub mod package;
pub mod project;
pub mod settings;
pub mod target;

// Re-export main types
pub use error::*;
pub use package::PackageJson;
pub use project::{ProjectConfig, TargetTemplates, merge_values};
pub use settings::*;
pub use target::*;

pub use discovery::{PACKAGE_FIELD, PROJECT_FILE, ProjectDiscovery, ProjectSource};
