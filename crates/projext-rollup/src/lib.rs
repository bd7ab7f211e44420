#![cfg_attr(docsrs, feature(doc_cfg))]

//! # projext-rollup
//!
//! Rollup configuration assembly for projext targets.
//!
//! Given a [`Target`] and a [`BuildType`], this crate derives the complete
//! Rollup configuration: the entry, the output descriptor (single file or
//! code-split directory), the ordered plugin pipeline with every plugin's
//! settings, the externals and the watch options. The result serializes to the
//! JSON shape Rollup expects, so a thin Node driver can hand it to the bundler.
//!
//! ## Quick Start
//!
//! ```no_run
//! use projext_rollup::{BuildType, RollupConfiguration, Services};
//! use projext_rollup_config::ProjectDiscovery;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let project = ProjectDiscovery::new(".").load()?;
//! let target = project.target("front")?;
//!
//! let rollup = RollupConfiguration::new(Services::load(project)?)?;
//! let config = rollup.get_config(&target, BuildType::Production)?;
//!
//! println!("{}", serde_json::to_string_pretty(&config)?);
//! # Ok(()) }
//! ```
//!
//! ## Extension points
//!
//! Every plugin's settings, the aggregate settings, the build parameters and
//! the final configuration pass through named reducers registered on
//! [`Events`]. Target-type specific events (`...-for-node`, `...-for-browser`)
//! run before the generic ones.

pub mod builder;
pub mod configurations;
pub mod events;
pub mod output;
pub mod params;
pub mod plugin_settings;
pub mod plugins;
pub mod services;
pub mod utils;

pub use builder::{Definitions, RollupConfiguration};
pub use configurations::{Configuration, ConfigurationFile, ConfigurationRegistry};
pub use events::Events;
pub use output::{OutputDescriptor, OutputExports, OutputFormat, OutputLocation, build_output};
pub use params::{BuildParameters, ChunkNaming, CopyFile, FormattedPaths};
pub use plugin_settings::{PluginSettings, PluginSettingsBuilder};
pub use plugins::{DescriptorFactory, Pipeline, PluginFactory, PluginInstance, PluginKind};
pub use services::{
    BabelConfigProvider, BrowserTargetConfiguration, ConfigOverrideFactory, FileRule,
    FileRulesProvider, FileSystem, HashGenerator, PluginInfo, Services, TargetFileRules,
    TargetRegistry, VersionProvider,
};

// Re-export the target model for library users
pub use projext_rollup_config::{BuildType, ConfigError, Target, TargetType};

// Logging utilities (optional, enabled with "logging" feature)
#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub use logging::{LogLevel, init_logging, init_logging_from_env};

use std::path::PathBuf;

/// Error types for configuration assembly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No configuration is registered for the target type.
    #[error("there's no configuration for the `{0}` target type")]
    UnsupportedTargetType(TargetType),

    /// The target type has no configuration for the build type.
    #[error("there's no `{build_type}` configuration for the `{target_type}` target type")]
    UnsupportedBuildType {
        target_type: TargetType,
        build_type: BuildType,
    },

    /// The target declares no entry file for the build type.
    #[error("target `{target}` has no entry file for the `{build_type}` build")]
    MissingEntry { target: String, build_type: BuildType },

    /// A plugin settings builder needs an option the target doesn't define.
    #[error("the `{plugin}` plugin requires the `{option}` option")]
    MissingOption { plugin: String, option: String },

    /// A collaborator was set up in a state the configuration layer can't use.
    #[error("invalid collaborator: {0}")]
    InvalidCollaborator(String),

    /// A reducer returned a value that doesn't fit the reduced type.
    #[error("reducers for `{event}` returned an invalid value: {message}")]
    Reducer { event: String, message: String },

    /// An override file couldn't be applied.
    #[error("invalid override file {path}: {message}")]
    InvalidOverride { path: String, message: String },

    /// A `.env` file couldn't be parsed.
    #[error("failed to load {}: {message}", .path.display())]
    DotEnv { path: PathBuf, message: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error from the project/target layer.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration assembly.
pub type Result<T> = std::result::Result<T, Error>;
