//! Error types for project file loading and target resolution.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Project file discovery
    #[error("project file not found (expected projext.toml or a `projext` field in package.json)")]
    NotFound,

    #[error("could not read the project from {file}: {message}")]
    Parse { file: String, message: String },

    #[error("invalid config value for `{field}`{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Target resolution
    #[error("unknown target: {0}")]
    UnknownTarget(String),

    #[error("invalid target `{target}`: {message}")]
    InvalidTarget { target: String, message: String },

    #[error("unknown target type: {0} (expected `node` or `browser`)")]
    UnknownTargetType(String),

    #[error("unknown build type: {0} (expected `development` or `production`)")]
    UnknownBuildType(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
