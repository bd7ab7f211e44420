//! Error handling for the CLI.
//!
//! Commands return [`CliError`]; `main` turns it into a miette report with a
//! hint when the failure has an obvious fix.

use miette::Report;
use projext_rollup_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Project file or target resolution failures
    #[error("Project error: {0}")]
    Project(#[from] ConfigError),

    /// Configuration assembly failures
    #[error(transparent)]
    Rollup(#[from] projext_rollup::Error),

    /// CLI settings that could not be extracted
    #[error("Invalid CLI settings: {0}")]
    Settings(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

impl CliError {
    /// How to fix the error, when there's a single obvious way
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::Project(error) | CliError::Rollup(projext_rollup::Error::Config(error)) => {
                config_hint(error)
            }
            CliError::Rollup(error) => rollup_hint(error),
            CliError::Settings(_) => Some(
                "Check the [settings] table of projext.toml and the PROJEXT_ROLLUP_* variables"
                    .to_string(),
            ),
            CliError::Json(_) | CliError::Io(_) => None,
        }
    }
}

fn config_hint(error: &ConfigError) -> Option<String> {
    match error {
        ConfigError::NotFound => Some(
            "Create a projext.toml file or add a `projext` field to package.json".to_string(),
        ),
        ConfigError::Parse { file, .. } => Some(format!("Fix {file} and run the command again")),
        ConfigError::UnknownTarget(_) => {
            Some("Run `projext-rollup targets` to list the available targets".to_string())
        }
        ConfigError::UnknownTargetType(_) => {
            Some("Set `type` to \"node\" or \"browser\"".to_string())
        }
        _ => None,
    }
}

fn rollup_hint(error: &projext_rollup::Error) -> Option<String> {
    use projext_rollup::Error;

    match error {
        Error::MissingEntry { build_type, .. } => {
            Some(format!("Set `entry.{build_type}` on the target"))
        }
        Error::MissingOption { option, .. } => Some(format!("Set `{option}` on the target")),
        Error::InvalidOverride { .. } => Some(
            "Override files must hold a JSON object; add \"replace\": true to replace the whole configuration"
                .to_string(),
        ),
        _ => None,
    }
}

/// Convert a CLI error to a miette report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projext_rollup::BuildType;

    #[test]
    fn missing_project_file_has_a_hint() {
        let err = CliError::from(ConfigError::NotFound);
        assert!(err.to_string().contains("project file not found"));
        assert!(err.hint().unwrap().contains("projext.toml"));
    }

    #[test]
    fn config_errors_wrapped_by_the_core_keep_their_hint() {
        let err = CliError::from(projext_rollup::Error::Config(ConfigError::UnknownTarget(
            "worker".to_string(),
        )));
        assert_eq!(err.to_string(), "unknown target: worker");
        assert!(err.hint().unwrap().contains("projext-rollup targets"));
    }

    #[test]
    fn missing_entry_hint_names_the_build_type() {
        let err = CliError::from(projext_rollup::Error::MissingEntry {
            target: "api".to_string(),
            build_type: BuildType::Production,
        });
        assert_eq!(err.hint().as_deref(), Some("Set `entry.production` on the target"));
    }

    #[test]
    fn parse_errors_point_at_the_file() {
        let err = CliError::from(ConfigError::Parse {
            file: "app/projext.toml".to_string(),
            message: "expected `]`".to_string(),
        });
        assert_eq!(
            err.hint().as_deref(),
            Some("Fix app/projext.toml and run the command again")
        );
    }

    #[test]
    fn io_errors_have_no_hint() {
        let err = CliError::from(std::io::Error::other("disk on fire"));
        assert!(err.hint().is_none());
        let report = cli_error_to_miette(err);
        assert!(report.to_string().contains("disk on fire"));
    }
}
