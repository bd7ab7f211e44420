//! CLI settings loaded from multiple sources.
//!
//! Priority: CLI args > `PROJEXT_ROLLUP_*` environment variables >
//! `[settings]` table of `projext.toml` > defaults

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use projext_rollup_config::PROJECT_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

pub const ENV_PREFIX: &str = "PROJEXT_ROLLUP_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliSettings {
    /// Project directory, taken from `--cwd` or the current directory
    #[serde(skip)]
    pub root: PathBuf,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Fixed value for `[hash]` placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Log level used when neither `--verbose`, `--quiet` nor `RUST_LOG` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// The flags that were actually passed
#[derive(Serialize)]
struct ArgOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pretty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hash: Option<String>,
}

impl CliSettings {
    pub fn load(args: &ProjectArgs) -> Result<Self> {
        let root = match &args.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir()?,
        };

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let project_file = root.join(PROJECT_FILE);
        if project_file.is_file() {
            figment = figment.merge(Figment::from(Toml::file(&project_file)).focus("settings"));
        }

        figment = figment
            .merge(Env::prefixed(ENV_PREFIX).only(&["pretty", "hash", "log_level"]))
            .merge(Serialized::defaults(ArgOverrides {
                pretty: args.pretty.then_some(true),
                hash: args.hash.clone(),
            }));

        let mut settings: Self = figment
            .extract()
            .map_err(|e| CliError::Settings(e.to_string()))?;
        settings.root = root;

        tracing::debug!(root = %settings.root.display(), pretty = settings.pretty, "loaded CLI settings");
        Ok(settings)
    }
}
