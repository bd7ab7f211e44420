//! Global settings shared by every target of a project.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default log level for the CLI (`error`, `warn`, `info`, `debug`)
    #[serde(default)]
    pub log_level: Option<String>,

    /// Expression replaced with the project version
    #[serde(default)]
    pub definition_variable: Option<String>,
}
