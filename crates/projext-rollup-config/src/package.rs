//! The parts of `package.json` the configuration layer reads.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub dependencies: IndexMap<String, String>,

    #[serde(default)]
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageJson {
    /// Load `package.json` from `root`, or an empty package when there is none
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join("package.json");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no package.json found");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_str_content(&content)
    }

    fn from_str_content(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(|e| ConfigError::InvalidValue {
            field: "package.json".to_string(),
            hint: Some(format!("Invalid JSON: {e}")),
        })?;

        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "package.json".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }

    pub fn dev_dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dev_dependencies.keys().map(String::as_str)
    }
}
