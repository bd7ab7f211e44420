use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Kind of runtime a target is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// Node.js application or library (default)
    #[default]
    Node,
    /// Browser application or library
    Browser,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Browser => "browser",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "node" => Ok(Self::Node),
            "browser" => Ok(Self::Browser),
            other => Err(ConfigError::UnknownTargetType(other.to_string())),
        }
    }
}

/// Which configuration variant a build uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    #[default]
    Development,
    Production,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::UnknownBuildType(other.to_string())),
        }
    }
}

/// A value declared once per build type
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerBuild<T: Default> {
    pub development: T,
    pub production: T,
}

impl<T: Default> PerBuild<T> {
    pub fn new(development: T, production: T) -> Self {
        Self {
            development,
            production,
        }
    }

    pub fn get(&self, build_type: BuildType) -> &T {
        match build_type {
            BuildType::Development => &self.development,
            BuildType::Production => &self.production,
        }
    }
}

impl<T: Clone + Default> PerBuild<T> {
    /// Same value for both build types
    pub fn both(value: T) -> Self {
        Self::new(value.clone(), value)
    }
}

/// Raw `js_chunks` option as written in the project file.
///
/// It is either a flag asking for a synthesized chunk template or the template itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsChunks {
    Flag(bool),
    Template(String),
}
