use projext_rollup_config::{PackageJson, ProjectConfig};

use super::VersionProvider;

const DEFAULT_DEFINITION_VARIABLE: &str = "process.env.VERSION";
const FALLBACK_VERSION: &str = "development";

/// Version from the project file, then `package.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectVersion {
    version: String,
    definition_variable: String,
}

impl ProjectVersion {
    pub fn new(version: impl Into<String>, definition_variable: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            definition_variable: definition_variable.into(),
        }
    }

    pub fn for_project(project: &ProjectConfig, package: &PackageJson) -> Self {
        let version = project
            .version
            .clone()
            .or_else(|| package.version.clone())
            .unwrap_or_else(|| FALLBACK_VERSION.to_string());
        let definition_variable = project
            .settings
            .definition_variable
            .clone()
            .unwrap_or_else(|| DEFAULT_DEFINITION_VARIABLE.to_string());

        Self::new(version, definition_variable)
    }
}

impl VersionProvider for ProjectVersion {
    fn get_definition_variable(&self) -> String {
        self.definition_variable.clone()
    }

    fn get_version(&self) -> String {
        self.version.clone()
    }
}
