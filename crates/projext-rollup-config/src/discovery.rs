//! Locating and reading a project.
//!
//! A projext project is described by `projext.toml` at its root or, when
//! that file is absent, by the `projext` field of its `package.json`. The
//! loaded [`ProjectConfig`] records which one was used as its
//! [`ProjectSource`].

use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::project::ProjectConfig;

pub const PROJECT_FILE: &str = "projext.toml";

/// Field of `package.json` holding an inline project
pub const PACKAGE_FIELD: &str = "projext";

const PACKAGE_FILE: &str = "package.json";

/// Where a project was read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProjectSource {
    /// Built in code with [`ProjectConfig::from_value`]
    #[default]
    Inline,
    Toml(PathBuf),
    PackageJson(PathBuf),
}

impl ProjectSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ProjectSource::Inline => None,
            ProjectSource::Toml(path) | ProjectSource::PackageJson(path) => Some(path),
        }
    }

    fn parse_error(&self, message: impl fmt::Display) -> ConfigError {
        ConfigError::Parse {
            file: self.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ProjectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectSource::Inline => f.write_str("inline project"),
            ProjectSource::Toml(path) => write!(f, "{}", path.display()),
            ProjectSource::PackageJson(path) => write!(f, "{}#{PACKAGE_FIELD}", path.display()),
        }
    }
}

/// Loads the project of a directory.
///
/// ```no_run
/// use projext_rollup_config::ProjectDiscovery;
///
/// # fn main() -> projext_rollup_config::Result<()> {
/// let project = ProjectDiscovery::new(".").load()?;
/// println!("{} targets in {}", project.targets.len(), project.source);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectDiscovery {
    root: PathBuf,
}

impl ProjectDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The source [`load`](Self::load) would use, or `None` for a directory
    /// without a project
    pub fn locate(&self) -> Result<Option<ProjectSource>> {
        Ok(self.read()?.map(|(source, _)| source))
    }

    /// Read the project and anchor it on the root directory.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFound`] when the directory has no project, and
    /// [`ConfigError::Parse`] when its source isn't a valid project.
    pub fn load(&self) -> Result<ProjectConfig> {
        let (source, document) = self.read()?.ok_or(ConfigError::NotFound)?;
        check_templates(&source, &document)?;

        let mut project: ProjectConfig =
            serde_json::from_value(document).map_err(|e| source.parse_error(e))?;
        project.root = self.root.clone();
        project.source = source;

        tracing::debug!(
            source = %project.source,
            targets = project.targets.len(),
            "loaded project"
        );
        Ok(project)
    }

    fn read(&self) -> Result<Option<(ProjectSource, Value)>> {
        let toml_path = self.root.join(PROJECT_FILE);
        if toml_path.is_file() {
            let content = fs::read_to_string(&toml_path)?;
            let source = ProjectSource::Toml(toml_path);
            let document: Value = toml::from_str(&content).map_err(|e| source.parse_error(e))?;
            return Ok(Some((source, document)));
        }

        let package_path = self.root.join(PACKAGE_FILE);
        if !package_path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&package_path)?;
        let source = ProjectSource::PackageJson(package_path);
        let mut package: Value =
            serde_json::from_str(&content).map_err(|e| source.parse_error(e))?;

        match package.get_mut(PACKAGE_FIELD).map(Value::take) {
            None | Some(Value::Null) => Ok(None),
            Some(document) => Ok(Some((source, document))),
        }
    }
}

/// Type templates are merged under every target, so anything but a table is
/// rejected before a target is resolved
fn check_templates(source: &ProjectSource, document: &Value) -> Result<()> {
    let Some(templates) = document.get("templates") else {
        return Ok(());
    };
    let Some(templates) = templates.as_object() else {
        return Err(source.parse_error("`templates` must be a table"));
    };

    match templates
        .iter()
        .find(|(_, template)| !template.is_null() && !template.is_object())
    {
        Some((name, _)) => Err(source.parse_error(format!("`templates.{name}` must be a table"))),
        None => Ok(()),
    }
}
