//! Override layers wrapped around the configuration files.
//!
//! Each configuration file is wrapped twice, first with the override for the
//! target type (`rollup/<type>.config.js`) and then with the one for the build
//! type (`rollup/<type>.<build>.config.js`). An override either extends the
//! configuration it wraps or replaces it.

use indexmap::IndexMap;
use path_clean::PathClean;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::ConfigOverrideFactory;
use crate::configurations::{Configuration, ConfigurationFile};
use crate::params::BuildParameters;
use crate::{Error, Result};

/// Key of an override file asking to replace the configuration instead of extending it
const REPLACE_KEY: &str = "replace";

/// Leaves every configuration file as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl ConfigOverrideFactory for NoOverrides {
    fn overwrite(
        &self,
        _path: &str,
        base: Arc<dyn ConfigurationFile>,
    ) -> Arc<dyn ConfigurationFile> {
        base
    }
}

/// Overrides read from JSON files in the project's `config` folder.
///
/// `rollup/browser.config.js` is looked up as
/// `<root>/config/rollup/browser.config.json`. The file is read on every
/// build, so it can be edited while watching.
#[derive(Debug, Clone)]
pub struct FileOverrideFactory {
    directory: PathBuf,
}

impl FileOverrideFactory {
    pub fn new(root: &Path) -> Self {
        Self {
            directory: root.join("config"),
        }
    }

    fn file_for(&self, path: &str) -> PathBuf {
        let file = match path.strip_suffix(".js") {
            Some(stem) => format!("{stem}.json"),
            None => path.to_string(),
        };
        self.directory.join(file).clean()
    }
}

impl ConfigOverrideFactory for FileOverrideFactory {
    fn overwrite(&self, path: &str, base: Arc<dyn ConfigurationFile>) -> Arc<dyn ConfigurationFile> {
        Arc::new(JsonFileOverride {
            file: self.file_for(path),
            base,
        })
    }
}

struct JsonFileOverride {
    file: PathBuf,
    base: Arc<dyn ConfigurationFile>,
}

impl JsonFileOverride {
    fn invalid(&self, message: impl Into<String>) -> Error {
        Error::InvalidOverride {
            path: self.file.display().to_string(),
            message: message.into(),
        }
    }
}

impl ConfigurationFile for JsonFileOverride {
    fn get_config(&self, params: &BuildParameters) -> Result<Configuration> {
        let config = self.base.get_config(params)?;
        if !self.file.is_file() {
            return Ok(config);
        }

        let content = std::fs::read_to_string(&self.file)?;
        let overrides: Value =
            serde_json::from_str(&content).map_err(|e| self.invalid(e.to_string()))?;
        let Value::Object(mut overrides) = overrides else {
            return Err(self.invalid("an override must be a JSON object"));
        };

        let replace = overrides
            .remove(REPLACE_KEY)
            .and_then(|value| value.as_bool())
            .unwrap_or(false);

        let result = if replace {
            serde_json::from_value(Value::Object(overrides))
        } else {
            let mut value = serde_json::to_value(&config)?;
            if let Value::Object(current) = &mut value {
                current.extend(overrides);
            }
            serde_json::from_value(value)
        };

        tracing::debug!(path = %self.file.display(), replace, "applied configuration override");
        result.map_err(|e| self.invalid(e.to_string()))
    }
}

/// A host-provided override: receives the wrapped configuration and returns
/// the one to use.
pub type OverrideFn =
    Arc<dyn Fn(Configuration, &BuildParameters) -> Result<Configuration> + Send + Sync>;

/// Overrides registered in code, keyed by conventional path.
///
/// An optional inner factory is applied first, so code overrides can be
/// layered on top of the file overrides.
#[derive(Clone, Default)]
pub struct FnOverride {
    overrides: IndexMap<String, OverrideFn>,
    inner: Option<Arc<dyn ConfigOverrideFactory>>,
}

impl FnOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrapping(inner: impl ConfigOverrideFactory + 'static) -> Self {
        Self {
            overrides: IndexMap::new(),
            inner: Some(Arc::new(inner)),
        }
    }

    /// Register an override for a conventional path, like `rollup/node.config.js`
    pub fn on<F>(mut self, path: impl Into<String>, f: F) -> Self
    where
        F: Fn(Configuration, &BuildParameters) -> Result<Configuration> + Send + Sync + 'static,
    {
        self.overrides.insert(path.into(), Arc::new(f));
        self
    }
}

impl ConfigOverrideFactory for FnOverride {
    fn overwrite(&self, path: &str, base: Arc<dyn ConfigurationFile>) -> Arc<dyn ConfigurationFile> {
        let base = match &self.inner {
            Some(inner) => inner.overwrite(path, base),
            None => base,
        };

        match self.overrides.get(path) {
            Some(f) => Arc::new(ClosureOverride {
                f: Arc::clone(f),
                base,
            }),
            None => base,
        }
    }
}

struct ClosureOverride {
    f: OverrideFn,
    base: Arc<dyn ConfigurationFile>,
}

impl ConfigurationFile for ClosureOverride {
    fn get_config(&self, params: &BuildParameters) -> Result<Configuration> {
        let config = self.base.get_config(params)?;
        (self.f)(config, params)
    }
}
