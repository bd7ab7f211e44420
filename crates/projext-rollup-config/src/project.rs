//! Project file structure and target template merging.
//!
//! Targets are resolved in three layers: the built-in template for the
//! target type, the project's own `[templates.<type>]` table, and finally
//! the target table itself. Later layers win; objects merge recursively,
//! arrays and primitives are replaced.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::path::PathBuf;

use crate::discovery::ProjectSource;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;
use crate::target::{Target, TargetType};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project version; falls back to `package.json` when omitted
    #[serde(default)]
    pub version: Option<String>,

    /// Raw target tables, keyed by target name
    #[serde(default)]
    pub targets: IndexMap<String, Value>,

    #[serde(default)]
    pub templates: TargetTemplates,

    #[serde(default)]
    pub settings: GlobalSettings,

    /// Directory the project file was loaded from
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(skip)]
    pub source: ProjectSource,
}

/// Per-type defaults applied under every target of that type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetTemplates {
    #[serde(default)]
    pub node: Value,

    #[serde(default)]
    pub browser: Value,
}

impl TargetTemplates {
    fn for_type(&self, target_type: TargetType) -> &Value {
        match target_type {
            TargetType::Node => &self.node,
            TargetType::Browser => &self.browser,
        }
    }
}

impl ProjectConfig {
    /// Create from serde_json::Value (for programmatic projects)
    ///
    /// # Example
    ///
    /// ```
    /// use projext_rollup_config::{ProjectConfig, TargetType};
    /// use serde_json::json;
    ///
    /// let project = ProjectConfig::from_value(json!({
    ///     "targets": {
    ///         "front": { "type": "browser" }
    ///     }
    /// }))
    /// .unwrap();
    ///
    /// let target = project.target("front").unwrap();
    /// assert_eq!(target.target_type, TargetType::Browser);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        let mut config: ProjectConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
                field: "project".to_string(),
                hint: Some(e.to_string()),
            })?;
        config.root = PathBuf::from(".");
        Ok(config)
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Resolve a target by name, applying the type templates underneath it
    pub fn target(&self, name: &str) -> ConfigResult<Target> {
        let raw = self
            .targets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownTarget(name.to_string()))?;

        if !raw.is_object() {
            return Err(ConfigError::InvalidTarget {
                target: name.to_string(),
                message: "a target must be a table".to_string(),
            });
        }

        let target_type = match raw.get("type").and_then(Value::as_str) {
            Some(value) => value.parse()?,
            None => TargetType::default(),
        };

        let mut merged = builtin_template(target_type);
        merge_values(&mut merged, self.templates.for_type(target_type));
        merge_values(&mut merged, raw);
        merged["name"] = Value::String(name.to_string());
        merged["type"] = Value::String(target_type.as_str().to_string());

        let mut target: Target =
            serde_json::from_value(merged).map_err(|e| ConfigError::InvalidTarget {
                target: name.to_string(),
                message: e.to_string(),
            })?;
        target.resolve_paths(&self.root);

        tracing::debug!(target_name = name, target_type = %target_type, "resolved target");
        Ok(target)
    }

    /// Resolve every target declared in the project
    pub fn resolve_targets(&self) -> ConfigResult<Vec<Target>> {
        self.target_names().map(|name| self.target(name)).collect()
    }
}

/// Defaults that depend on the target type
fn builtin_template(target_type: TargetType) -> Value {
    match target_type {
        TargetType::Node => json!({
            "library_options": { "library_target": "commonjs2" },
        }),
        TargetType::Browser => json!({
            "library_options": { "library_target": "umd" },
            "html": { "template": "index.html", "filename": "index.html" },
            "output": {
                "development": {
                    "js": "statics/js/[target-name].js",
                    "css": "statics/styles/[target-name].css",
                },
                "production": {
                    "js": "statics/js/[target-name].[hash].js",
                    "css": "statics/styles/[target-name].[hash].css",
                },
            },
        }),
    }
}

/// Recursively merge `update` into `target`.
///
/// `null` never overwrites a value, so an option set to `null` keeps its default.
pub fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (_, Value::Null) => {}
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map.iter().filter(|(_, value)| !value.is_null()) {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, Value::Object(_)) => {
            *target_slot = Value::Object(Map::new());
            merge_values(target_slot, update);
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
