//! Settings of the plugins that resolve and transform JavaScript.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PluginSettingsBuilder;
use crate::params::BuildParameters;
use crate::services::FileRule;
use crate::utils::camel_case;
use crate::{Error, Result};

const EXTENSIONS: [&str; 3] = [".js", ".json", ".jsx"];
const POLYFILL: &str = "@babel/polyfill";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveSettings {
    pub extensions: Vec<String>,
    /// Use the `browser` field of `package.json`
    pub browser: bool,
    pub prefer_builtins: bool,
    pub main_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceSettings {
    pub values: IndexMap<String, String>,
    /// Sources of `values` for the runtime stage to re-read between rebuilds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl ReplaceSettings {
    /// The settings without their sources, for a replace stage whose values
    /// stay fixed for the whole build
    pub fn fixed(&self) -> Self {
        Self {
            values: self.values.clone(),
            files: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabelSettings {
    /// Babel options from the configuration provider
    #[serde(flatten)]
    pub config: Map<String, Value>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonJsSettings {
    pub include: Vec<String>,
    pub source_map: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceInstruction {
    pub search: String,
    pub replace: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleReplaceSettings {
    pub instructions: Vec<ReplaceInstruction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSettings {
    pub externals: Vec<String>,
}

impl PluginSettingsBuilder {
    pub(super) fn resolve(&self, params: &BuildParameters) -> ResolveSettings {
        let node = params.target.is_node();
        let main_fields: &[&str] = if node {
            &["module", "main"]
        } else {
            &["browser", "module", "main"]
        };

        ResolveSettings {
            extensions: EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            browser: !node,
            prefer_builtins: node,
            main_fields: main_fields.iter().map(|field| field.to_string()).collect(),
        }
    }

    pub(super) fn replace(&self, params: &BuildParameters) -> ReplaceSettings {
        ReplaceSettings {
            values: params.definitions.clone(),
            files: params.definition_files.clone(),
        }
    }

    pub(super) fn babel(&self, params: &BuildParameters) -> Result<BabelSettings> {
        let mut config = match self.services.babel.get_config_for_target(&params.target) {
            Value::Object(config) => config,
            Value::Null => Map::new(),
            _ => {
                return Err(Error::InvalidCollaborator(format!(
                    "the babel configuration for `{}` must be an object",
                    params.target.name
                )));
            }
        };
        config.remove("include");
        config.remove("exclude");

        Ok(BabelSettings {
            config,
            include: params.target_rules.js.include.clone(),
            exclude: params.target_rules.js.exclude.clone(),
        })
    }

    pub(super) fn commonjs(&self, params: &BuildParameters) -> CommonJsSettings {
        CommonJsSettings {
            include: vec!["node_modules/**".to_string()],
            source_map: params.output.sourcemap,
        }
    }

    pub(super) fn polyfill(&self, params: &BuildParameters) -> Vec<String> {
        if params.target.babel.polyfill {
            vec![POLYFILL.to_string()]
        } else {
            Vec::new()
        }
    }

    pub(super) fn window_as_global(&self, params: &BuildParameters) -> FileRule {
        params.target_rules.js.clone()
    }

    /// Starts empty, reducers add the instructions
    pub(super) fn module_replace(&self, _params: &BuildParameters) -> ModuleReplaceSettings {
        ModuleReplaceSettings::default()
    }

    /// Externals: the plugin's own subpaths, the excluded modules, the
    /// dependencies and, on development builds only, the dev dependencies
    pub(super) fn external(&self, params: &BuildParameters) -> ExternalSettings {
        let info = &self.services.plugin_info;
        let package = &self.services.package;

        let mut externals: Vec<String> = Vec::new();
        let mut push = |name: String| {
            if !externals.contains(&name) {
                externals.push(name);
            }
        };

        for subpath in &info.external {
            push(format!("{}/{subpath}", info.name));
        }
        for module in &params.target.exclude_modules {
            push(module.clone());
        }
        for dependency in package.dependency_names() {
            push(dependency.to_string());
        }
        if params.build_type.is_development() {
            for dependency in package.dev_dependency_names() {
                push(dependency.to_string());
            }
        }

        ExternalSettings { externals }
    }

    pub(super) fn globals(&self, params: &BuildParameters) -> IndexMap<String, String> {
        params
            .target
            .exclude_modules
            .iter()
            .map(|module| (module.clone(), camel_case(module)))
            .collect()
    }
}
