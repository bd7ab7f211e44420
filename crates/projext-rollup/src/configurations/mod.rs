//! Configuration files: one per target type and build type.
//!
//! Each file lays out the plugin pipeline in the exact order Rollup has to run
//! it, then passes the configuration through
//! `rollup-<type>-<build>-configuration` and `rollup-<type>-configuration`.

mod browser_development;
mod browser_production;
mod node_development;
mod node_production;

pub use browser_development::BrowserDevelopmentConfiguration;
pub use browser_production::BrowserProductionConfiguration;
pub use node_development::NodeDevelopmentConfiguration;
pub use node_production::NodeProductionConfiguration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::output::OutputDescriptor;
use crate::params::BuildParameters;
use crate::plugin_settings::WatchSettings;
use crate::plugins::{PluginInstance, PluginKind};
use crate::services::Services;
use crate::{BuildType, Result, TargetType};

/// A complete Rollup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub input: String,

    pub output: OutputDescriptor,

    pub plugins: Vec<PluginInstance>,

    #[serde(default)]
    pub external: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch: Option<WatchSettings>,
}

impl Configuration {
    pub fn plugin_names(&self) -> Vec<PluginKind> {
        self.plugins.iter().map(|plugin| plugin.name).collect()
    }

    pub fn plugin(&self, kind: PluginKind) -> Option<&PluginInstance> {
        self.plugins.iter().find(|plugin| plugin.name == kind)
    }
}

/// Produces the configuration of one target type and build type.
pub trait ConfigurationFile: Send + Sync {
    fn get_config(&self, params: &BuildParameters) -> Result<Configuration>;
}

/// Configuration files by target type, then build type
#[derive(Clone, Default)]
pub struct ConfigurationRegistry {
    files: IndexMap<TargetType, IndexMap<BuildType, Arc<dyn ConfigurationFile>>>,
}

impl ConfigurationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four built-in files, each wrapped with the type override and then
    /// the build type override
    pub fn with_defaults(services: &Arc<Services>) -> Self {
        let mut registry = Self::new();
        let files: [(TargetType, BuildType, Arc<dyn ConfigurationFile>); 4] = [
            (
                TargetType::Node,
                BuildType::Development,
                Arc::new(NodeDevelopmentConfiguration::new(Arc::clone(services))),
            ),
            (
                TargetType::Node,
                BuildType::Production,
                Arc::new(NodeProductionConfiguration::new(Arc::clone(services))),
            ),
            (
                TargetType::Browser,
                BuildType::Development,
                Arc::new(BrowserDevelopmentConfiguration::new(Arc::clone(services))),
            ),
            (
                TargetType::Browser,
                BuildType::Production,
                Arc::new(BrowserProductionConfiguration::new(Arc::clone(services))),
            ),
        ];

        for (target_type, build_type, file) in files {
            let file = services
                .overrides
                .overwrite(&format!("rollup/{target_type}.config.js"), file);
            let file = services
                .overrides
                .overwrite(&format!("rollup/{target_type}.{build_type}.config.js"), file);
            registry.insert(target_type, build_type, file);
        }
        registry
    }

    pub fn insert(
        &mut self,
        target_type: TargetType,
        build_type: BuildType,
        file: Arc<dyn ConfigurationFile>,
    ) {
        self.files
            .entry(target_type)
            .or_default()
            .insert(build_type, file);
    }

    pub fn remove(
        &mut self,
        target_type: TargetType,
        build_type: BuildType,
    ) -> Option<Arc<dyn ConfigurationFile>> {
        let files = self.files.get_mut(&target_type)?;
        let file = files.shift_remove(&build_type);
        if files.is_empty() {
            self.files.shift_remove(&target_type);
        }
        file
    }

    /// Files of a target type, if it has any
    pub fn for_type(
        &self,
        target_type: TargetType,
    ) -> Option<&IndexMap<BuildType, Arc<dyn ConfigurationFile>>> {
        self.files.get(&target_type)
    }
}

impl std::fmt::Debug for ConfigurationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self
            .files
            .iter()
            .flat_map(|(target_type, files)| {
                files
                    .keys()
                    .map(move |build_type| format!("{target_type}.{build_type}"))
            })
            .collect();
        f.debug_struct("ConfigurationRegistry")
            .field("files", &entries)
            .finish()
    }
}

/// The output with the computed globals assigned over the existing ones
pub(crate) fn with_globals(
    output: &OutputDescriptor,
    globals: &IndexMap<String, String>,
) -> OutputDescriptor {
    let mut output = output.clone();
    output
        .globals
        .extend(globals.iter().map(|(module, name)| (module.clone(), name.clone())));
    output
}

/// Reduce a finished configuration through its two events
pub(crate) fn reduce_configuration(
    services: &Services,
    params: &BuildParameters,
    config: Configuration,
) -> Result<Configuration> {
    let target_type = params.target.target_type;
    let specific = format!("rollup-{target_type}-{}-configuration", params.build_type);
    let generic = format!("rollup-{target_type}-configuration");
    services
        .events
        .reduce(&[specific.as_str(), generic.as_str()], config, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{OutputFormat, OutputLocation};

    fn output(globals: &[(&str, &str)]) -> OutputDescriptor {
        OutputDescriptor {
            location: OutputLocation::File {
                file: "./dist/app.js".to_string(),
            },
            format: OutputFormat::Iife,
            sourcemap: false,
            name: "app".to_string(),
            exports: None,
            globals: globals
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn computed_globals_win_on_conflicts() {
        let existing = output(&[("A", "1"), ("C", "4")]);
        let computed: IndexMap<String, String> = [("A", "2"), ("B", "3")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let merged = with_globals(&existing, &computed);
        assert_eq!(merged.globals.get("A").map(String::as_str), Some("2"));
        assert_eq!(merged.globals.get("B").map(String::as_str), Some("3"));
        assert_eq!(merged.globals.get("C").map(String::as_str), Some("4"));
        // The caller's output is left alone
        assert_eq!(existing.globals.get("A").map(String::as_str), Some("1"));
    }

    #[test]
    fn registry_remove_drops_empty_types() {
        struct Empty;
        impl ConfigurationFile for Empty {
            fn get_config(&self, _params: &BuildParameters) -> Result<Configuration> {
                unreachable!()
            }
        }

        let mut registry = ConfigurationRegistry::new();
        registry.insert(TargetType::Node, BuildType::Production, Arc::new(Empty));
        assert!(registry.for_type(TargetType::Node).is_some());

        assert!(registry.remove(TargetType::Node, BuildType::Production).is_some());
        assert!(registry.for_type(TargetType::Node).is_none());
        assert!(registry.remove(TargetType::Browser, BuildType::Production).is_none());
    }
}
