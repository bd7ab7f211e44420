//! Plugin descriptors and the ordered pipeline.
//!
//! This crate doesn't run Rollup plugins. A configuration lists
//! [`PluginInstance`]s: the plugin's name plus its serialized settings, produced
//! by a [`PluginFactory`]. The Node side maps each name to the real plugin
//! constructor.

mod pipeline;

pub use pipeline::Pipeline;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::Result;

/// Every plugin a configuration file can add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginKind {
    /// Clears the stats of the previous build
    StatsReset,
    Resolve,
    Commonjs,
    Babel,
    WindowAsGlobal,
    /// Replaces definitions, the values are resolved per build
    RuntimeReplace,
    Replace,
    ModuleReplace,
    Polyfill,
    ExtraWatch,
    Sass,
    Css,
    StylesheetAssets,
    StylesheetAssetsHelper,
    StylesheetModulesFixer,
    Html,
    Json,
    Urls,
    Copy,
    Template,
    Minifier,
    Visualizer,
    Compression,
    StatsLog,
    /// Stops the dev server before a rebuild
    DevServerStop,
    DevServerStart,
    NodeRunner,
}

impl PluginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StatsReset => "stats-reset",
            Self::Resolve => "resolve",
            Self::Commonjs => "commonjs",
            Self::Babel => "babel",
            Self::WindowAsGlobal => "window-as-global",
            Self::RuntimeReplace => "runtime-replace",
            Self::Replace => "replace",
            Self::ModuleReplace => "module-replace",
            Self::Polyfill => "polyfill",
            Self::ExtraWatch => "extra-watch",
            Self::Sass => "sass",
            Self::Css => "css",
            Self::StylesheetAssets => "stylesheet-assets",
            Self::StylesheetAssetsHelper => "stylesheet-assets-helper",
            Self::StylesheetModulesFixer => "stylesheet-modules-fixer",
            Self::Html => "html",
            Self::Json => "json",
            Self::Urls => "urls",
            Self::Copy => "copy",
            Self::Template => "template",
            Self::Minifier => "minifier",
            Self::Visualizer => "visualizer",
            Self::Compression => "compression",
            Self::StatsLog => "stats-log",
            Self::DevServerStop => "dev-server-stop",
            Self::DevServerStart => "dev-server-start",
            Self::NodeRunner => "node-runner",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plugin entry of a Rollup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInstance {
    pub name: PluginKind,
    pub settings: Value,
}

/// Creates the plugin entries of a configuration.
pub trait PluginFactory: Send + Sync {
    fn create(&self, kind: PluginKind, settings: Value) -> Result<PluginInstance>;
}

/// Factory producing plain descriptors: the settings are kept as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorFactory;

impl PluginFactory for DescriptorFactory {
    fn create(&self, kind: PluginKind, settings: Value) -> Result<PluginInstance> {
        Ok(PluginInstance {
            name: kind,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_serializes_as_its_name() {
        for kind in [
            PluginKind::StatsReset,
            PluginKind::WindowAsGlobal,
            PluginKind::StylesheetModulesFixer,
            PluginKind::DevServerStart,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
    }

    #[test]
    fn descriptor_factory_keeps_settings() {
        let instance = DescriptorFactory
            .create(PluginKind::Json, json!({ "preferConst": true }))
            .unwrap();
        assert_eq!(instance.name, PluginKind::Json);
        assert_eq!(instance.settings["preferConst"], json!(true));
    }
}
