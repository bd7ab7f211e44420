//! Plugin settings builder.
//!
//! Every plugin gets its own typed settings, computed from the build
//! parameters and passed through two reducer events:
//! `rollup-<plugin>-plugin-settings-configuration-for-<type>` and then
//! `rollup-<plugin>-plugin-settings-configuration`. The aggregate
//! [`PluginSettings`] goes through `rollup-plugin-settings-configuration`
//! the same way.

mod assets;
mod runtime;
mod scripts;
mod styles;

pub use assets::{
    AssetUrlRule, CompressionSettings, CopySettings, HtmlSettings, JsonSettings, MinifierSettings,
    TemplateSettings, UrlsSettings, VisualizerSettings,
};
pub use runtime::{
    DevServerSettings, ExtraWatchSettings, HttpsSettings, NodeRunnerSettings, ProxiedSettings,
    StatsSettings, WatchSettings,
};
pub use scripts::{
    BabelSettings, CommonJsSettings, ExternalSettings, ModuleReplaceSettings, ReplaceInstruction,
    ReplaceSettings, ResolveSettings,
};
pub use styles::{CssModulesSettings, StyleSettings, StylesheetAssetsSettings};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::events::for_type;
use crate::params::BuildParameters;
use crate::services::{FileRule, Services};
use crate::Result;

const SETTINGS_EVENT: &str = "rollup-plugin-settings-configuration";

/// Settings of every plugin a configuration file may add
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSettings {
    pub resolve: ResolveSettings,
    pub replace: ReplaceSettings,
    pub babel: BabelSettings,
    pub commonjs: CommonJsSettings,
    pub polyfill: Vec<String>,
    pub window_as_global: FileRule,
    pub module_replace: ModuleReplaceSettings,
    pub external: ExternalSettings,
    /// Global variable names for the excluded modules
    pub globals: IndexMap<String, String>,
    pub sass: StyleSettings,
    pub css: StyleSettings,
    pub stylesheet_assets: StylesheetAssetsSettings,
    pub stylesheet_assets_helper: FileRule,
    pub stylesheet_modules_fixer: FileRule,
    pub html: HtmlSettings,
    pub json: JsonSettings,
    pub urls: UrlsSettings,
    pub template: TemplateSettings,
    pub copy: CopySettings,
    pub compression: CompressionSettings,
    pub minifier: MinifierSettings,
    pub visualizer: VisualizerSettings,
    pub stats: StatsSettings,
    pub dev_server: DevServerSettings,
    pub node_runner: NodeRunnerSettings,
    pub watch: WatchSettings,
    pub extra_watch: ExtraWatchSettings,
}

#[derive(Debug, Clone)]
pub struct PluginSettingsBuilder {
    services: Arc<Services>,
}

impl PluginSettingsBuilder {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    /// Compute and reduce the settings of every plugin
    pub fn build(&self, params: &BuildParameters) -> Result<PluginSettings> {
        let settings = PluginSettings {
            resolve: self.reduce("resolve", self.resolve(params), params)?,
            replace: self.reduce("replace", self.replace(params), params)?,
            babel: self.reduce("babel", self.babel(params)?, params)?,
            commonjs: self.reduce("commonjs", self.commonjs(params), params)?,
            polyfill: self.reduce("polyfill", self.polyfill(params), params)?,
            window_as_global: self.reduce("window-as-global", self.window_as_global(params), params)?,
            module_replace: self.reduce("module-replace", self.module_replace(params), params)?,
            external: self.reduce("external", self.external(params), params)?,
            globals: self.reduce("globals", self.globals(params), params)?,
            sass: self.reduce("sass", self.sass(params), params)?,
            css: self.reduce("css", self.css(params), params)?,
            stylesheet_assets: self.reduce("stylesheet-assets", self.stylesheet_assets(params), params)?,
            stylesheet_assets_helper: self.reduce(
                "stylesheet-assets-helper",
                self.stylesheet_assets_helper(params),
                params,
            )?,
            stylesheet_modules_fixer: self.reduce(
                "stylesheet-modules-fixer",
                self.stylesheet_modules_fixer(params),
                params,
            )?,
            html: self.reduce("html", self.html(params), params)?,
            json: self.reduce("json", self.json(params), params)?,
            urls: self.reduce("urls", self.urls(params), params)?,
            template: self.reduce("template", self.template(params)?, params)?,
            copy: self.reduce("copy", self.copy(params), params)?,
            compression: self.reduce("compression", self.compression(params), params)?,
            minifier: self.reduce("minifier", self.minifier(params), params)?,
            visualizer: self.reduce("visualizer", self.visualizer(params), params)?,
            stats: self.reduce("stats", self.stats(params), params)?,
            dev_server: self.reduce("dev-server", self.dev_server(params)?, params)?,
            node_runner: self.reduce("node-runner", self.node_runner(params)?, params)?,
            watch: self.reduce("watch", self.watch(params), params)?,
            extra_watch: self.reduce("extra-watch", self.extra_watch(params), params)?,
        };

        let specific = for_type(SETTINGS_EVENT, params.target.target_type);
        self.services
            .events
            .reduce(&[specific.as_str(), SETTINGS_EVENT], settings, params)
    }

    fn reduce<T>(&self, plugin: &str, settings: T, params: &BuildParameters) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let generic = format!("rollup-{plugin}-plugin-settings-configuration");
        let specific = for_type(&generic, params.target.target_type);
        self.services
            .events
            .reduce(&[specific.as_str(), generic.as_str()], settings, params)
    }
}
