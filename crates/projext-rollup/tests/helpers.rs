//! Shared test utilities for projext-rollup tests

#![allow(dead_code)]

use indexmap::IndexMap;
use projext_rollup::services::{FixedHash, NoOverrides};
use projext_rollup::{
    BrowserTargetConfiguration, BuildType, Configuration, CopyFile, PluginKind, Result, Services,
    Target, TargetRegistry,
};
use projext_rollup_config::{PackageJson, ProjectConfig, TargetOutput};
use std::path::PathBuf;

/// Target registry returning canned values
#[derive(Debug, Clone, Default)]
pub struct StubTargets {
    pub copy: Vec<CopyFile>,
    pub env: IndexMap<String, String>,
    pub browser: BrowserTargetConfiguration,
}

impl TargetRegistry for StubTargets {
    fn get_files_to_copy(&self, _target: &Target, _build_type: BuildType) -> Result<Vec<CopyFile>> {
        Ok(self.copy.clone())
    }

    fn load_target_dot_env_file(
        &self,
        _target: &Target,
        _build_type: BuildType,
    ) -> Result<IndexMap<String, String>> {
        Ok(self.env.clone())
    }

    fn get_browser_target_configuration(
        &self,
        _target: &Target,
    ) -> Result<BrowserTargetConfiguration> {
        Ok(self.browser.clone())
    }

    fn get_target(&self, name: &str) -> Result<Target> {
        Ok(Target::node(name))
    }
}

pub fn copy_file(from: &str, to: &str) -> CopyFile {
    CopyFile {
        from: PathBuf::from(from),
        to: PathBuf::from(to),
    }
}

/// Services with stub targets, a fixed hash and no overrides
pub fn services() -> Services {
    services_with(StubTargets::default(), PackageJson::default())
}

pub fn services_with(targets: StubTargets, package: PackageJson) -> Services {
    Services::new(ProjectConfig::default(), package)
        .with_targets(targets)
        .with_hash(FixedHash::new("abc123"))
        .with_overrides(NoOverrides)
}

pub fn package(dependencies: &[&str], dev_dependencies: &[&str]) -> PackageJson {
    PackageJson {
        name: Some("my-project".to_string()),
        version: Some("1.2.3".to_string()),
        dependencies: dependencies
            .iter()
            .map(|name| (name.to_string(), "^1.0.0".to_string()))
            .collect(),
        dev_dependencies: dev_dependencies
            .iter()
            .map(|name| (name.to_string(), "^1.0.0".to_string()))
            .collect(),
    }
}

/// Node application with `app.js` outputs
pub fn node_target(name: &str) -> Target {
    let mut target = Target::node(name);
    target.output.development = TargetOutput::new("app.js");
    target.output.production = TargetOutput::new("app.js");
    target
}

/// Browser application shaped like the projext browser template
pub fn browser_target(name: &str) -> Target {
    let mut target = Target::browser(name);
    target.html.template = Some("index.html".to_string());
    target.library_options.library_target = "umd".to_string();
    target.output.development = TargetOutput {
        js: "statics/js/[target-name].js".to_string(),
        ..TargetOutput::default()
    };
    target.output.production = TargetOutput {
        js: "statics/js/[target-name].[hash].js".to_string(),
        css: "statics/styles/[target-name].[hash].css".to_string(),
        ..TargetOutput::default()
    };
    target
}

pub fn plugin_names(config: &Configuration) -> Vec<&'static str> {
    config
        .plugin_names()
        .into_iter()
        .map(|kind: PluginKind| kind.as_str())
        .collect()
}
