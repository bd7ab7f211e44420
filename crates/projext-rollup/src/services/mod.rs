//! Collaborators the configuration layer depends on.
//!
//! Every service is a trait object held by [`Services`], so host code can swap
//! any of them. The defaults read the project from disk.

mod babel;
mod fs;
mod hash;
mod overrides;
mod rules;
mod targets;
mod version;

pub use babel::DefaultBabelConfig;
pub use fs::NativeFileSystem;
pub use hash::{FixedHash, TimestampHash};
pub use overrides::{FileOverrideFactory, FnOverride, NoOverrides, OverrideFn};
pub use rules::{DefaultFileRules, FileRule, TargetFileRules};
pub use targets::ProjectTargets;
pub use version::ProjectVersion;

use indexmap::IndexMap;
use projext_rollup_config::{PackageJson, ProjectConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::configurations::ConfigurationFile;
use crate::events::Events;
use crate::params::CopyFile;
use crate::plugins::{DescriptorFactory, PluginFactory};
use crate::{BuildType, Error, Result, Target};

/// Browser runtime configuration and the files it was read from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserTargetConfiguration {
    pub configuration: Value,
    pub files: Vec<PathBuf>,
}

pub trait TargetRegistry: Send + Sync {
    /// Files to copy into the build folder
    fn get_files_to_copy(&self, target: &Target, build_type: BuildType) -> Result<Vec<CopyFile>>;

    /// Variables of the target's `.env` files, in declaration order
    fn load_target_dot_env_file(
        &self,
        target: &Target,
        build_type: BuildType,
    ) -> Result<IndexMap<String, String>>;

    /// The `.env` files [`load_target_dot_env_file`](Self::load_target_dot_env_file)
    /// reads for this build, so a watcher can re-read them between rebuilds
    fn dot_env_files(&self, _target: &Target, _build_type: BuildType) -> Vec<PathBuf> {
        Vec::new()
    }

    fn get_browser_target_configuration(&self, target: &Target)
    -> Result<BrowserTargetConfiguration>;

    fn get_target(&self, name: &str) -> Result<Target>;
}

pub trait FileRulesProvider: Send + Sync {
    fn get_rules_for_target(&self, target: &Target) -> TargetFileRules;
}

pub trait VersionProvider: Send + Sync {
    /// Expression replaced with the version, e.g. `process.env.VERSION`
    fn get_definition_variable(&self) -> String;

    fn get_version(&self) -> String;
}

pub trait BabelConfigProvider: Send + Sync {
    fn get_config_for_target(&self, target: &Target) -> Value;
}

pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

pub trait HashGenerator: Send + Sync {
    /// Value for the `[hash]` placeholder
    fn hash(&self) -> String;
}

/// Wraps a configuration file with an override layer.
///
/// `path` is the conventional name of the override, like
/// `rollup/browser.production.config.js`.
pub trait ConfigOverrideFactory: Send + Sync {
    fn overwrite(
        &self,
        path: &str,
        base: Arc<dyn ConfigurationFile>,
    ) -> Arc<dyn ConfigurationFile>;
}

/// Identity of the Rollup plugin package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub name: String,

    /// Subpaths of the package that are always external
    pub external: Vec<String>,
}

impl Default for PluginInfo {
    fn default() -> Self {
        Self {
            name: "projext-plugin-rollup".to_string(),
            external: vec!["express".to_string(), "jimpex".to_string()],
        }
    }
}

/// The collaborators of the configuration layer, injected by name.
#[derive(Clone)]
pub struct Services {
    pub project_root: PathBuf,
    pub targets: Arc<dyn TargetRegistry>,
    pub rules: Arc<dyn FileRulesProvider>,
    pub version: Arc<dyn VersionProvider>,
    pub babel: Arc<dyn BabelConfigProvider>,
    pub fs: Arc<dyn FileSystem>,
    pub hash: Arc<dyn HashGenerator>,
    pub overrides: Arc<dyn ConfigOverrideFactory>,
    pub plugins: Arc<dyn PluginFactory>,
    pub events: Events,
    pub package: PackageJson,
    pub plugin_info: PluginInfo,
}

impl Services {
    /// Default collaborators for a project and its `package.json`
    pub fn new(project: ProjectConfig, package: PackageJson) -> Self {
        let root = project.root.clone();
        let version = ProjectVersion::for_project(&project, &package);

        Self {
            targets: Arc::new(ProjectTargets::new(project)),
            rules: Arc::new(DefaultFileRules),
            version: Arc::new(version),
            babel: Arc::new(DefaultBabelConfig),
            fs: Arc::new(NativeFileSystem),
            hash: Arc::new(TimestampHash),
            overrides: Arc::new(FileOverrideFactory::new(&root)),
            plugins: Arc::new(DescriptorFactory),
            events: Events::new(),
            package,
            plugin_info: PluginInfo::default(),
            project_root: root,
        }
    }

    /// Default collaborators, reading `package.json` from the project root
    pub fn load(project: ProjectConfig) -> Result<Self> {
        let package = PackageJson::load(&project.root)?;
        Ok(Self::new(project, package))
    }

    pub fn with_events(mut self, events: Events) -> Self {
        self.events = events;
        self
    }

    pub fn with_targets(mut self, targets: impl TargetRegistry + 'static) -> Self {
        self.targets = Arc::new(targets);
        self
    }

    pub fn with_rules(mut self, rules: impl FileRulesProvider + 'static) -> Self {
        self.rules = Arc::new(rules);
        self
    }

    pub fn with_version(mut self, version: impl VersionProvider + 'static) -> Self {
        self.version = Arc::new(version);
        self
    }

    pub fn with_babel(mut self, babel: impl BabelConfigProvider + 'static) -> Self {
        self.babel = Arc::new(babel);
        self
    }

    pub fn with_file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Arc::new(fs);
        self
    }

    pub fn with_hash(mut self, hash: impl HashGenerator + 'static) -> Self {
        self.hash = Arc::new(hash);
        self
    }

    pub fn with_overrides(mut self, overrides: impl ConfigOverrideFactory + 'static) -> Self {
        self.overrides = Arc::new(overrides);
        self
    }

    pub fn with_plugin_factory(mut self, plugins: impl PluginFactory + 'static) -> Self {
        self.plugins = Arc::new(plugins);
        self
    }

    pub fn with_plugin_info(mut self, plugin_info: PluginInfo) -> Self {
        self.plugin_info = plugin_info;
        self
    }

    /// Check the collaborators before any configuration is built
    pub fn validate(&self) -> Result<()> {
        if self.plugin_info.name.trim().is_empty() {
            return Err(Error::InvalidCollaborator(
                "the plugin package name can't be empty".to_string(),
            ));
        }
        if let Some(subpath) = self
            .plugin_info
            .external
            .iter()
            .find(|subpath| subpath.trim().is_empty())
        {
            return Err(Error::InvalidCollaborator(format!(
                "invalid external subpath `{subpath}` for `{}`",
                self.plugin_info.name
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("project_root", &self.project_root)
            .field("events", &self.events)
            .field("package", &self.package)
            .field("plugin_info", &self.plugin_info)
            .finish_non_exhaustive()
    }
}
