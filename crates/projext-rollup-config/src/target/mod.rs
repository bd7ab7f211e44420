//! Target descriptions: what to build and where the output goes.

mod helpers;
mod options;
mod output;
mod types;

use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use options::{
    BabelOptions, BrowserConfigurationOptions, CssOptions, DevServerOptions, DotEnvOptions,
    HtmlOptions, InspectOptions, LibraryOptions, ProxiedOptions, SslOptions,
};
pub use output::TargetOutput;
pub use types::{BuildType, JsChunks, PerBuild, TargetType};

use helpers::{default_entry, default_true};

/// A declarative description of one thing to build.
///
/// Targets are read-only for the configuration layer: every derived value
/// is computed into new objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    pub name: String,

    #[serde(rename = "type")]
    pub target_type: TargetType,

    /// Entry file per build type, relative to `paths.source`
    pub entry: PerBuild<Option<String>>,

    pub output: PerBuild<TargetOutput>,

    /// Project-relative source and build paths
    pub paths: TargetPaths,

    /// Absolute source and build folders
    pub folders: TargetFolders,

    /// Build the target as a library instead of an application
    pub library: bool,

    pub library_options: LibraryOptions,

    pub css: CssOptions,

    pub source_map: PerBuild<bool>,

    pub watch: PerBuild<bool>,

    /// Run the target (dev server or Node process) after a development build
    pub run_on_development: bool,

    /// Node targets only: bundle dependencies and copy files like a browser target
    pub bundle: bool,

    /// Minify production bundles
    pub uglify_on_production: bool,

    /// Emit a bundle size report
    pub analyze: bool,

    /// Modules left as runtime imports
    pub exclude_modules: Vec<String>,

    /// Dependencies that must be transpiled with the target sources
    pub include_modules: Vec<String>,

    /// Files copied from the source folder to the build folder
    pub copy: Vec<String>,

    pub html: HtmlOptions,

    pub babel: BabelOptions,

    pub dev_server: DevServerOptions,

    pub configuration: BrowserConfigurationOptions,

    pub inspect: InspectOptions,

    pub dot_env: DotEnvOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPaths {
    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub build: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFolders {
    #[serde(default)]
    pub source: PathBuf,

    #[serde(default)]
    pub build: PathBuf,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            name: String::new(),
            target_type: TargetType::Node,
            entry: PerBuild::both(default_entry()),
            output: PerBuild::default(),
            paths: TargetPaths::default(),
            folders: TargetFolders::default(),
            library: false,
            library_options: LibraryOptions::default(),
            css: CssOptions::default(),
            source_map: PerBuild::default(),
            watch: PerBuild::default(),
            run_on_development: false,
            bundle: false,
            uglify_on_production: default_true(),
            analyze: false,
            exclude_modules: Vec::new(),
            include_modules: Vec::new(),
            copy: Vec::new(),
            html: HtmlOptions::default(),
            babel: BabelOptions::default(),
            dev_server: DevServerOptions::default(),
            configuration: BrowserConfigurationOptions::default(),
            inspect: InspectOptions::default(),
            dot_env: DotEnvOptions::default(),
        }
    }
}

impl Target {
    /// Create a target with default options
    pub fn new(name: impl Into<String>, target_type: TargetType) -> Self {
        let mut target = Self {
            name: name.into(),
            target_type,
            ..Self::default()
        };
        target.resolve_paths(Path::new("."));
        target
    }

    pub fn node(name: impl Into<String>) -> Self {
        Self::new(name, TargetType::Node)
    }

    pub fn browser(name: impl Into<String>) -> Self {
        Self::new(name, TargetType::Browser)
    }

    pub fn is_node(&self) -> bool {
        self.target_type == TargetType::Node
    }

    pub fn is_browser(&self) -> bool {
        self.target_type == TargetType::Browser
    }

    /// Fill empty paths from the target name and anchor the folders on `root`
    pub fn resolve_paths(&mut self, root: &Path) {
        if self.paths.source.is_empty() {
            self.paths.source = format!("src/{}", self.name);
        }
        if self.paths.build.is_empty() {
            self.paths.build = format!("dist/{}", self.name);
        }
        if self.folders.source.as_os_str().is_empty() {
            self.folders.source = root.join(&self.paths.source).clean();
        }
        if self.folders.build.as_os_str().is_empty() {
            self.folders.build = root.join(&self.paths.build).clean();
        }
    }
}
