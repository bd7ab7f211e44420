use serde::{Deserialize, Serialize};

use crate::target::helpers::{
    default_browser_versions, default_configuration_env_var, default_configuration_path,
    default_define_on, default_dev_server_host, default_dev_server_port, default_dot_env_files,
    default_html_filename, default_inspect_command, default_inspect_host, default_inspect_port,
    default_library_target, default_true,
};

/// Stylesheet handling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssOptions {
    /// Enable CSS modules (scoped class names)
    #[serde(default)]
    pub modules: bool,

    /// Inject styles from the JS bundle instead of extracting a stylesheet
    #[serde(default)]
    pub inject: bool,
}

/// Options used when the target is built as a library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryOptions {
    /// `commonjs2`, `window` or `umd`; unknown values fall back to UMD
    #[serde(default = "default_library_target")]
    pub library_target: String,

    /// Gzip the library output as well
    #[serde(default)]
    pub compress: bool,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            library_target: default_library_target(),
            compress: false,
        }
    }
}

/// Development server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    #[serde(default = "default_dev_server_port")]
    pub port: u16,

    #[serde(default = "default_dev_server_host")]
    pub host: String,

    /// Reload the browser after a rebuild
    #[serde(default = "default_true")]
    pub reload: bool,

    /// Serve `index.html` for unknown routes
    #[serde(default = "default_true")]
    pub history_api_fallback: bool,

    #[serde(default)]
    pub ssl: SslOptions,

    #[serde(default)]
    pub proxied: ProxiedOptions,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            port: default_dev_server_port(),
            host: default_dev_server_host(),
            reload: true,
            history_api_fallback: true,
            ssl: SslOptions::default(),
            proxied: ProxiedOptions::default(),
        }
    }
}

/// Certificate files, relative to the project root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslOptions {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub cert: Option<String>,

    #[serde(default)]
    pub ca: Option<String>,
}

/// Settings for a dev server running behind a proxy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxiedOptions {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub https: Option<bool>,
}

/// Browser runtime configuration injected at build time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfigurationOptions {
    #[serde(default)]
    pub enabled: bool,

    /// Default configuration file; `config/<target-name>.config.json` when omitted
    #[serde(default)]
    pub default: Option<String>,

    /// Directory holding the configuration files
    #[serde(default = "default_configuration_path")]
    pub path: String,

    /// Expression replaced with the configuration object
    #[serde(default = "default_define_on")]
    pub define_on: String,

    /// Environment variable selecting an extra configuration file to merge
    #[serde(default = "default_configuration_env_var")]
    pub environment_variable: String,
}

impl Default for BrowserConfigurationOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            default: None,
            path: default_configuration_path(),
            define_on: default_define_on(),
            environment_variable: default_configuration_env_var(),
        }
    }
}

/// Node inspector settings forwarded to the process runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectOptions {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_inspect_host")]
    pub host: String,

    #[serde(default = "default_inspect_port")]
    pub port: u16,

    #[serde(default = "default_inspect_command")]
    pub command: String,

    #[serde(default)]
    pub ndb: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            host: default_inspect_host(),
            port: default_inspect_port(),
            command: default_inspect_command(),
            ndb: false,
        }
    }
}

/// HTML file generated for browser targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Template file, relative to the target source folder
    #[serde(default)]
    pub template: Option<String>,

    /// Output file name, relative to the target build folder
    #[serde(default = "default_html_filename")]
    pub filename: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            template: None,
            filename: default_html_filename(),
        }
    }
}

/// Transpilation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabelOptions {
    /// Inject the Babel polyfill
    #[serde(default)]
    pub polyfill: bool,

    /// Extra Babel plugins to enable
    #[serde(default)]
    pub features: Vec<String>,

    /// How many major browser versions to support
    #[serde(default = "default_browser_versions")]
    pub browser_versions: u32,

    #[serde(default)]
    pub mobile_support: bool,
}

impl Default for BabelOptions {
    fn default() -> Self {
        Self {
            polyfill: false,
            features: Vec::new(),
            browser_versions: default_browser_versions(),
            mobile_support: false,
        }
    }
}

/// `.env` files loaded into the build definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotEnvOptions {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Files in priority order; may use `[target-name]` and `[build-type]`
    #[serde(default = "default_dot_env_files")]
    pub files: Vec<String>,
}

impl Default for DotEnvOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            files: default_dot_env_files(),
        }
    }
}
