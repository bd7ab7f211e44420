//! Settings of the plugins that run or watch the build.

use projext_rollup_config::InspectOptions;
use serde::{Deserialize, Serialize};

use super::PluginSettingsBuilder;
use crate::params::BuildParameters;
use crate::utils::{build_relative, join_path};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSettings {
    pub path: String,
}

/// Certificate contents, not paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxiedSettings {
    pub enabled: bool,
    pub host: String,
    pub https: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSettings {
    pub host: String,
    pub port: u16,
    pub content_base: String,
    pub history_api_fallback: bool,
    pub reload: bool,

    /// Whether at least one certificate file was found
    pub ssl: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https: Option<HttpsSettings>,

    pub proxied: ProxiedSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRunnerSettings {
    pub file: String,
    pub inspect: InspectOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchSettings {
    pub clear_screen: bool,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraWatchSettings {
    pub files: Vec<String>,
}

impl PluginSettingsBuilder {
    pub(super) fn stats(&self, params: &BuildParameters) -> StatsSettings {
        StatsSettings {
            path: build_relative(&params.target.paths.build, ""),
        }
    }

    pub(super) fn dev_server(&self, params: &BuildParameters) -> Result<DevServerSettings> {
        let options = &params.target.dev_server;
        let mut https = HttpsSettings::default();
        let mut ssl = false;

        for (path, slot) in [
            (&options.ssl.key, &mut https.key),
            (&options.ssl.cert, &mut https.cert),
            (&options.ssl.ca, &mut https.ca),
        ] {
            let Some(path) = path else {
                continue;
            };
            let file = self.services.project_root.join(path);
            if !self.services.fs.exists(&file) {
                tracing::warn!(path = %file.display(), "SSL file not found");
                continue;
            }
            *slot = Some(self.services.fs.read_to_string(&file)?);
            ssl = true;
        }

        let proxied = ProxiedSettings {
            enabled: options.proxied.enabled,
            host: options
                .proxied
                .host
                .clone()
                .unwrap_or_else(|| options.host.clone()),
            https: options.proxied.https.unwrap_or(ssl),
        };

        Ok(DevServerSettings {
            host: options.host.clone(),
            port: options.port,
            content_base: params.target.folders.build.display().to_string(),
            history_api_fallback: options.history_api_fallback,
            reload: options.reload,
            ssl,
            https: ssl.then_some(https),
            proxied,
        })
    }

    pub(super) fn node_runner(&self, params: &BuildParameters) -> Result<NodeRunnerSettings> {
        if params.paths.js.trim().is_empty() {
            return Err(Error::MissingOption {
                plugin: "node-runner".to_string(),
                option: "output.js".to_string(),
            });
        }

        Ok(NodeRunnerSettings {
            file: build_relative(&params.target.paths.build, &params.paths.js),
            inspect: params.target.inspect.clone(),
        })
    }

    pub(super) fn watch(&self, params: &BuildParameters) -> WatchSettings {
        WatchSettings {
            clear_screen: false,
            include: vec![join_path(&params.target.paths.source, "**")],
            exclude: vec!["node_modules/**".to_string()],
        }
    }

    pub(super) fn extra_watch(&self, params: &BuildParameters) -> ExtraWatchSettings {
        ExtraWatchSettings {
            files: params.additional_watch.clone(),
        }
    }
}
