use projext_rollup::services::FixedHash;
use projext_rollup::{RollupConfiguration, Services};
use projext_rollup_config::{ProjectConfig, ProjectDiscovery};
use serde::Serialize;

use crate::error::Result;
use crate::settings::CliSettings;

pub(super) fn load_project(settings: &CliSettings) -> Result<ProjectConfig> {
    let project = ProjectDiscovery::new(&settings.root).load()?;
    tracing::info!(source = %project.source, "using project");
    Ok(project)
}

/// Default services for the project, with the `[hash]` value pinned when asked
pub(super) fn load_rollup(settings: &CliSettings) -> Result<RollupConfiguration> {
    let project = load_project(settings)?;
    let mut services = Services::load(project)?;
    if let Some(hash) = &settings.hash {
        services = services.with_hash(FixedHash::new(hash.clone()));
    }

    Ok(RollupConfiguration::new(services)?)
}

pub(super) fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
