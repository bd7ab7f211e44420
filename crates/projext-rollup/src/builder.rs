//! Top-level configuration builder.
//!
//! [`RollupConfiguration::get_config`] turns a target and a build type into
//! the build parameters, reduces them, and hands them to the configuration
//! file registered for the target type and build type.

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

use crate::configurations::{Configuration, ConfigurationFile, ConfigurationRegistry};
use crate::events::for_type;
use crate::output::build_output;
use crate::params::{BuildParameters, FormattedPaths};
use crate::services::Services;
use crate::utils::join_path;
use crate::{BuildType, Error, Result, Target};

const PARAMETERS_EVENT: &str = "rollup-configuration-parameters";

/// Replacement definitions and the files they were read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definitions {
    /// Replacement expressions, already JSON-encoded
    pub values: IndexMap<String, String>,
    /// `.env` and browser configuration files the values came from
    pub files: Vec<String>,
    /// Browser configuration files, watched in development
    pub additional_watch: Vec<String>,
}

#[derive(Debug)]
pub struct RollupConfiguration {
    services: Arc<Services>,
    configurations: ConfigurationRegistry,
}

impl RollupConfiguration {
    /// Validate the services and register the built-in configuration files
    pub fn new(services: Services) -> Result<Self> {
        services.validate()?;
        let services = Arc::new(services);
        let configurations = ConfigurationRegistry::with_defaults(&services);
        Ok(Self {
            services,
            configurations,
        })
    }

    pub fn services(&self) -> &Arc<Services> {
        &self.services
    }

    pub fn configurations(&self) -> &ConfigurationRegistry {
        &self.configurations
    }

    pub fn configurations_mut(&mut self) -> &mut ConfigurationRegistry {
        &mut self.configurations
    }

    /// Resolve a target through the target registry and build its configuration
    pub fn get_config_for(&self, name: &str, build_type: BuildType) -> Result<Configuration> {
        let target = self.services.targets.get_target(name)?;
        self.get_config(&target, build_type)
    }

    /// Build the Rollup configuration of a target
    pub fn get_config(&self, target: &Target, build_type: BuildType) -> Result<Configuration> {
        let file = self.configuration_file(target, build_type)?;
        let params = self.build_parameters(target, build_type)?;

        let specific = for_type(PARAMETERS_EVENT, target.target_type);
        let params = self.services.events.reduce(
            &[specific.as_str(), PARAMETERS_EVENT],
            params,
            &ParamsContext { target, build_type },
        )?;

        tracing::debug!(
            target_name = %target.name,
            build_type = %build_type,
            input = %params.input,
            chunks = params.paths.js_chunks.is_chunked(),
            "building rollup configuration"
        );
        file.get_config(&params)
    }

    fn configuration_file(
        &self,
        target: &Target,
        build_type: BuildType,
    ) -> Result<&Arc<dyn ConfigurationFile>> {
        let files = self
            .configurations
            .for_type(target.target_type)
            .ok_or(Error::UnsupportedTargetType(target.target_type))?;

        files.get(&build_type).ok_or(Error::UnsupportedBuildType {
            target_type: target.target_type,
            build_type,
        })
    }

    /// Everything the configuration files need, before the reducers run
    pub fn build_parameters(&self, target: &Target, build_type: BuildType) -> Result<BuildParameters> {
        let entry = target
            .entry
            .get(build_type)
            .as_deref()
            .filter(|entry| !entry.trim().is_empty())
            .ok_or_else(|| Error::MissingEntry {
                target: target.name.clone(),
                build_type,
            })?;
        let input = join_path(&target.paths.source, entry);

        let hash = self.services.hash.hash();
        let paths = FormattedPaths::format(target.output.get(build_type), &target.name, &hash);
        let output = build_output(target, &paths, build_type);

        let copy = if target.is_browser() || target.bundle {
            self.services.targets.get_files_to_copy(target, build_type)?
        } else {
            Vec::new()
        };

        let definitions = self.definitions(target, build_type)?;
        tracing::debug!(
            target_name = %target.name,
            definitions = definitions.values.len(),
            "computed definitions"
        );

        Ok(BuildParameters {
            input,
            output,
            target: target.clone(),
            target_rules: self.services.rules.get_rules_for_target(target),
            definitions: definitions.values,
            definition_files: definitions.files,
            build_type,
            paths,
            copy,
            additional_watch: definitions.additional_watch,
            analyze: target.analyze,
        })
    }

    /// Compute the replacement definitions of a build.
    ///
    /// The values depend on files that can change while watching, so a
    /// driver calls this again before each rebuild; `files` lists what to
    /// re-read.
    pub fn definitions(&self, target: &Target, build_type: BuildType) -> Result<Definitions> {
        let targets = &self.services.targets;
        let mut values = IndexMap::new();
        for (name, value) in targets.load_target_dot_env_file(target, build_type)? {
            values.insert(format!("process.env.{name}"), serde_json::to_string(&value)?);
        }

        values.insert(
            "process.env.NODE_ENV".to_string(),
            serde_json::to_string(build_type.as_str())?,
        );

        let version = &self.services.version;
        values.insert(
            version.get_definition_variable(),
            serde_json::to_string(&version.get_version())?,
        );

        let mut files: Vec<String> = targets
            .dot_env_files(target, build_type)
            .iter()
            .map(|file| file.display().to_string())
            .collect();
        let mut additional_watch = Vec::new();
        if target.is_browser() && target.configuration.enabled {
            let browser = targets.get_browser_target_configuration(target)?;
            values.insert(
                target.configuration.define_on.clone(),
                serde_json::to_string(&browser.configuration)?,
            );
            additional_watch.extend(
                browser
                    .files
                    .iter()
                    .map(|file| file.display().to_string()),
            );
            files.extend(additional_watch.iter().cloned());
        }

        Ok(Definitions {
            values,
            files,
            additional_watch,
        })
    }
}

/// Context handed to the parameter reducers
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParamsContext<'a> {
    target: &'a Target,
    build_type: BuildType,
}
