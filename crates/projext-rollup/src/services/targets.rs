use indexmap::IndexMap;
use path_clean::PathClean;
use projext_rollup_config::{ConfigError, DotEnvOptions, ProjectConfig, merge_values};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::{BrowserTargetConfiguration, TargetRegistry};
use crate::params::CopyFile;
use crate::{BuildType, Error, Result, Target};

/// Target registry backed by the project file.
#[derive(Debug, Clone)]
pub struct ProjectTargets {
    project: ProjectConfig,
}

impl ProjectTargets {
    pub fn new(project: ProjectConfig) -> Self {
        Self { project }
    }

    fn dot_env_path(&self, template: &str, target: &Target, build_type: BuildType) -> PathBuf {
        let file = template
            .replace("[target-name]", &target.name)
            .replace("[build-type]", build_type.as_str());
        self.project.root.join(file).clean()
    }
}

impl TargetRegistry for ProjectTargets {
    fn get_files_to_copy(&self, target: &Target, _build_type: BuildType) -> Result<Vec<CopyFile>> {
        Ok(target
            .copy
            .iter()
            .map(|file| CopyFile {
                from: target.folders.source.join(file).clean(),
                to: target.folders.build.join(file).clean(),
            })
            .collect())
    }

    fn load_target_dot_env_file(
        &self,
        target: &Target,
        build_type: BuildType,
    ) -> Result<IndexMap<String, String>> {
        let mut variables = IndexMap::new();
        if !target.dot_env.enabled {
            return Ok(variables);
        }

        let custom_files = target.dot_env.files != DotEnvOptions::default().files;
        for template in &target.dot_env.files {
            let path = self.dot_env_path(template, target, build_type);
            if !path.is_file() {
                if custom_files {
                    tracing::warn!(path = %path.display(), target_name = %target.name, ".env file not found");
                } else {
                    tracing::debug!(path = %path.display(), "skipping missing .env file");
                }
                continue;
            }

            let entries = dotenvy::from_path_iter(&path).map_err(|e| Error::DotEnv {
                path: path.clone(),
                message: e.to_string(),
            })?;
            for entry in entries {
                let (name, value) = entry.map_err(|e| Error::DotEnv {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                // Files are listed by priority: the first definition of a variable wins
                variables.entry(name).or_insert(value);
            }
            tracing::debug!(path = %path.display(), "loaded .env file");
        }

        Ok(variables)
    }

    fn dot_env_files(&self, target: &Target, build_type: BuildType) -> Vec<PathBuf> {
        if !target.dot_env.enabled {
            return Vec::new();
        }
        target
            .dot_env
            .files
            .iter()
            .map(|template| self.dot_env_path(template, target, build_type))
            .filter(|path| path.is_file())
            .collect()
    }

    fn get_browser_target_configuration(
        &self,
        target: &Target,
    ) -> Result<BrowserTargetConfiguration> {
        let options = &target.configuration;
        let directory = self.project.root.join(&options.path);
        let default_file = match &options.default {
            Some(file) => self.project.root.join(file),
            None => directory.join(format!("{}.config.json", target.name)),
        }
        .clean();

        let mut result = BrowserTargetConfiguration {
            configuration: Value::Object(Map::new()),
            files: Vec::new(),
        };

        if default_file.is_file() {
            result.configuration = read_json(&default_file)?;
            result.files.push(default_file);
        } else {
            tracing::debug!(path = %default_file.display(), "no default browser configuration");
        }

        let variant = std::env::var(&options.environment_variable)
            .ok()
            .filter(|value| !value.is_empty());
        if let Some(variant) = variant {
            let file = directory
                .join(format!("{}.{variant}.config.json", target.name))
                .clean();
            if file.is_file() {
                let extra = read_json(&file)?;
                merge_values(&mut result.configuration, &extra);
                result.files.push(file);
            } else {
                tracing::warn!(
                    path = %file.display(),
                    variable = %options.environment_variable,
                    "browser configuration file not found"
                );
            }
        }

        Ok(result)
    }

    fn get_target(&self, name: &str) -> Result<Target> {
        Ok(self.project.target(name)?)
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Config(ConfigError::InvalidValue {
            field: path.display().to_string(),
            hint: Some(format!("Invalid JSON: {e}")),
        })
    })
}
