use std::sync::Arc;

use super::{Configuration, ConfigurationFile, reduce_configuration, with_globals};
use crate::params::BuildParameters;
use crate::plugin_settings::PluginSettingsBuilder;
use crate::plugins::{Pipeline, PluginKind};
use crate::services::Services;
use crate::{BuildType, Result};

/// Node targets, production builds. No stats nor compression stages.
#[derive(Debug, Clone)]
pub struct NodeProductionConfiguration {
    services: Arc<Services>,
    settings: PluginSettingsBuilder,
}

impl NodeProductionConfiguration {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            settings: PluginSettingsBuilder::new(Arc::clone(&services)),
            services,
        }
    }
}

impl ConfigurationFile for NodeProductionConfiguration {
    fn get_config(&self, params: &BuildParameters) -> Result<Configuration> {
        let target = &params.target;
        let settings = self.settings.build(params)?;

        let mut pipeline = Pipeline::new(self.services.plugins.as_ref());
        pipeline.add(PluginKind::Resolve, &settings.resolve)?;
        pipeline.add(PluginKind::Babel, &settings.babel)?;
        pipeline.add(PluginKind::Commonjs, &settings.commonjs)?;
        pipeline.add(PluginKind::Replace, &settings.replace.fixed())?;
        pipeline.add(PluginKind::Sass, &settings.sass)?;
        pipeline.add(PluginKind::Css, &settings.css)?;
        pipeline.add(PluginKind::StylesheetAssets, &settings.stylesheet_assets)?;
        pipeline.add(PluginKind::Html, &settings.html)?;
        pipeline.add(PluginKind::Json, &settings.json)?;
        pipeline.add(PluginKind::Urls, &settings.urls)?;

        let watch = target
            .watch
            .get(BuildType::Production)
            .then(|| settings.watch.clone());

        tracing::debug!(
            target_name = %target.name,
            plugins = pipeline.len(),
            "node production configuration"
        );

        let config = Configuration {
            input: params.input.clone(),
            output: with_globals(&params.output, &settings.globals),
            plugins: pipeline.into_plugins(),
            external: settings.external.externals,
            watch,
        };
        reduce_configuration(&self.services, params, config)
    }
}
