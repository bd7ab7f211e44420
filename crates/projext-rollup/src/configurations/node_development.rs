use std::sync::Arc;

use super::{Configuration, ConfigurationFile, reduce_configuration, with_globals};
use crate::params::BuildParameters;
use crate::plugin_settings::PluginSettingsBuilder;
use crate::plugins::{Pipeline, PluginKind};
use crate::services::Services;
use crate::{BuildType, Result};

/// Node targets, development builds.
#[derive(Debug, Clone)]
pub struct NodeDevelopmentConfiguration {
    services: Arc<Services>,
    settings: PluginSettingsBuilder,
}

impl NodeDevelopmentConfiguration {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            settings: PluginSettingsBuilder::new(Arc::clone(&services)),
            services,
        }
    }
}

impl ConfigurationFile for NodeDevelopmentConfiguration {
    fn get_config(&self, params: &BuildParameters) -> Result<Configuration> {
        let target = &params.target;
        let settings = self.settings.build(params)?;
        let run = target.run_on_development;

        let mut pipeline = Pipeline::new(self.services.plugins.as_ref());
        pipeline.add(PluginKind::Resolve, &settings.resolve)?;
        pipeline.add(PluginKind::Babel, &settings.babel)?;
        pipeline.add(PluginKind::Commonjs, &settings.commonjs)?;
        pipeline.add_if(!settings.polyfill.is_empty(), PluginKind::Polyfill, &settings.polyfill)?;
        pipeline.add(PluginKind::RuntimeReplace, &settings.replace)?;
        pipeline.add(PluginKind::ExtraWatch, &settings.extra_watch)?;
        pipeline.add(PluginKind::Sass, &settings.sass)?;
        pipeline.add(PluginKind::Css, &settings.css)?;
        pipeline.add(PluginKind::StylesheetAssetsHelper, &settings.stylesheet_assets_helper)?;
        pipeline.add(PluginKind::StylesheetAssets, &settings.stylesheet_assets)?;
        pipeline.add(PluginKind::Html, &settings.html)?;
        pipeline.add(PluginKind::Json, &settings.json)?;
        pipeline.add(PluginKind::Urls, &settings.urls)?;
        pipeline.add(PluginKind::Copy, &settings.copy)?;
        pipeline.add(PluginKind::StatsLog, &settings.stats)?;
        pipeline.add_if(run, PluginKind::NodeRunner, &settings.node_runner)?;

        let watch = (run || *target.watch.get(BuildType::Development)).then(|| settings.watch.clone());

        tracing::debug!(
            target_name = %target.name,
            plugins = pipeline.len(),
            watch = watch.is_some(),
            "node development configuration"
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
