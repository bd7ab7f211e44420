use std::sync::Arc;

use super::{Configuration, ConfigurationFile, reduce_configuration, with_globals};
use crate::params::BuildParameters;
use crate::plugin_settings::PluginSettingsBuilder;
use crate::plugins::{Pipeline, PluginKind};
use crate::services::Services;
use crate::{BuildType, Result};

/// Browser targets, development builds.
#[derive(Debug, Clone)]
pub struct BrowserDevelopmentConfiguration {
    services: Arc<Services>,
    settings: PluginSettingsBuilder,
}

impl BrowserDevelopmentConfiguration {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            settings: PluginSettingsBuilder::new(Arc::clone(&services)),
            services,
        }
    }
}

impl ConfigurationFile for BrowserDevelopmentConfiguration {
    fn get_config(&self, params: &BuildParameters) -> Result<Configuration> {
        let target = &params.target;
        let settings = self.settings.build(params)?;
        let run = target.run_on_development;

        let mut pipeline = Pipeline::new(self.services.plugins.as_ref());
        pipeline.add_if(run, PluginKind::DevServerStop, &settings.dev_server)?;
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
        pipeline.add(PluginKind::Template, &settings.template)?;
        pipeline.add_if(run, PluginKind::DevServerStart, &settings.dev_server)?;

        let external = if target.library {
            settings.external.externals.clone()
        } else {
            target.exclude_modules.clone()
        };
        let watch = (run || *target.watch.get(BuildType::Development)).then(|| settings.watch.clone());

        tracing::debug!(
            target_name = %target.name,
            plugins = pipeline.len(),
            watch = watch.is_some(),
            "browser development configuration"
        );

        let config = Configuration {
            input: params.input.clone(),
            output: with_globals(&params.output, &settings.globals),
            plugins: pipeline.into_plugins(),
            external,
            watch,
        };
        reduce_configuration(&self.services, params, config)
    }
}
