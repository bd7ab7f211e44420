use std::sync::Arc;

use super::{Configuration, ConfigurationFile, reduce_configuration, with_globals};
use crate::params::BuildParameters;
use crate::plugin_settings::PluginSettingsBuilder;
use crate::plugins::{Pipeline, PluginKind};
use crate::services::Services;
use crate::{BuildType, Result};

/// Browser targets, production builds.
#[derive(Debug, Clone)]
pub struct BrowserProductionConfiguration {
    services: Arc<Services>,
    settings: PluginSettingsBuilder,
}

impl BrowserProductionConfiguration {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            settings: PluginSettingsBuilder::new(Arc::clone(&services)),
            services,
        }
    }
}

impl ConfigurationFile for BrowserProductionConfiguration {
    fn get_config(&self, params: &BuildParameters) -> Result<Configuration> {
        let target = &params.target;
        let settings = self.settings.build(params)?;
        let library = target.library;

        let mut pipeline = Pipeline::new(self.services.plugins.as_ref());
        pipeline.add(PluginKind::StatsReset, &settings.stats)?;
        pipeline.add(PluginKind::Resolve, &settings.resolve)?;
        pipeline.add(PluginKind::Commonjs, &settings.commonjs)?;
        pipeline.add(PluginKind::Babel, &settings.babel)?;
        pipeline.add(PluginKind::WindowAsGlobal, &settings.window_as_global)?;
        pipeline.add(PluginKind::RuntimeReplace, &settings.replace)?;
        pipeline.add_if(
            !settings.module_replace.instructions.is_empty(),
            PluginKind::ModuleReplace,
            &settings.module_replace,
        )?;
        pipeline.add(PluginKind::ExtraWatch, &settings.extra_watch)?;
        pipeline.add(PluginKind::Sass, &settings.sass)?;
        pipeline.add(PluginKind::Css, &settings.css)?;
        pipeline.add(PluginKind::StylesheetAssets, &settings.stylesheet_assets)?;
        pipeline.add_if(
            target.css.modules,
            PluginKind::StylesheetModulesFixer,
            &settings.stylesheet_modules_fixer,
        )?;
        pipeline.add(PluginKind::Html, &settings.html)?;
        pipeline.add(PluginKind::Json, &settings.json)?;
        pipeline.add(PluginKind::Urls, &settings.urls)?;
        pipeline.add_if(target.uglify_on_production, PluginKind::Minifier, &settings.minifier)?;
        pipeline.add(PluginKind::Copy, &settings.copy)?;
        pipeline.add_if(params.analyze, PluginKind::Visualizer, &settings.visualizer)?;
        pipeline.add_if(!library, PluginKind::Template, &settings.template)?;
        pipeline.add_if(
            !library || target.library_options.compress,
            PluginKind::Compression,
            &settings.compression,
        )?;
        pipeline.add(PluginKind::StatsLog, &settings.stats)?;

        let external = if library {
            settings.external.externals.clone()
        } else {
            target.exclude_modules.clone()
        };
        let watch = target
            .watch
            .get(BuildType::Production)
            .then(|| settings.watch.clone());

        tracing::debug!(
            target_name = %target.name,
            plugins = pipeline.len(),
            watch = watch.is_some(),
            "browser production configuration"
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
