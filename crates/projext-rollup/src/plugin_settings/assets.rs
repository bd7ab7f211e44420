//! Settings of the plugins that emit files.

use serde::{Deserialize, Serialize};

use super::PluginSettingsBuilder;
use crate::params::{BuildParameters, CopyFile};
use crate::services::FileRule;
use crate::utils::{build_relative, join_path};
use crate::{Error, Result, Target};

/// Where files matching a rule are copied and how they are referenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUrlRule {
    pub include: Vec<String>,
    pub exclude: Vec<String>,

    /// Output path, relative to the project root
    pub output: String,

    /// Public URL of the emitted file
    pub url: String,
}

impl AssetUrlRule {
    fn new(rule: &FileRule, build: &str, path: &str) -> Self {
        Self {
            include: rule.include.clone(),
            exclude: rule.exclude.clone(),
            output: build_relative(build, path),
            url: format!("/{}", path.trim_start_matches("./").trim_start_matches('/')),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlSettings {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSettings {
    pub prefer_const: bool,
    pub compact: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlsSettings {
    pub urls: Vec<AssetUrlRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSettings {
    /// HTML template, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub output: String,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
    pub urls: Vec<AssetUrlRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopySettings {
    pub files: Vec<CopyFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionSettings {
    pub folder: String,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifierSettings {
    pub sourcemap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizerSettings {
    pub filename: String,
    pub open: bool,
    pub template: String,
}

/// An empty template counts as no template
fn html_template(target: &Target) -> Option<&str> {
    target
        .html
        .template
        .as_deref()
        .filter(|template| !template.trim().is_empty())
}

impl PluginSettingsBuilder {
    /// Font, image and favicon URL rules
    pub(super) fn asset_rules(
        &self,
        params: &BuildParameters,
    ) -> (AssetUrlRule, AssetUrlRule, AssetUrlRule) {
        let build = &params.target.paths.build;
        let rules = &params.target_rules;
        (
            AssetUrlRule::new(&rules.fonts, build, &params.paths.fonts),
            AssetUrlRule::new(&rules.images, build, &params.paths.images),
            AssetUrlRule::new(&rules.favicon, build, "[name].[ext]"),
        )
    }

    pub(super) fn html(&self, params: &BuildParameters) -> HtmlSettings {
        let target = &params.target;
        HtmlSettings {
            include: vec![join_path(&target.paths.source, "**/*.html")],
            exclude: html_template(target)
                .map(|template| join_path(&target.paths.source, template))
                .into_iter()
                .collect(),
        }
    }

    pub(super) fn json(&self, params: &BuildParameters) -> JsonSettings {
        JsonSettings {
            prefer_const: true,
            compact: !params.build_type.is_development(),
        }
    }

    pub(super) fn urls(&self, params: &BuildParameters) -> UrlsSettings {
        let (fonts, images, favicon) = self.asset_rules(params);
        UrlsSettings {
            urls: vec![fonts, images, favicon],
        }
    }

    /// Only browser applications need a template
    pub(super) fn template(&self, params: &BuildParameters) -> Result<TemplateSettings> {
        let target = &params.target;
        let template =
            html_template(target).map(|template| join_path(&target.paths.source, template));
        if template.is_none() && target.is_browser() && !target.library {
            return Err(Error::MissingOption {
                plugin: "template".to_string(),
                option: "html.template".to_string(),
            });
        }

        let stylesheets = if target.css.inject {
            Vec::new()
        } else {
            vec![format!("/{}", params.paths.css)]
        };

        Ok(TemplateSettings {
            template,
            output: build_relative(&target.paths.build, &target.html.filename),
            stylesheets,
            scripts: vec![format!("/{}", params.paths.js)],
            urls: self.urls(params).urls,
        })
    }

    pub(super) fn copy(&self, params: &BuildParameters) -> CopySettings {
        CopySettings {
            files: params.copy.clone(),
        }
    }

    pub(super) fn compression(&self, params: &BuildParameters) -> CompressionSettings {
        let all = &params.target_rules.all;
        CompressionSettings {
            folder: params.target.folders.build.display().to_string(),
            include: all.include.clone(),
            exclude: all.exclude.clone(),
        }
    }

    pub(super) fn minifier(&self, params: &BuildParameters) -> MinifierSettings {
        MinifierSettings {
            sourcemap: params.output.sourcemap,
        }
    }

    pub(super) fn visualizer(&self, params: &BuildParameters) -> VisualizerSettings {
        VisualizerSettings {
            filename: build_relative(&params.target.paths.build, "stats.html"),
            open: true,
            template: "treemap".to_string(),
        }
    }
}
