//! Settings of the stylesheet plugins.

use serde::{Deserialize, Serialize};

use super::PluginSettingsBuilder;
use super::assets::AssetUrlRule;
use crate::params::BuildParameters;
use crate::services::FileRule;
use crate::utils::build_relative;

/// CSS modules transform applied by the style processor.
///
/// With modules enabled the processor returns `{ css, locals }` instead of a
/// plain stylesheet string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssModulesSettings {
    pub generate_scoped_name: String,
}

/// Settings shared by the `sass` and `css` plugins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSettings {
    pub include: Vec<String>,
    pub exclude: Vec<String>,

    /// Inject the styles from the bundle instead of extracting them
    pub insert: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<CssModulesSettings>,

    pub source_map: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylesheetAssetsSettings {
    /// File whose `url(...)` references get rewritten
    pub stylesheet: String,
    pub urls: Vec<AssetUrlRule>,
}

impl PluginSettingsBuilder {
    pub(super) fn sass(&self, params: &BuildParameters) -> StyleSettings {
        self.style(params, &params.target_rules.scss)
    }

    pub(super) fn css(&self, params: &BuildParameters) -> StyleSettings {
        self.style(params, &params.target_rules.css)
    }

    fn style(&self, params: &BuildParameters, rule: &FileRule) -> StyleSettings {
        let target = &params.target;
        let inject = target.css.inject;
        let scoped_name = if params.build_type.is_development() {
            "[name]__[local]___[hash:base64:5]"
        } else {
            "[hash:base64:5]"
        };

        StyleSettings {
            include: rule.include.clone(),
            exclude: rule.exclude.clone(),
            insert: inject,
            output: (!inject).then(|| build_relative(&target.paths.build, &params.paths.css)),
            modules: target.css.modules.then(|| CssModulesSettings {
                generate_scoped_name: scoped_name.to_string(),
            }),
            source_map: params.output.sourcemap,
        }
    }

    /// The stylesheet is the bundle itself when styles are injected
    pub(super) fn stylesheet_assets(&self, params: &BuildParameters) -> StylesheetAssetsSettings {
        let target = &params.target;
        let stylesheet = if target.css.inject {
            &params.paths.js
        } else {
            &params.paths.css
        };

        let (fonts, images, _) = self.asset_rules(params);
        StylesheetAssetsSettings {
            stylesheet: build_relative(&target.paths.build, stylesheet),
            urls: vec![fonts, images],
        }
    }

    pub(super) fn stylesheet_assets_helper(&self, params: &BuildParameters) -> FileRule {
        FileRule::union([&params.target_rules.scss, &params.target_rules.css])
    }

    pub(super) fn stylesheet_modules_fixer(&self, params: &BuildParameters) -> FileRule {
        FileRule::union([&params.target_rules.scss, &params.target_rules.css])
    }
}
