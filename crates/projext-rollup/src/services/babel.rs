use serde_json::{Value, json};

use super::BabelConfigProvider;
use crate::Target;

const BROWSERS: [&str; 4] = ["chrome", "firefox", "safari", "edge"];
const MOBILE_BROWSERS: [&str; 2] = ["ios_saf", "android"];

/// `@babel/preset-env` configuration built from the target's babel options.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBabelConfig;

impl BabelConfigProvider for DefaultBabelConfig {
    fn get_config_for_target(&self, target: &Target) -> Value {
        let env_targets = if target.is_node() {
            json!({ "node": "current" })
        } else {
            let versions = target.babel.browser_versions;
            let mut browsers: Vec<String> = BROWSERS
                .iter()
                .map(|browser| format!("last {versions} {browser} versions"))
                .collect();
            if target.babel.mobile_support {
                browsers.extend(
                    MOBILE_BROWSERS
                        .iter()
                        .map(|browser| format!("last {versions} {browser} versions")),
                );
            }
            json!({ "browsers": browsers })
        };

        json!({
            "presets": [
                ["@babel/preset-env", { "targets": env_targets, "modules": false }]
            ],
            "plugins": target.babel.features,
        })
    }
}
