use serde::{Deserialize, Serialize};

use crate::target::helpers::{
    default_css_output, default_fonts_output, default_images_output, default_js_output,
};
use crate::target::types::JsChunks;

/// Output path templates for one build type.
///
/// Paths are relative to the target build folder and may contain the
/// `[target-name]` and `[hash]` placeholders, plus the Rollup asset
/// placeholders (`[name]`, `[ext]`) that are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetOutput {
    /// Main JavaScript file
    #[serde(default = "default_js_output")]
    pub js: String,

    /// Chunk file naming: `true` derives a template from `js`, a string is the template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_chunks: Option<JsChunks>,

    /// Extracted stylesheet
    #[serde(default = "default_css_output")]
    pub css: String,

    #[serde(default = "default_fonts_output")]
    pub fonts: String,

    #[serde(default = "default_images_output")]
    pub images: String,
}

impl TargetOutput {
    pub fn new(js: impl Into<String>) -> Self {
        Self {
            js: js.into(),
            ..Self::default()
        }
    }

    /// Request code splitting with a synthesized chunk template
    pub fn with_chunks(mut self) -> Self {
        self.js_chunks = Some(JsChunks::Flag(true));
        self
    }

    pub fn with_chunk_template(mut self, template: impl Into<String>) -> Self {
        self.js_chunks = Some(JsChunks::Template(template.into()));
        self
    }
}

impl Default for TargetOutput {
    fn default() -> Self {
        Self {
            js: default_js_output(),
            js_chunks: None,
            css: default_css_output(),
            fonts: default_fonts_output(),
            images: default_images_output(),
        }
    }
}
