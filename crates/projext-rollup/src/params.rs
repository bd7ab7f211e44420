//! Build parameters handed to every configuration file.

use indexmap::IndexMap;
use projext_rollup_config::{JsChunks, TargetOutput};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputDescriptor;
use crate::services::TargetFileRules;
use crate::utils::chunk_template;
use crate::{BuildType, Target};

const TARGET_NAME_PLACEHOLDER: &str = "[target-name]";
const HASH_PLACEHOLDER: &str = "[hash]";

/// How chunk files are named once `js_chunks` is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "template", rename_all = "lowercase")]
pub enum ChunkNaming {
    /// Everything goes in one file
    Single,
    /// Code splitting, with the chunk file template
    Chunked(String),
}

impl ChunkNaming {
    pub fn is_chunked(&self) -> bool {
        matches!(self, Self::Chunked(_))
    }
}

/// The target output paths for one build, with the placeholders resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedPaths {
    pub js: String,
    pub js_chunks: ChunkNaming,
    pub css: String,
    pub fonts: String,
    pub images: String,
}

impl FormattedPaths {
    /// Resolve `[target-name]` and `[hash]` in every path of `output`.
    ///
    /// The Rollup placeholders (`[name]`, `[ext]`) are left untouched.
    pub fn format(output: &TargetOutput, target_name: &str, hash: &str) -> Self {
        let resolve = |path: &str| {
            path.replace(TARGET_NAME_PLACEHOLDER, target_name)
                .replace(HASH_PLACEHOLDER, hash)
        };

        let js = resolve(&output.js);
        let js_chunks = match &output.js_chunks {
            Some(JsChunks::Flag(true)) => ChunkNaming::Chunked(chunk_template(&js)),
            Some(JsChunks::Template(template)) => ChunkNaming::Chunked(resolve(template)),
            Some(JsChunks::Flag(false)) | None => ChunkNaming::Single,
        };

        Self {
            js,
            js_chunks,
            css: resolve(&output.css),
            fonts: resolve(&output.fonts),
            images: resolve(&output.images),
        }
    }
}

/// A file copied into the build folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyFile {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Everything a configuration file needs to produce a Rollup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildParameters {
    /// Entry file, relative to the project root
    pub input: String,

    pub output: OutputDescriptor,

    pub target: Target,

    pub target_rules: TargetFileRules,

    /// Replacement expressions, already JSON-encoded
    pub definitions: IndexMap<String, String>,

    /// Files the definitions were read from
    #[serde(default)]
    pub definition_files: Vec<String>,

    pub build_type: BuildType,

    pub paths: FormattedPaths,

    pub copy: Vec<CopyFile>,

    /// Extra files watched in development
    pub additional_watch: Vec<String>,

    pub analyze: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_resolves_placeholders() {
        let output = TargetOutput {
            js: "statics/js/[target-name].[hash].js".to_string(),
            css: "statics/styles/[target-name].[hash].css".to_string(),
            ..TargetOutput::default()
        };

        let paths = FormattedPaths::format(&output, "front", "123");
        assert_eq!(paths.js, "statics/js/front.123.js");
        assert_eq!(paths.css, "statics/styles/front.123.css");
        assert_eq!(paths.fonts, "statics/fonts/[name].[ext]");
        assert_eq!(paths.js_chunks, ChunkNaming::Single);
    }

    #[test]
    fn chunk_flag_synthesizes_a_template() {
        let output = TargetOutput::new("out/bundle.js").with_chunks();
        let paths = FormattedPaths::format(&output, "app", "1");
        assert_eq!(
            paths.js_chunks,
            ChunkNaming::Chunked("out/bundle.[name].js".to_string())
        );
    }

    #[test]
    fn chunk_template_is_formatted() {
        let output = TargetOutput::new("app.js").with_chunk_template("chunks/[target-name].[name].js");
        let paths = FormattedPaths::format(&output, "app", "1");
        assert_eq!(
            paths.js_chunks,
            ChunkNaming::Chunked("chunks/app.[name].js".to_string())
        );
    }

    #[test]
    fn disabled_chunks_are_single() {
        let mut output = TargetOutput::new("app.js");
        output.js_chunks = Some(JsChunks::Flag(false));
        let paths = FormattedPaths::format(&output, "app", "1");
        assert!(!paths.js_chunks.is_chunked());
    }
}
