//! Rollup output descriptor.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::params::{ChunkNaming, FormattedPaths};
use crate::utils::{basename, build_relative, camel_case, dirname};
use crate::{BuildType, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Cjs,
    Umd,
    Iife,
    Es,
}

impl OutputFormat {
    /// Format for a library target: `commonjs2` is CommonJS, anything else is UMD
    pub fn from_library_target(library_target: &str) -> Self {
        if library_target.eq_ignore_ascii_case("commonjs2") {
            Self::Cjs
        } else {
            Self::Umd
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputExports {
    Auto,
    Default,
    Named,
    None,
}

/// Where the bundle is written: one file, or a directory for code splitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputLocation {
    File {
        file: String,
    },
    Split {
        dir: String,
        #[serde(rename = "entryFileNames")]
        entry_file_names: String,
        #[serde(rename = "chunkFileNames")]
        chunk_file_names: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDescriptor {
    #[serde(flatten)]
    pub location: OutputLocation,

    pub format: OutputFormat,

    pub sourcemap: bool,

    /// Global variable name for UMD/IIFE bundles
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exports: Option<OutputExports>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub globals: IndexMap<String, String>,
}

impl OutputDescriptor {
    pub fn file(&self) -> Option<&str> {
        match &self.location {
            OutputLocation::File { file } => Some(file),
            OutputLocation::Split { .. } => None,
        }
    }

    pub fn dir(&self) -> Option<&str> {
        match &self.location {
            OutputLocation::File { .. } => None,
            OutputLocation::Split { dir, .. } => Some(dir),
        }
    }
}

/// Build the output descriptor of a target.
///
/// Library targets map their `library_target` to a format and export named
/// bindings. Applications are CommonJS on Node and IIFE in the browser, except
/// that a code-split browser application is emitted as ES modules since IIFE
/// can't hold more than one chunk.
pub fn build_output(
    target: &Target,
    paths: &FormattedPaths,
    build_type: BuildType,
) -> OutputDescriptor {
    let mut format = if target.library {
        OutputFormat::from_library_target(&target.library_options.library_target)
    } else if target.is_node() {
        OutputFormat::Cjs
    } else {
        OutputFormat::Iife
    };

    let js = build_relative(&target.paths.build, &paths.js);
    let location = match &paths.js_chunks {
        ChunkNaming::Single => OutputLocation::File { file: js },
        ChunkNaming::Chunked(template) => {
            if target.is_browser() && !target.library {
                format = OutputFormat::Es;
            }
            OutputLocation::Split {
                dir: dirname(&js).to_string(),
                entry_file_names: basename(&paths.js).to_string(),
                chunk_file_names: basename(template).to_string(),
            }
        }
    };

    OutputDescriptor {
        location,
        format,
        sourcemap: *target.source_map.get(build_type),
        name: camel_case(&target.name),
        exports: target.library.then_some(OutputExports::Named),
        globals: IndexMap::new(),
    }
}
