use serde::{Deserialize, Serialize};

use super::FileRulesProvider;
use crate::Target;

/// Glob filters for one category of files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRule {
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

impl FileRule {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    /// Union of several rules, keeping the first occurrence of each glob
    pub fn union<'a>(rules: impl IntoIterator<Item = &'a FileRule>) -> Self {
        let mut merged = Self::default();
        for rule in rules {
            for glob in &rule.include {
                if !merged.include.contains(glob) {
                    merged.include.push(glob.clone());
                }
            }
            for glob in &rule.exclude {
                if !merged.exclude.contains(glob) {
                    merged.exclude.push(glob.clone());
                }
            }
        }
        merged
    }
}

/// File rules of a target, per asset category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFileRules {
    pub js: FileRule,
    pub scss: FileRule,
    pub css: FileRule,
    pub fonts: FileRule,
    pub images: FileRule,
    pub favicon: FileRule,

    /// Every file the build emits
    pub all: FileRule,
}

/// Rules derived from the target source path and `include_modules`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFileRules;

impl FileRulesProvider for DefaultFileRules {
    fn get_rules_for_target(&self, target: &Target) -> TargetFileRules {
        let source = target.paths.source.trim_end_matches('/');
        let globs = |patterns: &[&str]| patterns.iter().map(|p| p.to_string()).collect::<Vec<_>>();

        let mut js_include = vec![format!("{source}/**/*.{{js,jsx}}")];
        js_include.extend(
            target
                .include_modules
                .iter()
                .map(|module| format!("node_modules/{module}/**/*.{{js,jsx}}")),
        );
        let js = FileRule::new(js_include, Vec::new());

        let scss = FileRule::new(globs(&["**/*.scss"]), Vec::new());
        let css = FileRule::new(globs(&["**/*.css"]), Vec::new());
        let fonts = FileRule::new(
            globs(&[
                "**/fonts/**/*.svg",
                "**/*.{woff,woff2,ttf,eot}",
            ]),
            Vec::new(),
        );
        let images = FileRule::new(
            globs(&["**/*.{png,jpg,jpeg,gif,svg,webp}"]),
            globs(&["**/fonts/**", "**/favicon.*"]),
        );
        let favicon = FileRule::new(globs(&["**/favicon.{ico,png}"]), Vec::new());

        let all = FileRule::new(
            FileRule::union([&js, &scss, &css, &fonts, &images, &favicon]).include,
            Vec::new(),
        );

        TargetFileRules {
            js,
            scss,
            css,
            fonts,
            images,
            favicon,
            all,
        }
    }
}
