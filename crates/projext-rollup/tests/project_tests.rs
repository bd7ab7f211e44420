//! Full runs from a project folder on disk

use projext_rollup::services::{FileOverrideFactory, FixedHash, FnOverride};
use projext_rollup::{BuildType, Error, OutputFormat, PluginKind, RollupConfiguration, Services};
use projext_rollup_config::{ConfigError, ProjectDiscovery};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PROJECT: &str = r#"
version = "2.0.0"

[targets.api]
type = "node"

[targets.front]
type = "browser"
exclude_modules = ["react"]
"#;

const PACKAGE: &str = r#"{
  "name": "my-project",
  "version": "1.0.0",
  "dependencies": { "express": "^4.0.0", "react": "^16.0.0" },
  "devDependencies": { "jest": "^24.0.0" }
}"#;

fn project_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("projext.toml"), PROJECT).unwrap();
    fs::write(dir.path().join("package.json"), PACKAGE).unwrap();
    fs::write(dir.path().join(".env"), "API_URL=http://localhost\n").unwrap();
    dir
}

fn write_override(root: &Path, name: &str, content: serde_json::Value) {
    let directory = root.join("config/rollup");
    fs::create_dir_all(&directory).unwrap();
    fs::write(directory.join(name), content.to_string()).unwrap();
}

fn rollup(root: &Path) -> RollupConfiguration {
    let project = ProjectDiscovery::new(root).load().unwrap();
    let services = Services::load(project).unwrap().with_hash(FixedHash::new("42"));
    RollupConfiguration::new(services).unwrap()
}

#[test]
fn node_target_from_project_file() {
    let dir = project_dir();
    let config = rollup(dir.path())
        .get_config_for("api", BuildType::Production)
        .unwrap();

    assert_eq!(config.input, "src/api/index.js");
    assert_eq!(config.output.file(), Some("./dist/api/api.js"));
    assert_eq!(config.output.format, OutputFormat::Cjs);
    assert!(config.external.iter().any(|name| name == "express"));
    assert!(!config.external.iter().any(|name| name == "jest"));

    let replace = config.plugin(PluginKind::Replace).unwrap();
    assert_eq!(
        replace.settings["values"],
        json!({
            "process.env.API_URL": "\"http://localhost\"",
            "process.env.NODE_ENV": "\"production\"",
            "process.env.VERSION": "\"2.0.0\"",
        })
    );
}

#[test]
fn runtime_replace_lists_its_sources() {
    let dir = project_dir();
    let rollup = rollup(dir.path());
    let env_file = dir.path().join(".env").display().to_string();

    let config = rollup.get_config_for("api", BuildType::Development).unwrap();
    let runtime = config.plugin(PluginKind::RuntimeReplace).unwrap();
    assert_eq!(runtime.settings["files"], json!([env_file]));
    assert_eq!(
        runtime.settings["values"]["process.env.NODE_ENV"],
        json!("\"development\"")
    );

    // The static stage has nothing to re-read
    let config = rollup.get_config_for("api", BuildType::Production).unwrap();
    let replace = config.plugin(PluginKind::Replace).unwrap();
    assert!(replace.settings.get("files").is_none());
}

#[test]
fn definitions_follow_env_file_changes() {
    let dir = project_dir();
    let rollup = rollup(dir.path());
    let target = ProjectDiscovery::new(dir.path())
        .load()
        .unwrap()
        .target("api")
        .unwrap();

    let before = rollup.definitions(&target, BuildType::Development).unwrap();
    fs::write(dir.path().join(".env"), "API_URL=http://example.com\n").unwrap();
    let after = rollup.definitions(&target, BuildType::Development).unwrap();

    assert_eq!(before.values["process.env.API_URL"], "\"http://localhost\"");
    assert_eq!(after.values["process.env.API_URL"], "\"http://example.com\"");
    assert_eq!(after.files, before.files);
}

#[test]
fn browser_target_from_project_file() {
    let dir = project_dir();
    let config = rollup(dir.path())
        .get_config_for("front", BuildType::Production)
        .unwrap();

    assert_eq!(config.output.file(), Some("./dist/front/statics/js/front.42.js"));
    assert_eq!(config.output.format, OutputFormat::Iife);
    assert_eq!(config.external, vec!["react"]);

    let template = config.plugin(PluginKind::Template).unwrap();
    assert_eq!(template.settings["template"], json!("src/front/index.html"));
    assert_eq!(template.settings["output"], json!("./dist/front/index.html"));
}

#[test]
fn unknown_target_name_fails() {
    let dir = project_dir();
    let result = rollup(dir.path()).get_config_for("worker", BuildType::Development);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::UnknownTarget(ref name))) if name == "worker"
    ));
}

#[test]
fn type_override_file_extends_the_configuration() {
    let dir = project_dir();
    write_override(
        dir.path(),
        "node.config.json",
        json!({ "external": ["only-this"] }),
    );
    let rollup = rollup(dir.path());

    for build_type in [BuildType::Development, BuildType::Production] {
        let config = rollup.get_config_for("api", build_type).unwrap();
        assert_eq!(config.external, vec!["only-this"]);
        assert_eq!(config.input, "src/api/index.js");
    }

    // Browser files are not affected
    let config = rollup.get_config_for("front", BuildType::Production).unwrap();
    assert_eq!(config.external, vec!["react"]);
}

#[test]
fn build_type_override_runs_after_the_type_override() {
    let dir = project_dir();
    write_override(
        dir.path(),
        "node.config.json",
        json!({ "external": ["from-type"] }),
    );
    write_override(
        dir.path(),
        "node.production.config.json",
        json!({
            "replace": true,
            "input": "src/api/server.js",
            "output": { "file": "./out.js", "format": "es", "sourcemap": true, "name": "api" },
            "plugins": [],
        }),
    );
    let rollup = rollup(dir.path());

    let config = rollup.get_config_for("api", BuildType::Production).unwrap();
    assert_eq!(config.input, "src/api/server.js");
    assert_eq!(config.output.format, OutputFormat::Es);
    assert!(config.plugins.is_empty());
    assert!(config.external.is_empty());

    let config = rollup.get_config_for("api", BuildType::Development).unwrap();
    assert_eq!(config.external, vec!["from-type"]);
}

#[test]
fn override_files_are_read_on_every_build() {
    let dir = project_dir();
    let rollup = rollup(dir.path());

    let before = rollup.get_config_for("api", BuildType::Development).unwrap();
    assert!(before.external.iter().any(|name| name == "express"));

    write_override(dir.path(), "node.config.json", json!({ "external": [] }));
    let after = rollup.get_config_for("api", BuildType::Development).unwrap();
    assert!(after.external.is_empty());
}

#[test]
fn invalid_override_file_is_reported() {
    let dir = project_dir();
    write_override(dir.path(), "node.config.json", json!(["not", "an", "object"]));

    let result = rollup(dir.path()).get_config_for("api", BuildType::Development);
    assert!(matches!(
        result,
        Err(Error::InvalidOverride { ref path, .. }) if path.ends_with("node.config.json")
    ));
}

#[test]
fn code_overrides_layer_on_file_overrides() {
    let dir = project_dir();
    write_override(
        dir.path(),
        "browser.config.json",
        json!({ "external": ["from-file"] }),
    );

    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    let overrides = FnOverride::wrapping(FileOverrideFactory::new(dir.path())).on(
        "rollup/browser.production.config.js",
        |mut config, params| {
            config.external.push(params.target.name.clone());
            Ok(config)
        },
    );
    let services = Services::load(project).unwrap().with_overrides(overrides);
    let rollup = RollupConfiguration::new(services).unwrap();

    let production = rollup.get_config_for("front", BuildType::Production).unwrap();
    assert_eq!(production.external, vec!["from-file", "front"]);

    let development = rollup
        .get_config_for("front", BuildType::Development)
        .unwrap();
    assert_eq!(development.external, vec!["from-file"]);
}

#[test]
fn code_override_errors_propagate() {
    let dir = project_dir();
    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    let overrides = FnOverride::new().on("rollup/node.config.js", |_, _| {
        Err(Error::InvalidOverride {
            path: "rollup/node.config.js".to_string(),
            message: "rejected".to_string(),
        })
    });
    let services = Services::load(project).unwrap().with_overrides(overrides);
    let rollup = RollupConfiguration::new(services).unwrap();

    let error = rollup
        .get_config_for("api", BuildType::Development)
        .unwrap_err();
    assert!(error.to_string().contains("rejected"));
}
