//! Tests for the template merge applied under each target.

use projext_rollup_config::{ConfigError, ProjectDiscovery};
use std::fs;
use tempfile::TempDir;

fn load(content: &str) -> projext_rollup_config::ProjectConfig {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("projext.toml"), content).expect("write project");
    ProjectDiscovery::new(dir.path()).load().expect("load project")
}

#[test]
fn target_values_replace_template_primitives() {
    let project = load(
        r#"
[templates.node]
run_on_development = true
uglify_on_production = false

[targets.api]
run_on_development = false
"#,
    );

    let api = project.target("api").unwrap();
    assert!(!api.run_on_development);
    assert!(!api.uglify_on_production);
}

#[test]
fn nested_tables_merge_field_by_field() {
    let project = load(
        r#"
[templates.browser.dev_server]
port = 8080
host = "0.0.0.0"

[targets.front]
type = "browser"

[targets.front.dev_server]
port = 9000
"#,
    );

    let front = project.target("front").unwrap();
    assert_eq!(front.dev_server.port, 9000);
    assert_eq!(front.dev_server.host, "0.0.0.0");
}

#[test]
fn arrays_are_replaced_not_merged() {
    let project = load(
        r#"
[templates.node]
exclude_modules = ["colors", "wootils"]

[targets.api]
exclude_modules = ["express"]
"#,
    );

    let api = project.target("api").unwrap();
    assert_eq!(api.exclude_modules, vec!["express".to_string()]);
}

#[test]
fn templates_only_apply_to_their_type() {
    let project = load(
        r#"
[templates.browser]
library = true

[targets.api]
type = "node"
"#,
    );

    assert!(!project.target("api").unwrap().library);
}

#[test]
fn explicit_paths_are_kept() {
    let project = load(
        r#"
[targets.api.paths]
source = "src/app"
build = "build"
"#,
    );

    let api = project.target("api").unwrap();
    assert_eq!(api.paths.source, "src/app");
    assert_eq!(api.paths.build, "build");
    assert!(api.folders.source.ends_with("src/app"));
}

#[test]
fn invalid_field_types_report_the_target() {
    let project = load(
        r#"
[targets.api]
library = "yes"
"#,
    );

    match project.target("api") {
        Err(ConfigError::InvalidTarget { target, .. }) => assert_eq!(target, "api"),
        other => panic!("expected InvalidTarget, got {other:?}"),
    }
}
