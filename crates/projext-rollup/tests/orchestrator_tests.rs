mod helpers;

use helpers::*;
use projext_rollup::{
    BuildType, ChunkNaming, Error, OutputFormat, RollupConfiguration, TargetType,
};
use projext_rollup_config::TargetOutput;
use serde_json::json;
use std::path::PathBuf;

#[test]
fn node_development_end_to_end() {
    let rollup = RollupConfiguration::new(services()).unwrap();
    let target = node_target("app");

    let config = rollup.get_config(&target, BuildType::Development).unwrap();
    assert_eq!(config.input, "src/app/index.js");
    assert_eq!(config.output.file(), Some("./dist/app/app.js"));
    assert_eq!(config.output.format, OutputFormat::Cjs);
    assert!(!config.output.sourcemap);
    assert_eq!(config.output.name, "app");
    assert_eq!(config.output.exports, None);

    let params = rollup
        .build_parameters(&target, BuildType::Development)
        .unwrap();
    assert!(params.copy.is_empty());

    let output = serde_json::to_value(&config.output).unwrap();
    assert_eq!(
        output,
        json!({
            "file": "./dist/app/app.js",
            "format": "cjs",
            "sourcemap": false,
            "name": "app",
        })
    );
}

#[test]
fn bundled_node_target_copies_what_the_registry_returns() {
    let targets = StubTargets {
        copy: vec![copy_file("src/app/assets", "dist/app/assets")],
        ..StubTargets::default()
    };
    let rollup =
        RollupConfiguration::new(services_with(targets, Default::default())).unwrap();

    let mut target = node_target("app");
    target.bundle = true;

    let params = rollup
        .build_parameters(&target, BuildType::Development)
        .unwrap();
    assert_eq!(params.copy, vec![copy_file("src/app/assets", "dist/app/assets")]);

    let config = rollup.get_config(&target, BuildType::Development).unwrap();
    let copy = config
        .plugin(projext_rollup::PluginKind::Copy)
        .map(|plugin| plugin.settings.clone());
    assert_eq!(
        copy,
        Some(json!({ "files": [{ "from": "src/app/assets", "to": "dist/app/assets" }] }))
    );
}

#[test]
fn browser_targets_always_ask_for_the_copy_list() {
    let targets = StubTargets {
        copy: vec![copy_file("src/front/favicon.ico", "dist/front/favicon.ico")],
        ..StubTargets::default()
    };
    let rollup =
        RollupConfiguration::new(services_with(targets, Default::default())).unwrap();

    let params = rollup
        .build_parameters(&browser_target("front"), BuildType::Production)
        .unwrap();
    assert_eq!(params.copy.len(), 1);
}

#[test]
fn fixed_hash_makes_output_deterministic() {
    let rollup = RollupConfiguration::new(services()).unwrap();
    let mut target = browser_target("front");
    target.output.production = target.output.production.clone().with_chunks();

    let first = rollup.get_config(&target, BuildType::Production).unwrap();
    let second = rollup.get_config(&target, BuildType::Production).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let output = serde_json::to_value(&first.output).unwrap();
    assert_eq!(output["entryFileNames"], json!("front.abc123.js"));
    assert_eq!(output["chunkFileNames"], json!("front.abc123.[name].js"));
    assert_eq!(output["dir"], json!("./dist/front/statics/js"));
    assert_eq!(output["format"], json!("es"));
}

#[test]
fn chunk_flag_is_normalized_before_building_the_output() {
    let rollup = RollupConfiguration::new(services()).unwrap();
    let mut target = node_target("app");
    target.output.development = TargetOutput::new("out/bundle.js").with_chunks();

    let params = rollup
        .build_parameters(&target, BuildType::Development)
        .unwrap();
    assert_eq!(
        params.paths.js_chunks,
        ChunkNaming::Chunked("out/bundle.[name].js".to_string())
    );
    assert_eq!(params.output.dir(), Some("./dist/app/out"));
    assert_eq!(params.output.file(), None);
    // Node applications keep CommonJS when split
    assert_eq!(params.output.format, OutputFormat::Cjs);
}

#[test]
fn definitions_include_env_node_env_and_version() {
    let targets = StubTargets {
        env: [("API_URL".to_string(), "http://localhost".to_string())]
            .into_iter()
            .collect(),
        ..StubTargets::default()
    };
    let rollup =
        RollupConfiguration::new(services_with(targets, package(&[], &[]))).unwrap();

    let params = rollup
        .build_parameters(&node_target("app"), BuildType::Production)
        .unwrap();

    let keys: Vec<&str> = params.definitions.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["process.env.API_URL", "process.env.NODE_ENV", "process.env.VERSION"]
    );
    assert_eq!(params.definitions["process.env.API_URL"], "\"http://localhost\"");
    assert_eq!(params.definitions["process.env.NODE_ENV"], "\"production\"");
    assert_eq!(params.definitions["process.env.VERSION"], "\"1.2.3\"");
}

#[test]
fn browser_configuration_is_defined_and_watched() {
    let targets = StubTargets {
        browser: projext_rollup::BrowserTargetConfiguration {
            configuration: json!({ "api": "https://example.com" }),
            files: vec![PathBuf::from("config/front.config.json")],
        },
        ..StubTargets::default()
    };
    let rollup =
        RollupConfiguration::new(services_with(targets, Default::default())).unwrap();

    let mut target = browser_target("front");
    target.configuration.enabled = true;

    let params = rollup
        .build_parameters(&target, BuildType::Development)
        .unwrap();
    assert_eq!(
        params.definitions["process.env.CONFIG"],
        r#"{"api":"https://example.com"}"#
    );
    assert_eq!(params.additional_watch, vec!["config/front.config.json"]);

    // Node targets never read the browser configuration
    let mut node = node_target("api");
    node.configuration.enabled = true;
    let params = rollup
        .build_parameters(&node, BuildType::Development)
        .unwrap();
    assert!(!params.definitions.contains_key("process.env.CONFIG"));
}

#[test]
fn missing_target_type_configuration_fails() {
    let mut rollup = RollupConfiguration::new(services()).unwrap();
    rollup
        .configurations_mut()
        .remove(TargetType::Node, BuildType::Development);
    rollup
        .configurations_mut()
        .remove(TargetType::Node, BuildType::Production);

    let result = rollup.get_config(&node_target("app"), BuildType::Development);
    assert!(matches!(
        result,
        Err(Error::UnsupportedTargetType(TargetType::Node))
    ));
}

#[test]
fn missing_build_type_configuration_fails() {
    let mut rollup = RollupConfiguration::new(services()).unwrap();
    rollup
        .configurations_mut()
        .remove(TargetType::Browser, BuildType::Production);

    let error = rollup
        .get_config(&browser_target("front"), BuildType::Production)
        .unwrap_err();
    assert!(matches!(
        error,
        Error::UnsupportedBuildType {
            target_type: TargetType::Browser,
            build_type: BuildType::Production,
        }
    ));
    assert!(error.to_string().contains("production"));

    // The other build type is still there
    assert!(
        rollup
            .get_config(&browser_target("front"), BuildType::Development)
            .is_ok()
    );
}

#[test]
fn missing_entry_fails() {
    let rollup = RollupConfiguration::new(services()).unwrap();
    let mut target = node_target("app");
    target.entry.production = None;

    let result = rollup.get_config(&target, BuildType::Production);
    assert!(matches!(result, Err(Error::MissingEntry { .. })));
    assert!(rollup.get_config(&target, BuildType::Development).is_ok());
}

#[test]
fn invalid_services_are_rejected_at_construction() {
    let services = services().with_plugin_info(projext_rollup::PluginInfo {
        name: String::new(),
        external: vec![],
    });
    assert!(matches!(
        RollupConfiguration::new(services),
        Err(Error::InvalidCollaborator(_))
    ));
}
