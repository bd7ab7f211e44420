use projext_rollup::BuildType;

use super::utils::{load_rollup, to_json};
use crate::cli::ConfigArgs;
use crate::error::Result;
use crate::settings::CliSettings;

pub fn config_execute(args: ConfigArgs, settings: &CliSettings) -> Result<()> {
    let output = render_config(&args, settings)?;
    println!("{output}");
    Ok(())
}

/// The configuration (or build parameters) of the target as JSON
pub fn render_config(args: &ConfigArgs, settings: &CliSettings) -> Result<String> {
    let rollup = load_rollup(settings)?;
    let build_type = BuildType::from(args.build_type);

    if args.params {
        let target = rollup.services().targets.get_target(&args.target)?;
        let params = rollup.build_parameters(&target, build_type)?;
        return to_json(&params, settings.pretty);
    }

    let config = rollup.get_config_for(&args.target, build_type)?;
    tracing::debug!(
        name = %args.target,
        build_type = %build_type,
        plugins = config.plugins.len(),
        "assembled configuration"
    );
    to_json(&config, settings.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{BuildTypeArg, ProjectArgs};
    use crate::error::CliError;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("projext.toml"),
            "[targets.api]\ntype = \"node\"\n\n[targets.front]\ntype = \"browser\"\n",
        )
        .unwrap();
        dir
    }

    fn settings(dir: &TempDir) -> CliSettings {
        CliSettings {
            root: dir.path().to_path_buf(),
            hash: Some("cafe".to_string()),
            ..CliSettings::default()
        }
    }

    fn args(target: &str, build_type: BuildTypeArg) -> ConfigArgs {
        ConfigArgs {
            target: target.to_string(),
            build_type,
            params: false,
            project: ProjectArgs::default(),
        }
    }

    #[test]
    fn renders_the_configuration() {
        let dir = project();
        let output = render_config(&args("front", BuildTypeArg::Production), &settings(&dir)).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["input"], "src/front/index.js");
        assert_eq!(value["output"]["file"], "./dist/front/statics/js/front.cafe.js");
        assert_eq!(value["output"]["format"], "iife");
        assert_eq!(value["plugins"][0]["name"], "stats-reset");
    }

    #[test]
    fn renders_the_build_parameters() {
        let dir = project();
        let mut args = args("api", BuildTypeArg::Development);
        args.params = true;

        let output = render_config(&args, &settings(&dir)).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["buildType"], "development");
        assert_eq!(value["definitions"]["process.env.NODE_ENV"], "\"development\"");
    }

    #[test]
    fn pretty_output_is_indented() {
        let dir = project();
        let mut settings = settings(&dir);
        settings.pretty = true;

        let output = render_config(&args("api", BuildTypeArg::Development), &settings).unwrap();
        assert!(output.starts_with("{\n  \"input\""));
    }

    #[test]
    fn unknown_target_fails() {
        let dir = project();
        let result = render_config(&args("worker", BuildTypeArg::Development), &settings(&dir));
        assert!(matches!(result, Err(CliError::Rollup(_))));
    }
}
