use serde::Serialize;

use super::utils::{load_project, to_json};
use crate::cli::TargetsArgs;
use crate::error::Result;
use crate::settings::CliSettings;
use crate::ui;

#[derive(Debug, Serialize)]
struct TargetSummary<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    target_type: &'a str,
    library: bool,
}

pub fn targets_execute(args: TargetsArgs, settings: &CliSettings) -> Result<()> {
    let output = render_targets(&args, settings)?;
    if output.is_empty() {
        ui::warning("the project doesn't declare any targets");
    } else {
        println!("{output}");
    }
    Ok(())
}

/// Every target of the project, resolved, one per line or as a JSON array
pub fn render_targets(args: &TargetsArgs, settings: &CliSettings) -> Result<String> {
    let project = load_project(settings)?;
    let targets = project.resolve_targets()?;

    if args.json {
        let summaries: Vec<TargetSummary> = targets
            .iter()
            .map(|target| TargetSummary {
                name: &target.name,
                target_type: target.target_type.as_str(),
                library: target.library,
            })
            .collect();
        return to_json(&summaries, settings.pretty);
    }

    let width = targets.iter().map(|target| target.name.len()).max().unwrap_or(0);
    let rows: Vec<String> = targets
        .iter()
        .map(|target| ui::target_row(&target.name, target.target_type.as_str(), width))
        .collect();
    Ok(rows.join("\n"))
}
