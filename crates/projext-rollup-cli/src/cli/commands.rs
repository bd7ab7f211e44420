use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::BuildTypeArg;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the Rollup configuration of a target as JSON
    ///
    /// The configuration holds the input, the output descriptor, the ordered
    /// plugin descriptors, the externals and the watch options.
    ///
    /// Examples:
    ///   projext-rollup config front
    ///   projext-rollup config api --type production --pretty
    Config(ConfigArgs),

    /// List the targets declared in the project
    Targets(TargetsArgs),
}

impl Command {
    pub fn project(&self) -> &ProjectArgs {
        match self {
            Command::Config(args) => &args.project,
            Command::Targets(args) => &args.project,
        }
    }
}

/// Options shared by every command that loads the project
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Value used for `[hash]` placeholders instead of a timestamp
    #[arg(long, value_name = "HASH")]
    pub hash: Option<String>,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Name of the target, as declared under `[targets.<name>]`
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Build type of the configuration
    #[arg(short = 't', long = "type", value_enum, default_value = "development")]
    pub build_type: BuildTypeArg,

    /// Print the build parameters instead of the configuration
    #[arg(long)]
    pub params: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the targets command
#[derive(Args, Debug)]
pub struct TargetsArgs {
    /// Print the targets as a JSON array
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}
