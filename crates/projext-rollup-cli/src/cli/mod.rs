//! Command-line interface definition.
//!
//! - `projext-rollup config <target>` - print the Rollup configuration of a target
//! - `projext-rollup targets` - list the targets of the project

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{Command, ConfigArgs, ProjectArgs, TargetsArgs};
pub use enums::BuildTypeArg;

/// Rollup configurations for projext targets
#[derive(Parser, Debug)]
#[command(
    name = "projext-rollup",
    version,
    about = "Rollup configurations for projext targets",
    long_about = "Reads a projext project and prints the Rollup configuration of its targets\n\
                  as JSON: input, output, ordered plugin descriptors, externals and watch options."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_defaults_to_development() {
        let cli = Cli::try_parse_from(["projext-rollup", "config", "front"]).unwrap();
        let Command::Config(args) = cli.command else {
            panic!("expected the config command");
        };
        assert_eq!(args.target, "front");
        assert_eq!(args.build_type, BuildTypeArg::Development);
        assert!(!args.params);
        assert!(!args.project.pretty);
    }

    #[test]
    fn config_accepts_type_and_globals_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "projext-rollup",
            "config",
            "api",
            "--type",
            "production",
            "--pretty",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Command::Config(args) = cli.command else {
            panic!("expected the config command");
        };
        assert_eq!(args.build_type, BuildTypeArg::Production);
        assert!(args.project.pretty);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["projext-rollup", "-v", "-q", "targets"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_build_type_is_rejected() {
        let result = Cli::try_parse_from(["projext-rollup", "config", "api", "-t", "staging"]);
        assert!(result.is_err());
    }
}
