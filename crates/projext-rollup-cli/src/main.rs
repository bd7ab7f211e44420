//! projext-rollup CLI entry point.

use clap::Parser;
use miette::Result;
use projext_rollup_cli::{cli, commands, error, logger, settings, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let settings =
        settings::CliSettings::load(args.command.project()).map_err(error::cli_error_to_miette)?;

    logger::init_logger(
        args.verbose,
        args.quiet,
        args.no_color,
        settings.log_level.as_deref(),
    );
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args, &settings),
        cli::Command::Targets(targets_args) => commands::targets_execute(targets_args, &settings),
    };

    result.map_err(error::cli_error_to_miette)
}
