//! Requested-analysis submitter CLI.

use clap::{ColorChoice, Parser};
use motion_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_preview, run_submit};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Submit(args) => run_submit(args),
        Command::Preview(args) => run_preview(args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
///
/// An explicit `--log-level` wins over `-v/-q`; either one disables the
/// `RUST_LOG` override.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit_level = cli.verbosity.is_present() || cli.log_level.is_some();
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: cli
            .log_level
            .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from),
        use_env_filter: !explicit_level,
        with_ansi,
        format: LogFormat::from(cli.log_format),
        log_file: cli.log_file.clone(),
        log_ids: cli.log_ids,
        ..LogConfig::default()
    }
}
