//! Job Application Recorder CLI.

use clap::Parser;
use jobrec_settings::SettingsStore;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_add, run_currencies, run_init, run_list};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let settings = match settings_store(&cli) {
        Ok(store) => store,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };

    let exit_code = match &cli.command {
        Command::Init(args) => exit_from(run_init(&settings, args)),
        Command::Add(args) => match run_add(&settings, args) {
            Ok(code) => code,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::List(args) => exit_from(run_list(&settings, args)),
        Command::Currencies(args) => exit_from(run_currencies(args)),
    };
    std::process::exit(exit_code);
}

fn exit_from(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

fn settings_store(cli: &Cli) -> anyhow::Result<SettingsStore> {
    if let Some(path) = &cli.settings_file {
        return Ok(SettingsStore::new(path.clone()));
    }
    SettingsStore::from_default_location()
        .ok_or_else(|| anyhow::anyhow!("could not determine the settings directory"))
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
    }
}
