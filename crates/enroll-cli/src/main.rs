//! Course registration validator CLI.

use clap::{ColorChoice, Parser};
use enroll_cli::commands::{
    CommandOutcome, ExportOptions, SessionPaths, catalog_failure_lines, is_catalog_failure,
    open_session, run_check, run_export, run_identity, run_reset, run_select,
};
use enroll_cli::logging::{LogConfig, LogFormat, init_logging};
use enroll_report::ExportFormat;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, ExportFormatArg, LogFormatArg, LogLevelArg, SessionArgs};
use crate::summary::{print_blocked, print_catalog, print_changes, print_report};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let paths = session_paths(&cli.session);
    let result = match cli.command {
        Command::Catalog(args) => open_session(&paths).map(|session| {
            print_catalog(session.index(), session.selection(), args.term);
            0
        }),
        Command::Check => run_check(&paths).map(|outcome| {
            print_outcome(&outcome);
            if outcome.report.export_enabled { 0 } else { 1 }
        }),
        Command::Select(args) => run_select(&paths, &args.ids, true).map(|outcome| {
            print_changes(&outcome.changes);
            print_outcome(&outcome);
            0
        }),
        Command::Deselect(args) => run_select(&paths, &args.ids, false).map(|outcome| {
            print_changes(&outcome.changes);
            print_outcome(&outcome);
            0
        }),
        Command::Identity(args) => {
            run_identity(&paths, args.name.as_deref(), args.id_number.as_deref()).map(|outcome| {
                print_changes(&outcome.changes);
                0
            })
        }
        Command::Reset => run_reset(&paths).map(|outcome| {
            print_outcome(&outcome);
            0
        }),
        Command::Export(args) => {
            let options = ExportOptions {
                format: match args.format {
                    ExportFormatArg::Text => ExportFormat::Text,
                    ExportFormatArg::Csv => ExportFormat::Csv,
                    ExportFormatArg::Json => ExportFormat::Json,
                },
                output_dir: args.output_dir,
                force: args.force,
                letterhead: args.letterhead,
            };
            run_export(&paths, &options).map(|outcome| match outcome.path {
                Some(path) => {
                    println!("Exported: {}", path.display());
                    0
                }
                None => {
                    print_blocked(&outcome.gate);
                    1
                }
            })
        }
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            if is_catalog_failure(&error) {
                for line in catalog_failure_lines() {
                    eprintln!("{line}");
                }
            }
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn print_outcome(outcome: &CommandOutcome) {
    print_report(
        outcome.session.index(),
        outcome.session.selection(),
        &outcome.report,
    );
}

fn session_paths(args: &SessionArgs) -> SessionPaths {
    SessionPaths {
        catalog: args.catalog.clone(),
        state: args.state.clone(),
        rules: args.rules.clone(),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
