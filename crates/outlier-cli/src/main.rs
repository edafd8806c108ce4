//! Outlier report CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use outlier_cli::commands::{RowCategory, load_csv, run_methods, run_report, select_rows};
use outlier_cli::config::AnalysisConfig;
use outlier_cli::logging::{LogConfig, LogFormat, init_logging};
use outlier_cli::summary::print_summary_table;
use outlier_core::print_report;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{
    CategoryArg, Cli, Command, LogFormatArg, LogLevelArg, ReportArgs, ReportFormatArg, RowsArgs,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Report(args) => report(args),
        Command::Rows(args) => rows(args).map(|()| 0),
        Command::Methods => {
            run_methods();
            Ok(0)
        }
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn report(args: &ReportArgs) -> Result<i32> {
    let config = match &args.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    let config = config.with_overrides(args.method, args.columns.clone());
    let df = load_csv(&args.input)?;
    let report = run_report(&df, config.method, &config.report)?;
    match args.format {
        ReportFormatArg::Text => print_report(&report),
        ReportFormatArg::Table => print_summary_table(&report.summary()),
        ReportFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(&report.summary())?);
        }
    }
    Ok(if report.has_invariant_violations() { 1 } else { 0 })
}

fn rows(args: &RowsArgs) -> Result<()> {
    let df = load_csv(&args.input)?;
    let category = match args.category {
        CategoryArg::Missing => RowCategory::Missing,
        CategoryArg::NonMissing => RowCategory::NonMissing,
        CategoryArg::Outliers => RowCategory::Outliers,
        CategoryArg::NonOutliers => RowCategory::NonOutliers,
    };
    let subset = select_rows(&df, &args.column, category, args.method)?;
    println!("{} rows", subset.len());
    println!("{}", subset.frame());
    Ok(())
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "outlier-report",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--color",
            "never",
            "methods",
        ])
        .unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn default_flags_defer_to_environment() {
        let cli = Cli::try_parse_from(["outlier-report", "methods"]).unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
