//! CLI argument definitions for the outlier report.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use outlier_core::OutlierMethod;

#[derive(Parser)]
#[command(
    name = "outlier-report",
    version,
    about = "Quantify missing values and outliers in the numeric columns of a CSV file",
    long_about = "Classify every value of each numeric column as missing, outlier or normal.\n\n\
                  Outliers are detected with either the interquartile-range rule \
                  (1.5 x IQR fences) or the z-score rule (|z| > 3)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report missing/outlier/normal counts for every numeric column.
    Report(ReportArgs),

    /// Print the rows of one column that fall into a category.
    Rows(RowsArgs),

    /// List the supported outlier methods.
    Methods,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Outlier method: interquartile (iqr) or zscore (overrides the config file).
    #[arg(long = "method", value_name = "METHOD")]
    pub method: Option<OutlierMethod>,

    /// Only report these columns (comma separated; overrides the config file).
    #[arg(long = "columns", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// TOML file with `method` and a `[report]` table.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RowsArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Column to classify.
    #[arg(long = "column")]
    pub column: String,

    /// Which rows to print.
    #[arg(long = "category", value_enum, default_value = "outliers")]
    pub category: CategoryArg,

    /// Outlier method: interquartile (iqr) or zscore.
    #[arg(long = "method", value_name = "METHOD", default_value = "zscore")]
    pub method: OutlierMethod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Missing,
    NonMissing,
    Outliers,
    NonOutliers,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
