//! CLI argument definitions for the review insights tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "review-insights",
    version,
    about = "Customer Review Insights - classify and forward review data",
    long_about = "Ingest a CSV of customer reviews, auto-detect the review text column,\n\
                  classify each review by sentiment, topic, and feedback type, then\n\
                  filter the results and optionally forward them to a webhook."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Allow review text in trace-level logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a reviews CSV file: detect, classify, filter, and export.
    Analyze(AnalyzeArgs),

    /// List the heuristic topic and feedback-type vocabulary.
    Labels,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the CSV file containing reviews.
    #[arg(value_name = "REVIEWS_CSV")]
    pub reviews_csv: PathBuf,

    /// Classification strategy to use.
    ///
    /// The remote strategy needs REVIEW_API_KEY and REVIEW_PROJECT_ID in the
    /// environment and issues one service call per review per dimension.
    #[arg(long = "strategy", value_enum, default_value = "heuristic")]
    pub strategy: StrategyArg,

    /// Show only reviews with this topic label ("All" disables the filter).
    #[arg(long = "topic", value_name = "LABEL", default_value = "All")]
    pub topic: String,

    /// Show only reviews with this feedback-type label ("All" disables the filter).
    #[arg(long = "type", value_name = "LABEL", default_value = "All")]
    pub feedback_type: String,

    /// Forward the annotated view to this webhook URL after classification.
    #[arg(long = "webhook-url", value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Maximum number of rows to render in the terminal table.
    #[arg(long = "limit", value_name = "N", default_value_t = 20)]
    pub limit: usize,

    /// Skip the label distribution summary.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Heuristic,
    Remote,
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
