//! CLI argument definitions for `nlpf`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "nlpf",
    version,
    about = "Text preprocessing pipelines for sentiment datasets",
    long_about = "Clean review texts for bag-of-words sentiment models.\n\n\
                  Splits sentences, drops objective ones, fixes negations, removes\n\
                  stop-words and punctuation, and writes one document per row."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Preprocess the text column of a CSV dataset.
    Preprocess(PreprocessArgs),

    /// List the stop-words removed by the pipeline.
    Stopwords(StopwordsArgs),
}

#[derive(Parser)]
pub struct PreprocessArgs {
    /// CSV file with one document per row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Column holding the raw text.
    #[arg(long = "text-column", default_value = "text")]
    pub text_column: String,

    /// Column holding the label, copied to the output unchanged.
    #[arg(long = "label-column")]
    pub label_column: Option<String>,

    /// TOML file with preprocessing options.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Word subjectivity table (`word,score` CSV) used to drop objective
    /// sentences.
    ///
    /// Without a lexicon every sentence is kept.
    #[arg(long = "lexicon", value_name = "CSV")]
    pub lexicon: Option<PathBuf>,

    /// Output file (default: <CSV stem>.preprocessed.csv next to the input).
    ///
    /// A `.json` extension writes a JSON array instead of CSV.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Minimum sentence subjectivity, in [0, 1] (overrides the config file).
    #[arg(long = "threshold")]
    pub threshold: Option<f64>,

    /// Additional stop-word; may be repeated.
    #[arg(long = "extra-stopword", value_name = "WORD")]
    pub extra_stopwords: Vec<String>,
}

#[derive(Parser)]
pub struct StopwordsArgs {
    /// Also list negation words such as `not` and `no`.
    #[arg(long = "include-negations")]
    pub include_negations: bool,

    /// TOML file whose extra stop-words are listed too.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl Cli {
    /// Build logging configuration from CLI flags.
    ///
    /// `--log-level` beats `-v/-q`, which beat `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            use_env_filter: !(self.verbosity.is_present() || self.log_level.is_some()),
            ..LogConfig::default()
        };
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.log_file = self.log_file.clone();
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}
