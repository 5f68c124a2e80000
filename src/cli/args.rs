//! Command line argument parsing for the seoscribe CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// seoscribe - deterministic SEO analysis for written content
#[derive(Parser, Debug, Clone)]
#[command(name = "seoscribe")]
#[command(about = "Score content for SEO: keywords, readability and structure")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SeoscribeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Scoring configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "SEOSCRIBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SeoscribeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    /// Log level for the effective verbosity: errors only when quiet,
    /// warnings by default, then info and debug.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity() {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Full SEO analysis of one or more files
    Analyze(AnalyzeArgs),

    /// Extract the top keywords and phrases
    Keywords(KeywordsArgs),

    /// Flesch reading ease of a file
    Readability(ReadabilityArgs),

    /// Compare an original and an optimized version
    Compare(CompareArgs),
}

/// Arguments for analyzing content
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Content files ("-" reads stdin)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Target keywords (comma separated); derived from the content when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Vec<String>,
}

/// Arguments for keyword extraction
#[derive(Parser, Debug, Clone)]
pub struct KeywordsArgs {
    /// Content file ("-" reads stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of keywords to return
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Show counts and densities
    #[arg(long)]
    pub details: bool,
}

/// Arguments for readability scoring
#[derive(Parser, Debug, Clone)]
pub struct ReadabilityArgs {
    /// Content file ("-" reads stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for comparing two versions
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// Original content file
    #[arg(value_name = "ORIGINAL")]
    pub original: PathBuf,

    /// Optimized content file
    #[arg(value_name = "OPTIMIZED")]
    pub optimized: PathBuf,

    /// Target keywords (comma separated); derived from the original when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Vec<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
