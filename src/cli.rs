//! CLI argument parsing for hello-sum

use clap::{Parser, ValueEnum};

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Two plain text lines (default)
    #[default]
    Text,
    /// JSON object for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "hello-sum")]
#[command(version)]
#[command(about = "Print a greeting and the sum of a sequence of integers", long_about = None)]
pub struct Cli {
    /// Comma-separated integers to sum instead of 1,2,3,4,5 (e.g., --numbers=10,-3,7)
    #[arg(long = "numbers", value_name = "LIST", allow_hyphen_values = true)]
    pub numbers: Option<String>,

    /// Greeting line printed before the sum
    #[arg(long = "greeting", value_name = "TEXT")]
    pub greeting: Option<String>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing output (to stderr)
    #[arg(long = "debug")]
    pub debug: bool,
}
