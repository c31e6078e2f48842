//! CLI parse: clap types for profile-links. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// profile-links - social media profile links widget
#[derive(Parser)]
#[command(name = "profile-links")]
#[command(about = "Render, edit and sanitize a social media profile links widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (skips the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the supported profiles in display order
    Profiles {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List registered widget types
    Widgets,
    /// Render the front-end fragment for an instance
    Render {
        /// Instance JSON file ("-" for stdin); omitted means an empty instance
        #[arg(long)]
        instance: Option<PathBuf>,
        /// Omit the default wrapper markup
        #[arg(long)]
        bare: bool,
        /// Prepend <link> tags for the queued stylesheets
        #[arg(long)]
        with_styles: bool,
    },
    /// Render the admin form for an instance
    Form {
        /// Instance JSON file ("-" for stdin); omitted means nothing saved yet
        #[arg(long)]
        instance: Option<PathBuf>,
        /// Placement number used in field ids and names (defaults to config)
        #[arg(long)]
        number: Option<u32>,
    },
    /// Sanitize submitted form values into a new instance
    Save {
        /// Submitted values as a JSON object ("-" for stdin)
        #[arg(long)]
        submitted: PathBuf,
        /// Previously saved instance JSON
        #[arg(long)]
        previous: Option<PathBuf>,
        /// Write the instance here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the bundled stylesheet
    Stylesheet,
    /// Print the effective configuration as TOML
    Config,
}
