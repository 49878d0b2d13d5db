use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "panfw-gen")]
#[command(about = "Translate vendor-neutral firewall policy into PAN-OS XML configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Translate a policy document into a device XML configuration.
    Translate(TranslateArgs),
    /// Validate a policy document and report notices without writing output.
    Check(CheckArgs),
    /// Show the element structure of an XML document.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct TranslateArgs {
    /// Policy document (.json or .toml).
    pub policy: PathBuf,
    /// Output XML path; omit to print the document to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Notice terms expiring within this many weeks.
    #[arg(long, default_value_t = 2)]
    pub exp_weeks: i64,
    /// Summary output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Suppress notices.
    #[arg(short, long)]
    pub quiet: bool,
    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Policy document (.json or .toml).
    pub policy: PathBuf,
    /// Notice terms expiring within this many weeks.
    #[arg(long, default_value_t = 2)]
    pub exp_weeks: i64,
    /// Report output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// XML document to inspect.
    pub file: PathBuf,
    /// Show only this top-level section.
    #[arg(long)]
    pub section: Option<String>,
    /// Maximum tree depth to print.
    #[arg(long, default_value_t = 3)]
    pub depth: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
