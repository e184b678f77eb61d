pub mod brainstorm;
pub mod research;
pub mod schema;

use crate::research::ResultMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "explorateur")]
#[command(
    author,
    version,
    about = "Grounded research assistant for primary-school projects"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (defaults to ./explorateur.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Research every aspect of a subject and print the results
    Research(ResearchArgs),

    /// Suggest an overview and aspects for a subject
    Brainstorm(BrainstormArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Parser, Clone)]
pub struct ResearchArgs {
    /// Main subject of the research
    #[arg(short, long)]
    pub subject: String,

    /// Aspect to research (repeat for several)
    #[arg(short, long = "aspect", value_name = "ASPECT")]
    pub aspects: Vec<String>,

    /// Result mode: sources, short or long (overrides config)
    #[arg(short, long)]
    pub mode: Option<ResultMode>,

    /// Allow foreign-language sources (answers stay in French)
    #[arg(long)]
    pub foreign_sources: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct BrainstormArgs {
    /// Subject to brainstorm
    #[arg(short, long)]
    pub subject: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,
}
