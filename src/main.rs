use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod output;
mod parser;
mod prompt;
mod provider;
mod research;
mod runner;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("explorateur=debug")
    } else {
        EnvFilter::new("explorateur=warn")
    };

    // Reports go to stdout, so logs stay on stderr
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Research(args) => cli::research::execute(args, config_path).await,
        Commands::Brainstorm(args) => cli::brainstorm::execute(args, config_path).await,
        Commands::Schema => cli::schema::execute(),
    }
}
