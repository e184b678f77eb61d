use crate::cli::{OutputFormat, ResearchArgs};
use crate::config::Config;
use crate::output::{emit, render_batch_json, render_batch_markdown};
use crate::provider::create_client;
use crate::research::{validate_request, SearchOptions};
use crate::runner::Orchestrator;
use chrono::Local;
use std::path::Path;
use tracing::{info, warn};

pub async fn execute(args: ResearchArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    // Reject bad input before any config or network work
    let request = validate_request(&args.subject, &args.aspects)?;

    let config = Config::resolve(config_path)?;
    config.validate()?;

    let options = SearchOptions {
        mode: args.mode.unwrap_or(config.default_mode),
        include_foreign_sources: args.foreign_sources,
    };

    let client = create_client(&config.provider)?;
    let orchestrator = Orchestrator::new(client, config.excluded_domains.clone());
    let report = orchestrator.research(&request, options).await;

    if report.failed_count() == report.results.len() {
        warn!("Every aspect failed; check the API key and network access");
    }

    let today = Local::now().date_naive();
    let rendered = match args.format {
        OutputFormat::Markdown => render_batch_markdown(&report, today),
        OutputFormat::Json => render_batch_json(&report, today)?,
    };

    emit(&rendered, args.output.as_deref())?;
    if let Some(path) = &args.output {
        info!("Wrote report to {}", path.display());
    }

    Ok(())
}
