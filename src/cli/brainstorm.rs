use crate::cli::{BrainstormArgs, OutputFormat};
use crate::config::Config;
use crate::output::{emit, render_brainstorm_json, render_brainstorm_markdown};
use crate::provider::create_client;
use crate::research::validate_subject;
use crate::runner::Orchestrator;
use std::path::Path;

pub async fn execute(args: BrainstormArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let subject = validate_subject(&args.subject)?;

    let config = Config::resolve(config_path)?;
    config.validate()?;

    let client = create_client(&config.provider)?;
    let orchestrator = Orchestrator::new(client, config.excluded_domains.clone());
    let result = orchestrator.brainstorm(subject).await;

    let rendered = match args.format {
        OutputFormat::Markdown => render_brainstorm_markdown(subject, &result),
        OutputFormat::Json => render_brainstorm_json(subject, &result)?,
    };

    emit(&rendered, None)?;
    Ok(())
}
