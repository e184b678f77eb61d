use crate::parser::normalize_sources;
use crate::prompt::{build_aspect_prompt, RESEARCH_SYSTEM_INSTRUCTION};
use crate::provider::GroundedClient;
use crate::research::{AspectResult, SearchOptions};
use tracing::{debug, warn};

/// Summary shown in place of an answer when an aspect's query failed
pub const FAILED_ASPECT_SUMMARY: &str =
    "Oups ! Je n'ai pas réussi à trouver des informations pour cet aspect pour le moment.";

pub const FAILED_ASPECT_ERROR: &str = "Erreur de connexion ou de recherche.";

/// Summary used when the model answered with no text
pub const NO_INFORMATION_TEXT: &str = "Aucune information trouvée.";

/// Run the whole pipeline for one aspect. Never fails: a query error is
/// turned into a result carrying `error` and no sources.
pub async fn research_aspect(
    client: &dyn GroundedClient,
    subject: &str,
    aspect: &str,
    options: SearchOptions,
    excluded_domains: &[String],
) -> AspectResult {
    let prompt = build_aspect_prompt(subject, aspect, &options);
    debug!(
        "Querying {} for aspect '{}' ({} mode)",
        client.name(),
        aspect,
        options.mode
    );

    match client
        .query(&prompt, Some(RESEARCH_SYSTEM_INSTRUCTION))
        .await
    {
        Ok(output) => {
            let sources = normalize_sources(&output.citations, excluded_domains);
            debug!(
                "Aspect '{}': kept {} of {} citations",
                aspect,
                sources.len(),
                output.citations.len()
            );
            let summary = if output.is_empty() {
                NO_INFORMATION_TEXT.to_string()
            } else {
                output.text
            };
            AspectResult {
                aspect: aspect.to_string(),
                summary,
                sources,
                mode: options.mode,
                error: None,
            }
        }
        Err(e) => {
            warn!("Research failed for aspect '{}': {}", aspect, e);
            AspectResult {
                aspect: aspect.to_string(),
                summary: FAILED_ASPECT_SUMMARY.to_string(),
                sources: Vec::new(),
                mode: options.mode,
                error: Some(FAILED_ASPECT_ERROR.to_string()),
            }
        }
    }
}
