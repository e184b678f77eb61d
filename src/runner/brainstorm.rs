use crate::parser::{parse_brainstorm, MAX_SUGGESTED_ASPECTS};
use crate::prompt::build_brainstorm_prompt;
use crate::research::BrainstormResult;
use tracing::{info, warn};

use super::Orchestrator;

/// Overview shown when the brainstorm query itself failed
pub const UNAVAILABLE_OVERVIEW: &str =
    "Désolé, je n'arrive pas à analyser ce sujet pour l'instant.";

pub const UNAVAILABLE_ASPECTS: [&str; MAX_SUGGESTED_ASPECTS] = [
    "L'histoire",
    "La description",
    "L'habitat",
    "L'alimentation",
    "Les particularités",
];

impl Orchestrator {
    /// Propose an overview and up to five aspects for a subject. Never fails.
    pub async fn brainstorm(&self, subject: &str) -> BrainstormResult {
        let prompt = build_brainstorm_prompt(subject);

        match self.client().query(&prompt, None).await {
            Ok(output) => {
                let result = parse_brainstorm(&output.text);
                info!(
                    "Brainstorm for '{}' suggested {} aspects",
                    subject,
                    result.suggested_aspects.len()
                );
                result
            }
            Err(e) => {
                warn!("Brainstorm failed for '{}': {}", subject, e);
                BrainstormResult {
                    overview: UNAVAILABLE_OVERVIEW.to_string(),
                    suggested_aspects: UNAVAILABLE_ASPECTS.iter().map(|a| a.to_string()).collect(),
                }
            }
        }
    }
}
