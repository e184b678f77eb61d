use crate::error::InputError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output contract requested from the model for every aspect of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum ResultMode {
    #[serde(rename = "sources")]
    SourcesOnly,
    #[serde(rename = "short")]
    ShortNotes,
    #[serde(rename = "long")]
    LongForm,
}

impl std::fmt::Display for ResultMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultMode::SourcesOnly => write!(f, "sources"),
            ResultMode::ShortNotes => write!(f, "short"),
            ResultMode::LongForm => write!(f, "long"),
        }
    }
}

impl std::str::FromStr for ResultMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sources" | "sources-only" => Ok(ResultMode::SourcesOnly),
            "short" | "notes" => Ok(ResultMode::ShortNotes),
            "long" | "long-form" => Ok(ResultMode::LongForm),
            _ => Err(format!("Unknown result mode: {}", s)),
        }
    }
}

/// Options shared by every aspect of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    pub mode: ResultMode,
    pub include_foreign_sources: bool,
}

/// A cited web page shown to the student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

impl PartialEq for Source {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl Eq for Source {}

#[derive(Debug, Clone, Serialize)]
pub struct AspectResult {
    /// Echo of the caller's aspect, never model output
    pub aspect: String,
    pub summary: String,
    pub sources: Vec<Source>,
    pub mode: ResultMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AspectResult {
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrainstormResult {
    pub overview: String,
    pub suggested_aspects: Vec<String>,
}

/// A submission that passed input validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchRequest {
    pub subject: String,
    pub aspects: Vec<String>,
}

/// Trim the subject and aspects, drop blank aspects, reject what cannot be researched
pub fn validate_request(subject: &str, aspects: &[String]) -> Result<ResearchRequest, InputError> {
    let subject = subject.trim();
    if subject.is_empty() {
        return Err(InputError::EmptySubject);
    }

    let aspects: Vec<String> = aspects
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect();

    if aspects.is_empty() {
        return Err(InputError::NoAspects);
    }

    Ok(ResearchRequest {
        subject: subject.to_string(),
        aspects,
    })
}

/// Trim a brainstorm subject, rejecting a blank one
pub fn validate_subject(subject: &str) -> Result<&str, InputError> {
    match subject.trim() {
        "" => Err(InputError::EmptySubject),
        trimmed => Ok(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_mode_round_trips_through_cli_names() {
        for mode in [
            ResultMode::SourcesOnly,
            ResultMode::ShortNotes,
            ResultMode::LongForm,
        ] {
            assert_eq!(mode.to_string().parse::<ResultMode>().unwrap(), mode);
        }
        assert!("medium".parse::<ResultMode>().is_err());
    }

    #[test]
    fn test_result_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&ResultMode::ShortNotes).unwrap(),
            "\"short\""
        );
        let mode: ResultMode = serde_json::from_str("\"long\"").unwrap();
        assert_eq!(mode, ResultMode::LongForm);
    }

    #[test]
    fn test_source_equality_is_by_uri() {
        let a = Source {
            title: "Larousse".to_string(),
            uri: "https://www.larousse.fr/abeille".to_string(),
        };
        let b = Source {
            title: "Encyclopédie Larousse".to_string(),
            uri: "https://www.larousse.fr/abeille".to_string(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_successful_result_serializes_without_error() {
        let ok = AspectResult {
            aspect: "Habitat".to_string(),
            summary: "Ruche".to_string(),
            sources: Vec::new(),
            mode: ResultMode::ShortNotes,
            error: None,
        };
        let json = serde_json::to_value(&ok).unwrap();
        assert!(json.get("error").is_none());
        assert!(!ok.is_failed());
    }

    #[test]
    fn test_validate_request_trims_and_drops_blank_aspects() {
        let aspects = vec![
            " Habitat ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "Alimentation".to_string(),
        ];
        let request = validate_request("  Les abeilles ", &aspects).unwrap();
        assert_eq!(request.subject, "Les abeilles");
        assert_eq!(request.aspects, vec!["Habitat", "Alimentation"]);
    }

    #[test]
    fn test_validate_request_rejects_blank_subject() {
        let aspects = vec!["Habitat".to_string()];
        assert_eq!(
            validate_request("  ", &aspects),
            Err(InputError::EmptySubject)
        );
    }

    #[test]
    fn test_validate_request_rejects_no_aspects() {
        let aspects = vec![" ".to_string(), String::new()];
        assert_eq!(
            validate_request("Les abeilles", &aspects),
            Err(InputError::NoAspects)
        );
        assert_eq!(validate_request("Les abeilles", &[]), Err(InputError::NoAspects));
    }

    #[test]
    fn test_validate_subject() {
        assert_eq!(validate_subject(" Volcans\n"), Ok("Volcans"));
        assert_eq!(validate_subject("\t"), Err(InputError::EmptySubject));
    }
}
