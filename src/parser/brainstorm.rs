//! Parser for the delimiter-based brainstorm response.
//!
//! The model is asked for `---OVERVIEW---` prose followed by an
//! `---ASPECTS---` list, but nothing enforces it. Every outcome is mapped to a
//! non-empty overview and between one and [`MAX_SUGGESTED_ASPECTS`] aspects.

use crate::prompt::{ASPECTS_MARKER, OVERVIEW_MARKER};
use crate::research::BrainstormResult;
use regex::Regex;

pub const MAX_SUGGESTED_ASPECTS: usize = 5;

/// Overview used when the response carries no usable overview text
pub const FALLBACK_OVERVIEW: &str = "Impossible de trouver un résumé pour ce sujet.";

/// Aspects used when the response carries no usable aspect line
pub const FALLBACK_ASPECTS: [&str; MAX_SUGGESTED_ASPECTS] = [
    "Description",
    "Histoire",
    "Fonctionnement",
    "Exemples",
    "Importance",
];

/// Parse a raw brainstorm response; never fails
pub fn parse_brainstorm(raw: &str) -> BrainstormResult {
    let mut segments = raw.split(ASPECTS_MARKER);
    let head = segments.next().unwrap_or_default();
    let tail = segments.next().unwrap_or_default();

    let overview = head.replacen(OVERVIEW_MARKER, "", 1).trim().to_string();
    let overview = if overview.is_empty() {
        FALLBACK_OVERVIEW.to_string()
    } else {
        overview
    };

    let suggested_aspects = match parse_aspect_lines(tail) {
        Some(aspects) => aspects,
        None => {
            tracing::debug!("No aspect lines in brainstorm response, using fallback list");
            FALLBACK_ASPECTS.iter().map(|a| a.to_string()).collect()
        }
    };

    BrainstormResult {
        overview,
        suggested_aspects,
    }
}

/// Extract up to five aspect lines, stripping bullets and numbering
fn parse_aspect_lines(tail: &str) -> Option<Vec<String>> {
    let bullet_re = Regex::new(r"^(?:[-*•]+|\d+[.)])(?:\s+|$)").ok()?;

    let aspects: Vec<String> = tail
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("---"))
        .map(|line| bullet_re.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .take(MAX_SUGGESTED_ASPECTS)
        .collect();

    if aspects.is_empty() {
        None
    } else {
        Some(aspects)
    }
}
