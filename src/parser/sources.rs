use crate::provider::RawCitation;
use crate::research::Source;
use reqwest::Url;

/// Turn raw grounding citations into the sources shown to the student.
///
/// Entries without an absolute http(s) URI or a non-blank title are dropped,
/// then any URI containing an excluded marker (ASCII case-insensitive). The
/// service order is kept as-is; duplicate URIs are passed through.
pub fn normalize_sources(citations: &[RawCitation], excluded_markers: &[String]) -> Vec<Source> {
    let markers: Vec<String> = excluded_markers
        .iter()
        .map(|m| m.trim().to_ascii_lowercase())
        .filter(|m| !m.is_empty())
        .collect();

    citations
        .iter()
        .filter_map(|citation| {
            let uri = usable_uri(citation.uri.as_deref()?)?;
            let title = citation.title.as_deref()?.trim();
            if title.is_empty() {
                return None;
            }
            Some(Source {
                title: title.to_string(),
                uri: uri.to_string(),
            })
        })
        .filter(|source| !is_excluded(&source.uri, &markers))
        .collect()
}

fn usable_uri(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).ok()?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Some(trimmed),
        _ => None,
    }
}

fn is_excluded(uri: &str, markers: &[String]) -> bool {
    let lowered = uri.to_ascii_lowercase();
    markers.iter().any(|m| lowered.contains(m.as_str()))
}
