use crate::error::OutputError;
use crate::research::{AspectResult, BrainstormResult, ResultMode};
use crate::runner::BatchReport;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Printable research file: one section per aspect, in submission order
pub fn render_batch_markdown(report: &BatchReport, generated_on: NaiveDate) -> String {
    let mut content = String::new();

    content.push_str("# Dossier de Recherche\n\n");
    content.push_str(&format!("## Sujet : {}\n\n", report.subject));

    for result in &report.results {
        push_aspect_section(&mut content, result);
    }

    content.push_str("---\n\n");
    content.push_str("*Document généré par l'Explorateur de Savoir. Sources vérifiées.*\n\n");
    content.push_str(&format!("{}\n", generated_on.format("%d/%m/%Y")));

    content
}

fn push_aspect_section(content: &mut String, result: &AspectResult) {
    content.push_str(&format!("### {}\n\n", result.aspect));

    if result.is_failed() || result.mode != ResultMode::SourcesOnly {
        content.push_str(result.summary.trim());
        content.push_str("\n\n");
    } else {
        content.push_str(&format!(
            "Voici une sélection de pages vérifiées pour trouver toi-même les réponses sur **{}**.\n\n",
            result.aspect
        ));
    }

    content.push_str("**Sources :**\n\n");
    if result.sources.is_empty() {
        content.push_str("*Aucune source directe citée.*\n\n");
    } else {
        for source in &result.sources {
            content.push_str(&format!("- {}\n", markdown_link(&source.title, &source.uri)));
        }
        content.push('\n');
    }
}

/// Markdown link with brackets escaped in the title and parentheses encoded in the URI
fn markdown_link(title: &str, uri: &str) -> String {
    let mut label = String::with_capacity(title.len());
    for c in title.chars() {
        if matches!(c, '\\' | '[' | ']') {
            label.push('\\');
        }
        label.push(c);
    }
    let target = uri
        .replace('(', "%28")
        .replace(')', "%29")
        .replace(' ', "%20");
    format!("[{}]({})", label, target)
}

pub fn render_brainstorm_markdown(subject: &str, result: &BrainstormResult) -> String {
    let mut content = format!("# Survol : {}\n\n{}\n\n", subject, result.overview);
    content.push_str("## Suggestions d'aspects\n\n");
    for aspect in &result.suggested_aspects {
        content.push_str(&format!("- {}\n", aspect));
    }
    content
}

#[derive(Serialize)]
struct BatchDocument<'a> {
    subject: &'a str,
    mode: ResultMode,
    include_foreign_sources: bool,
    generated_on: NaiveDate,
    duration_sec: f64,
    results: &'a [AspectResult],
}

pub fn render_batch_json(
    report: &BatchReport,
    generated_on: NaiveDate,
) -> Result<String, OutputError> {
    let document = BatchDocument {
        subject: &report.subject,
        mode: report.options.mode,
        include_foreign_sources: report.options.include_foreign_sources,
        generated_on,
        duration_sec: report.duration.as_secs_f64(),
        results: &report.results,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[derive(Serialize)]
struct BrainstormDocument<'a> {
    subject: &'a str,
    #[serde(flatten)]
    result: &'a BrainstormResult,
}

pub fn render_brainstorm_json(
    subject: &str,
    result: &BrainstormResult,
) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(&BrainstormDocument { subject, result })?)
}

/// Write rendered output to a file, or to stdout when no path is given
pub fn emit(rendered: &str, path: Option<&Path>) -> Result<(), OutputError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(OutputError::WriteReport)?;
            }
            fs::write(path, rendered).map_err(OutputError::WriteReport)
        }
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}
