//! CLI output rendering

use crate::core::title::{document_title, window_title};
use crate::core::{section_text, SectionKind, SectionModel, StatusSummary};
use crate::i18n;
use clap::ValueEnum;

/// CLI output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format for scripting
    Json,
}

/// Render the visible sections (text) or the whole summary (JSON)
pub fn render_summary(
    summary: &StatusSummary,
    kinds: &[SectionKind],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(kinds
            .iter()
            .map(|kind| section_text(*kind, summary))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let sections: Vec<_> = kinds
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "name": kind.key(),
                        "text": section_text(*kind, summary),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&serde_json::json!({
                "summary": summary,
                "sections": sections,
            }))
        }
    }
}

/// Render the document and window titles
pub fn render_titles(
    summary: &StatusSummary,
    server_name: &str,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let document = document_title(&summary.down_rate, &summary.up_rate);
    let window = window_title(server_name, &summary.down_rate, &summary.up_rate);
    match format {
        OutputFormat::Text => Ok(format!("{}\n{}", document, window)),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "document": document,
            "window": window,
        })),
    }
}

/// Render the persisted section list in display order
pub fn render_sections(model: &SectionModel, format: OutputFormat) -> Result<String, serde_json::Error> {
    let ordered: Vec<_> = model
        .display_order()
        .into_iter()
        .map(|i| &model.sections()[i])
        .collect();

    match format {
        OutputFormat::Text => Ok(ordered
            .iter()
            .map(|s| {
                let label = s
                    .kind()
                    .map_or_else(|| s.name.clone(), |kind| i18n::t(kind.label_key()));
                format!(
                    "[{}] {:<16} {:>3}  {}",
                    if s.visible { "x" } else { " " },
                    s.name,
                    s.order,
                    label
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(&ordered),
    }
}
