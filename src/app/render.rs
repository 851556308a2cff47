use crate::core::browser::ContactBrowser;
use crate::core::{Contact, DetailView, GroupSection, Storage};
use crate::utils::error::{ContactBookError, Result};
use serde::Serialize;
use std::fmt::Write;

pub const EMPTY_LIST_MESSAGE: &str = "No contacts found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ContactBookError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ContactBookError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: text, json".to_string(),
            }),
        }
    }
}

/// Sections as a titled list. Items carry their 1-based position so a
/// contact can be opened by number.
pub fn render_sections(sections: &[GroupSection]) -> String {
    if sections.is_empty() {
        return format!("{}\n", EMPTY_LIST_MESSAGE);
    }

    let mut out = String::new();
    let mut position = 0;
    for section in sections {
        let _ = writeln!(out, "{}", section.title);
        for contact in &section.items {
            position += 1;
            let _ = writeln!(out, "  [{}] {} - {}", position, contact.name, contact.number);
        }
    }
    out
}

/// The detail card for the selected contact; empty when nothing is selected.
pub fn render_detail(detail: DetailView<'_>) -> String {
    match detail {
        DetailView::Hidden => String::new(),
        DetailView::Visible(contact) => format!(
            "Name: {}\nNumber: {}\nGroup: {}\n[Close]\n",
            contact.name, contact.number, contact.group
        ),
    }
}

pub fn render_text(browser: &ContactBrowser) -> String {
    let mut out = render_sections(browser.sections());
    let detail = render_detail(browser.detail());
    if !detail.is_empty() {
        out.push('\n');
        out.push_str(&detail);
    }
    out
}

#[derive(Serialize)]
struct JsonView<'a> {
    query: &'a str,
    sections: &'a [GroupSection],
    selected: Option<&'a Contact>,
}

pub fn render_json(browser: &ContactBrowser) -> Result<String> {
    let view = JsonView {
        query: browser.query(),
        sections: browser.sections(),
        selected: browser.detail().contact(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

pub fn render(browser: &ContactBrowser, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(browser)),
        OutputFormat::Json => render_json(browser).map(|mut json| {
            json.push('\n');
            json
        }),
    }
}

/// Render the current view and write it through `storage`.
pub async fn save_view<S: Storage>(
    storage: &S,
    path: &str,
    browser: &ContactBrowser,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render(browser, format)?;
    storage.write_file(path, rendered.as_bytes()).await?;
    tracing::info!("📁 View saved to: {}", path);
    Ok(())
}
