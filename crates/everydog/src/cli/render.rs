//! Text rendering of snapshots.
//!
//! Every function here is pure: it takes API data and returns a `String`, so
//! handlers decide where it goes and tests can compare plain text. Colors come
//! from `colored`, which disables itself when stdout is not a terminal.

use colored::Colorize;
use everydogapp::api::{MessageLevel, Snapshot, ViewMessage};
use everydogapp::catalog::CatalogStatus;
use everydogapp::facets::{Facet, FacetOption, FacetSelections};
use everydogapp::model::BreedRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COL_INDEX: usize = 5;
const COL_NAME: usize = 32;
const LINE_WIDTH: usize = 80;
const ANY: &str = "any";

/// Numbered breed list, one line per breed, in catalog order.
pub fn render_breed_list(breeds: &[BreedRecord]) -> String {
    if breeds.is_empty() {
        return "No breeds to show.\n".to_string();
    }

    let facets_width = LINE_WIDTH.saturating_sub(COL_INDEX + COL_NAME + 2);
    let mut out = String::new();
    for breed in breeds {
        let index = format!("{:>4}.", breed.id);
        let name = pad_to_width(&truncate_to_width(&breed.name, COL_NAME), COL_NAME);
        let facets = truncate_to_width(
            &format!("{} · {}", breed.display_group(), breed.display_origin()),
            facets_width,
        );
        out.push_str(&format!(
            "{} {} {}\n",
            index.yellow(),
            name.bold(),
            facets.dimmed()
        ));
    }
    out
}

/// Options of one facet, marking the active selection.
pub fn render_options(facet: Facet, options: &[FacetOption], selected: Option<&FacetOption>) -> String {
    if options.is_empty() {
        return format!("No {} options.\n", facet.label().to_lowercase());
    }

    let mut out = format!("{} options ({}):\n", facet.label(), options.len());
    for option in options {
        if selected == Some(option) {
            out.push_str(&format!("  {} {}\n", "●".green(), option.label.bold()));
        } else {
            out.push_str(&format!("  ○ {}\n", option.label));
        }
    }
    out
}

/// The detail overlay for one breed. Missing group or origin shows "Unknown".
pub fn render_detail(record: &BreedRecord, image_base: &str) -> String {
    let title = format!("─ {} ", record.name);
    let rule = "─".repeat(LINE_WIDTH.saturating_sub(title.width() + 1));
    let mut out = format!("╭{}{}\n", title.bold(), rule);

    let mut field = |label: &str, value: &str| {
        out.push_str(&format!("│ {:<13}{}\n", format!("{}:", label).dimmed(), value));
    };
    if let Some(url) = record.image_url(image_base) {
        field("Image", &url);
    }
    field("Group", record.display_group());
    if let Some(life_span) = record.life_span.as_deref() {
        field("Life Span", life_span);
    }
    if let Some(temperament) = record.temperament.as_deref() {
        field("Temperament", temperament);
    }
    field("Origin", record.display_origin());

    out.push_str(&format!("╰{}\n", "─".repeat(LINE_WIDTH - 1)));
    out
}

/// One-line summary: loaded count, shown count, active filters.
pub fn render_status(snapshot: &Snapshot) -> String {
    let head = match &snapshot.status {
        CatalogStatus::Pending => "Catalog loading".to_string(),
        CatalogStatus::Unavailable { .. } => "Catalog unavailable".to_string(),
        CatalogStatus::Loaded { count, .. } => format!(
            "Showing {} of {} breeds",
            snapshot.filtered_breeds.len(),
            count
        ),
    };
    format!(
        "{} · {}\n",
        head,
        render_selections(&snapshot.selections)
    )
}

fn render_selections(selections: &FacetSelections) -> String {
    Facet::ALL
        .iter()
        .map(|facet| {
            let value = selections
                .get(*facet)
                .map(|o| o.label.as_str())
                .unwrap_or(ANY);
            format!("{}: {}", facet.label().to_lowercase(), value)
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

pub fn render_messages(messages: &[ViewMessage]) -> String {
    messages
        .iter()
        .map(|msg| {
            let line = match msg.level {
                MessageLevel::Info => msg.content.normal(),
                MessageLevel::Warning => msg.content.yellow(),
                MessageLevel::Error => msg.content.red(),
            };
            format!("{}\n", line)
        })
        .collect()
}

/// The list view: status line, breeds, trailing messages.
pub fn render_list_view(snapshot: &Snapshot) -> String {
    let mut out = render_status(snapshot);
    if !snapshot.filtered_breeds.is_empty() {
        out.push_str(&render_breed_list(&snapshot.filtered_breeds));
    }
    out.push_str(&render_messages(&snapshot.messages));
    out
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

fn pad_to_width(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
