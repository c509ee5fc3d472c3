//! Row projection: entity + locale -> table cells.
//!
//! Columns are declared once per entity as plain data; rendering lives in
//! `components::data_table`.

use contracts::domain::common::Entity;
use contracts::enums::ContactStatus;
use contracts::shared::locale::Locale;
use contracts::shared::translation::MISSING_LABEL;

use crate::shared::date_utils::format_date;
use crate::shared::i18n::Msg;
use crate::shared::icons::IconName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeVariant {
    pub fn code(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Error => "error",
            BadgeVariant::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Text that fell back to an identifier or the placeholder
    Muted(String),
    Badge { label: String, variant: BadgeVariant },
    Date(String),
    Icon { name: IconName, label: String },
    Link { href: String, label: String },
}

impl Cell {
    /// Plain text of the cell, for sorting and tests
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(t) | Cell::Muted(t) | Cell::Date(t) => t,
            Cell::Badge { label, .. } | Cell::Icon { label, .. } | Cell::Link { label, .. } => label,
        }
    }
}

/// One table column of entity `E`
pub struct ColumnDef<E> {
    pub key: &'static str,
    pub header: Msg,
    /// Backend `sortBy` value; `None` for unsortable columns
    pub sort_field: Option<&'static str>,
    pub project: fn(&E, Locale) -> Cell,
}

impl<E> Clone for ColumnDef<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ColumnDef<E> {}

impl<E> ColumnDef<E> {
    pub const fn new(key: &'static str, header: Msg, project: fn(&E, Locale) -> Cell) -> Self {
        Self {
            key,
            header,
            sort_field: None,
            project,
        }
    }

    pub const fn sortable(mut self, field: &'static str) -> Self {
        self.sort_field = Some(field);
        self
    }
}

pub fn project_row<E>(columns: &[ColumnDef<E>], row: &E, locale: Locale) -> Vec<Cell> {
    columns.iter().map(|c| (c.project)(row, locale)).collect()
}

// ============================================================================
// Cell builders
// ============================================================================

/// Locale-resolved name following the translation fallback chain
pub fn display_cell<E: Entity>(row: &E, locale: Locale) -> Cell {
    let text = row.display_text(locale);
    if text.is_translated() {
        Cell::Text(text.text)
    } else {
        Cell::Muted(text.text)
    }
}

pub fn text_cell(value: &str) -> Cell {
    if value.trim().is_empty() {
        Cell::Muted(MISSING_LABEL.to_string())
    } else {
        Cell::Text(value.to_string())
    }
}

pub fn opt_text_cell(value: Option<&str>) -> Cell {
    text_cell(value.unwrap_or_default())
}

pub fn date_cell(raw: Option<&str>) -> Cell {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(raw) => Cell::Date(format_date(raw)),
        None => Cell::Muted(MISSING_LABEL.to_string()),
    }
}

pub fn active_badge(active: bool, locale: Locale) -> Cell {
    if active {
        Cell::Badge {
            label: Msg::Active.text(locale).to_string(),
            variant: BadgeVariant::Success,
        }
    } else {
        Cell::Badge {
            label: Msg::Inactive.text(locale).to_string(),
            variant: BadgeVariant::Neutral,
        }
    }
}

pub fn featured_badge(featured: bool, locale: Locale) -> Cell {
    if featured {
        Cell::Badge {
            label: Msg::Featured.text(locale).to_string(),
            variant: BadgeVariant::Primary,
        }
    } else {
        Cell::Muted(MISSING_LABEL.to_string())
    }
}

pub fn contact_status_badge(status: ContactStatus, locale: Locale) -> Cell {
    let variant = match status {
        ContactStatus::New => BadgeVariant::Warning,
        ContactStatus::Read => BadgeVariant::Primary,
        ContactStatus::Replied => BadgeVariant::Success,
        ContactStatus::Archived => BadgeVariant::Neutral,
    };
    Cell::Badge {
        label: status.display_name(locale).to_string(),
        variant,
    }
}

pub fn icon_cell(name: Option<&str>) -> Cell {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => Cell::Icon {
            name: IconName::from_name(name),
            label: name.to_string(),
        },
        None => Cell::Muted(MISSING_LABEL.to_string()),
    }
}

/// Filled and empty stars, clamped to 1..=5
pub fn rating_cell(rating: u8) -> Cell {
    let filled = rating.clamp(1, 5) as usize;
    Cell::Text(format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled)))
}

pub fn link_cell(href: Option<&str>) -> Cell {
    match href.map(str::trim).filter(|h| !h.is_empty()) {
        Some(href) => Cell::Link {
            href: href.to_string(),
            label: href
                .trim_start_matches("https://")
                .trim_start_matches("http://")
                .trim_end_matches('/')
                .to_string(),
        },
        None => Cell::Muted(MISSING_LABEL.to_string()),
    }
}
