//! Turns a display record into a labelled, typed row.

use adresse_core::{feature_type_label, Color, Theme};

use crate::types::DisplayRecord;

/// How a row should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Plain,
    Highlighted { background: Color, foreground: Color },
}

/// One visual result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    /// Primary line.
    pub label: String,
    /// Secondary line.
    pub context: String,
    /// Human-readable type, empty for types without a label.
    pub type_label: &'static str,
    pub style: RowStyle,
}

/// Renders `record` as a row. Highlighting only affects [`Row::style`].
#[must_use]
pub fn render_row(record: &DisplayRecord, is_highlighted: bool, theme: &Theme) -> Row {
    let style = if is_highlighted {
        RowStyle::Highlighted {
            background: theme.primary,
            foreground: theme.white,
        }
    } else {
        RowStyle::Plain
    };

    Row {
        id: record.id.clone(),
        label: record.label.clone(),
        context: record.context.clone(),
        type_label: feature_type_label(&record.feature_type),
        style,
    }
}
