//! Terminal rendering of the search widget.
//!
//! The surface is a titled section with a tutorial panel (description,
//! current request URL, result count or loading state, tip), the search box
//! with its result rows, the autocomplete switch and the type checkboxes.

use adresse_client::{render_row, DisplayRecord, DisplayState, RequestDescriptor, Row, RowStyle};
use adresse_core::{feature_type_label, SearchInput, SearchType, Theme};

pub(crate) const TITLE: &str = "Recherche par nom";
const DESCRIPTION: &str = "La variable q vous permet d’effectuer une recherche par nom.";
const TIPS: &str =
    "Il est possible d’utiliser la recherche par nom pour faire de l’autocomplétion.";
const PLACEHOLDER: &str = "Chercher une adresse…";
const RESET: &str = "\x1b[0m";

/// Paints one row as two terminal lines: label and type noun, then context.
pub(crate) fn paint_row(row: &Row) -> String {
    let body = format!("{:<56} {}\n    {}", row.label, row.type_label, row.context);
    match row.style {
        RowStyle::Plain => body,
        RowStyle::Highlighted {
            background,
            foreground,
        } => body
            .lines()
            .map(|line| format!("{}{}{line}{RESET}", background.ansi_bg(), foreground.ansi_fg()))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub(crate) fn result_lines(
    records: &[DisplayRecord],
    highlighted: Option<usize>,
    theme: &Theme,
) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let row = render_row(record, highlighted == Some(i), theme);
            format!("{i:>2}. {}", paint_row(&row))
        })
        .collect()
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Renders the whole widget for the current pipeline state.
pub(crate) fn render_surface(
    input: &SearchInput,
    descriptor: &RequestDescriptor,
    state: &DisplayState,
    highlighted: Option<usize>,
    theme: &Theme,
) -> String {
    let mut out = Vec::new();

    out.push(format!("== {TITLE} =="));
    out.push(DESCRIPTION.to_string());
    let example = if descriptor.is_idle() {
        "\u{2014}"
    } else {
        descriptor.url.as_str()
    };
    out.push(format!("Exemple : {example}"));
    if state.loading {
        out.push("Chargement…".to_string());
    } else {
        out.push(format!("Résultats : {}", state.list.len()));
    }
    out.push(format!("Astuce : {TIPS}"));
    out.push(String::new());

    let text = if input.text.is_empty() {
        PLACEHOLDER
    } else {
        input.text.as_str()
    };
    out.push(format!("> {text}"));
    out.extend(result_lines(&state.list, highlighted, theme));
    out.push(String::new());

    out.push(format!("{} Autocomplétion", checkbox(input.autocomplete)));
    let types = SearchType::ALL
        .iter()
        .map(|t| {
            format!(
                "{} {}",
                checkbox(input.search_type == Some(*t)),
                feature_type_label(t.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push(format!("Type : {types}"));

    if let Some(err) = &state.error {
        out.push(format!("Erreur : {err}"));
    }

    out.join("\n")
}
