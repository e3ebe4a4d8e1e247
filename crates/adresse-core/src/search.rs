//! User-facing search state: the free-text query, the optional type filter,
//! and the autocomplete switch.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result categories the search service can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Housenumber,
    Street,
    Locality,
    Municipality,
}

impl SearchType {
    /// The filter options in display order.
    pub const ALL: [SearchType; 4] = [
        SearchType::Housenumber,
        SearchType::Street,
        SearchType::Locality,
        SearchType::Municipality,
    ];

    /// Wire name sent as the `type` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Housenumber => "housenumber",
            SearchType::Street => "street",
            SearchType::Locality => "locality",
            SearchType::Municipality => "municipality",
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown search type '{0}' (expected housenumber, street, locality or municipality)")]
pub struct ParseSearchTypeError(pub String);

impl FromStr for SearchType {
    type Err = ParseSearchTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSearchTypeError(s.to_string()))
    }
}

/// The inputs a search is derived from.
///
/// An empty `text` is the idle state: no request is built for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub text: String,
    pub search_type: Option<SearchType>,
    pub autocomplete: bool,
}

impl SearchInput {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        search_type: Option<SearchType>,
        autocomplete: bool,
    ) -> Self {
        Self {
            text: text.into(),
            search_type,
            autocomplete,
        }
    }

    /// `true` when no request should be issued for this input.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Clicking the active type clears the filter; clicking any other type
    /// replaces it.
    pub fn toggle_type(&mut self, clicked: SearchType) {
        self.search_type = if self.search_type == Some(clicked) {
            None
        } else {
            Some(clicked)
        };
    }

    pub fn set_autocomplete(&mut self, autocomplete: bool) {
        self.autocomplete = autocomplete;
    }

    pub fn toggle_autocomplete(&mut self) {
        self.autocomplete = !self.autocomplete;
    }

    /// Autocomplete flag as sent on the wire.
    #[must_use]
    pub fn autocomplete_flag(&self) -> u8 {
        u8::from(self.autocomplete)
    }
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new(
            "20 avenue de Ségur, Paris",
            Some(SearchType::Housenumber),
            true,
        )
    }
}
