//! Request construction for the `/search/` endpoint.
//!
//! [`SearchEndpoint`] is the request factory: it turns [`SearchParams`] into a
//! fully-described outbound call. [`build_query`] sits in front of it and maps
//! the user's [`SearchInput`] to a descriptor, returning the idle descriptor
//! when there is nothing to search for.

use std::collections::BTreeMap;

use adresse_core::{SearchInput, SearchType};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;
use serde::Serialize;

use crate::error::AdresseError;

/// Characters left unescaped in a query component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parameters accepted by the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub q: String,
    /// `None` searches all types.
    pub search_type: Option<SearchType>,
    /// `1` or `0`.
    pub autocomplete: u8,
}

/// Transport options attached to a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestOptions {
    pub headers: BTreeMap<String, String>,
}

/// A complete description of one outbound call.
///
/// An empty `url` means "do not fetch".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestDescriptor {
    pub url: String,
    pub options: RequestOptions,
}

impl RequestDescriptor {
    /// The descriptor for the idle state: no URL, no options.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.url.is_empty()
    }
}

/// Factory for `/search/` requests against a given service root.
#[derive(Debug, Clone)]
pub struct SearchEndpoint {
    search_url: Url,
}

impl SearchEndpoint {
    /// Creates an endpoint rooted at `base_url` (e.g. `https://api-adresse.data.gouv.fr`).
    ///
    /// # Errors
    ///
    /// Returns [`AdresseError::InvalidBaseUrl`] if `base_url` cannot be parsed.
    pub fn new(base_url: &str) -> Result<Self, AdresseError> {
        let invalid = |reason: String| AdresseError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        // Exactly one trailing slash so `join` appends rather than replaces
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_string()));
        }
        let search_url = base.join("search/").map_err(|e| invalid(e.to_string()))?;
        Ok(Self { search_url })
    }

    #[must_use]
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Builds the descriptor for `params`.
    ///
    /// Parameters are written in the order `q`, `type`, `autocomplete`;
    /// `type` is left out entirely when unset.
    #[must_use]
    pub fn request(&self, params: &SearchParams) -> RequestDescriptor {
        let mut query = format!("q={}", utf8_percent_encode(&params.q, QUERY_COMPONENT));
        if let Some(t) = params.search_type {
            query.push_str("&type=");
            query.push_str(t.as_str());
        }
        query.push_str("&autocomplete=");
        query.push_str(&params.autocomplete.to_string());

        let mut headers = BTreeMap::new();
        headers.insert("accept".to_string(), "application/json".to_string());

        RequestDescriptor {
            url: format!("{}?{query}", self.search_url),
            options: RequestOptions { headers },
        }
    }
}

/// Maps the current input to the request that should be issued for it.
///
/// Empty text yields [`RequestDescriptor::idle`] whatever the type filter or
/// autocomplete setting.
#[must_use]
pub fn build_query(endpoint: &SearchEndpoint, input: &SearchInput) -> RequestDescriptor {
    if input.is_idle() {
        return RequestDescriptor::idle();
    }

    endpoint.request(&SearchParams {
        q: input.text.clone(),
        search_type: input.search_type,
        autocomplete: input.autocomplete_flag(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> SearchEndpoint {
        SearchEndpoint::new("https://api-adresse.data.gouv.fr").expect("valid base URL")
    }

    #[test]
    fn builds_rivoli_example() {
        let input = SearchInput::new("10 rue de Rivoli", Some(SearchType::Street), true);
        let descriptor = build_query(&endpoint(), &input);
        assert_eq!(
            descriptor.url,
            "https://api-adresse.data.gouv.fr/search/?q=10%20rue%20de%20Rivoli&type=street&autocomplete=1"
        );
        assert_eq!(
            descriptor.options.headers.get("accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn empty_text_is_idle_for_every_filter_combination() {
        let endpoint = endpoint();
        let types = [None]
            .into_iter()
            .chain(SearchType::ALL.into_iter().map(Some));
        for search_type in types {
            for autocomplete in [true, false] {
                let input = SearchInput::new("", search_type, autocomplete);
                assert_eq!(build_query(&endpoint, &input), RequestDescriptor::idle());
            }
        }
    }

    #[test]
    fn missing_type_is_omitted() {
        let input = SearchInput::new("lyon", None, false);
        let descriptor = build_query(&endpoint(), &input);
        assert_eq!(
            descriptor.url,
            "https://api-adresse.data.gouv.fr/search/?q=lyon&autocomplete=0"
        );
    }

    #[test]
    fn reserved_and_non_ascii_characters_are_escaped() {
        let input = SearchInput::new("20 avenue de Ségur, Paris & co", None, true);
        let descriptor = build_query(&endpoint(), &input);
        assert!(
            descriptor
                .url
                .contains("q=20%20avenue%20de%20S%C3%A9gur%2C%20Paris%20%26%20co&"),
            "unexpected encoding: {}",
            descriptor.url
        );
    }

    #[test]
    fn unreserved_marks_are_left_alone() {
        let input = SearchInput::new("saint-jean_(l'île)", None, true);
        let descriptor = build_query(&endpoint(), &input);
        assert!(
            descriptor.url.contains("q=saint-jean_(l'%C3%AEle)&"),
            "unexpected encoding: {}",
            descriptor.url
        );
    }

    #[test]
    fn base_url_with_path_keeps_its_prefix() {
        let endpoint = SearchEndpoint::new("http://localhost:8080/proxy/").unwrap();
        assert_eq!(
            endpoint.search_url().as_str(),
            "http://localhost:8080/proxy/search/"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = SearchEndpoint::new("not a url").unwrap_err();
        assert!(matches!(err, AdresseError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn idle_descriptor_has_empty_url_and_no_headers() {
        let idle = RequestDescriptor::idle();
        assert!(idle.is_idle());
        assert!(idle.options.headers.is_empty());
    }
}
