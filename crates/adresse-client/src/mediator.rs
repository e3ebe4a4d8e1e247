//! Reactive pipeline from search input to display list.
//!
//! Every input mutation re-derives the [`RequestDescriptor`]; a changed,
//! non-idle descriptor spawns a fetch whose [`FetchOutcome`] comes back over
//! an mpsc channel and is folded into the [`DisplayState`] by
//! [`Mediator::apply`].
//!
//! Outcomes are applied in the order they arrive. A slow response to an older
//! request can therefore overwrite the list produced by a newer one.

use std::sync::Arc;

use adresse_core::{SearchInput, SearchType};
use tokio::sync::mpsc;

use crate::client::AdresseClient;
use crate::error::AdresseError;
use crate::mapper::map_results;
use crate::query::RequestDescriptor;
use crate::types::{DisplayRecord, FeatureCollection};

/// Result of one spawned fetch.
#[derive(Debug)]
pub struct FetchOutcome {
    /// URL of the request this outcome answers.
    pub url: String,
    pub result: Result<FeatureCollection, Arc<AdresseError>>,
}

/// What the widget currently shows.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    pub list: Vec<DisplayRecord>,
    pub loading: bool,
    pub error: Option<Arc<AdresseError>>,
}

/// Owns the search input and the state derived from it.
pub struct Mediator {
    client: Arc<AdresseClient>,
    input: SearchInput,
    descriptor: RequestDescriptor,
    state: DisplayState,
    outcomes: mpsc::UnboundedSender<FetchOutcome>,
}

impl Mediator {
    /// Creates a mediator for `input` and the receiver its fetch outcomes
    /// are delivered on. No request is made until [`Mediator::start`].
    #[must_use]
    pub fn new(
        client: Arc<AdresseClient>,
        input: SearchInput,
    ) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mediator = Self {
            client,
            input,
            descriptor: RequestDescriptor::idle(),
            state: DisplayState::default(),
            outcomes: tx,
        };
        (mediator, rx)
    }

    /// Derives the initial descriptor and issues its fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.descriptor = self.client.build_query(&self.input);
        self.dispatch();
    }

    #[must_use]
    pub fn input(&self) -> &SearchInput {
        &self.input
    }

    #[must_use]
    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Returns `true` if a new fetch was dispatched or the widget went idle.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.input.set_text(text);
        self.refresh()
    }

    /// Toggles the type filter and refetches if the request changed.
    pub fn toggle_type(&mut self, clicked: SearchType) -> bool {
        self.input.toggle_type(clicked);
        self.refresh()
    }

    /// Flips autocomplete and refetches if the request changed.
    pub fn toggle_autocomplete(&mut self) -> bool {
        self.input.toggle_autocomplete();
        self.refresh()
    }

    /// Result-selection callback: replaces the text with the label of the
    /// record at `index`. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        match self.state.list.get(index) {
            Some(record) => {
                let label = record.label.clone();
                self.set_text(label)
            }
            None => false,
        }
    }

    /// Folds a fetch outcome into the display state.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        self.state.loading = false;
        match outcome.result {
            Ok(collection) => {
                self.state.list = map_results(&collection);
                self.state.error = None;
            }
            Err(err) => {
                tracing::warn!(url = %outcome.url, error = %err, "search request failed");
                self.state.error = Some(err);
            }
        }
    }

    fn refresh(&mut self) -> bool {
        let descriptor = self.client.build_query(&self.input);
        if descriptor == self.descriptor {
            return false;
        }
        self.descriptor = descriptor;
        self.dispatch();
        true
    }

    fn dispatch(&mut self) {
        if self.descriptor.is_idle() {
            self.state = DisplayState::default();
            return;
        }

        self.state.loading = true;
        let client = Arc::clone(&self.client);
        let descriptor = self.descriptor.clone();
        let outcomes = self.outcomes.clone();
        tracing::debug!(url = %descriptor.url, "dispatching search");

        tokio::spawn(async move {
            let result = client
                .fetch(&descriptor)
                .await
                .map(Option::unwrap_or_default)
                .map_err(Arc::new);
            // The receiver is gone once the session has ended.
            let _ = outcomes.send(FetchOutcome {
                url: descriptor.url,
                result,
            });
        });
    }
}
