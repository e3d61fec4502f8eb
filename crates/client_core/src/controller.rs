use rand::Rng;
use shared::domain::SortField;
use tracing::debug;

use crate::{
    loader::{self, RecordSource},
    render::{render, RenderView},
    view::{reduce, ViewEvent, ViewState},
};

/// Owns the view state and drives fetches against a [`RecordSource`].
///
/// Fetches need `&mut self`, so at most one is ever in flight.
pub struct TableController<S: RecordSource> {
    source: S,
    state: ViewState,
}

impl<S: RecordSource> TableController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn render(&self) -> RenderView {
        render(&self.state)
    }

    /// Runs the pending fetch. Does nothing unless the state is `Loading`.
    pub async fn load(&mut self) -> &ViewState {
        if !self.state.is_loading() {
            debug!("load requested outside loading state; skipping fetch");
            return &self.state;
        }
        let outcome = loader::load(&self.source).await;
        self.dispatch(ViewEvent::LoadFinished(outcome));
        &self.state
    }

    /// Re-enters `Loading` from `Error` and fetches again. Returns false if
    /// there was no error to retry from.
    pub async fn retry(&mut self) -> bool {
        if !self.state.can_retry() {
            return false;
        }
        self.dispatch(ViewEvent::Retry);
        self.load().await;
        true
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.dispatch(ViewEvent::SearchInput(query.into()));
    }

    pub fn select_sort_field(&mut self, field: SortField) {
        self.dispatch(ViewEvent::SortFieldChanged(field));
    }

    pub fn toggle_sort_order(&mut self) {
        self.dispatch(ViewEvent::SortOrderToggled);
    }

    pub fn shuffle(&mut self) {
        self.dispatch(ViewEvent::Shuffle);
    }

    pub fn dispatch(&mut self, event: ViewEvent) {
        self.dispatch_with_rng(event, &mut rand::rng());
    }

    pub fn dispatch_with_rng<R: Rng + ?Sized>(&mut self, event: ViewEvent, rng: &mut R) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event, rng);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
