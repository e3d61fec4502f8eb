//! View controller state machine.
//!
//! Every transition consumes the current [`ViewState`] and returns the next one;
//! nothing is mutated behind the caller's back. The displayed list is always
//! derived from the store, the baseline order, the query and the sort spec.

use rand::Rng;
use shared::{
    domain::{Record, SortField, SortSpec},
    error::LoadError,
};
use tracing::debug;

use crate::{compare, filter::filter, shuffle, store::RecordStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    store: RecordStore,
    /// Fetch order, or the last shuffled permutation of the store.
    baseline: Vec<Record>,
    query: String,
    sort: SortSpec,
    sort_active: bool,
    displayed: Vec<Record>,
}

impl TableState {
    /// Fresh table in fetch order: empty query, default sort spec, no sort applied.
    pub fn loaded(store: RecordStore) -> Self {
        let baseline = store.records().to_vec();
        Self {
            displayed: baseline.clone(),
            store,
            baseline,
            query: String::new(),
            sort: SortSpec::default(),
            sort_active: false,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// False until the first field change or order toggle, and again after a shuffle.
    pub fn sort_active(&self) -> bool {
        self.sort_active
    }

    pub fn displayed(&self) -> &[Record] {
        &self.displayed
    }

    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
        .recomputed()
    }

    pub fn with_sort_field(self, field: SortField) -> Self {
        Self {
            sort: self.sort.with_field(field),
            sort_active: true,
            ..self
        }
        .recomputed()
    }

    pub fn with_toggled_order(self) -> Self {
        Self {
            sort: self.sort.toggled(),
            sort_active: true,
            ..self
        }
        .recomputed()
    }

    /// New random baseline; the sort spec is kept but not applied.
    pub fn shuffled<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        Self {
            baseline: shuffle::shuffled(self.baseline, rng),
            sort_active: false,
            ..self
        }
        .recomputed()
    }

    fn recomputed(self) -> Self {
        let mut displayed = filter(&self.baseline, &self.query);
        if self.sort_active {
            compare::sort(&mut displayed, self.sort);
        }
        Self { displayed, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Ready(TableState),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&TableState> {
        match self {
            Self::Ready(table) => Some(table),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error(_) => "error",
            Self::Ready(_) => "ready",
        }
    }
}

#[derive(Debug, Clone)]
pub enum ViewEvent {
    LoadFinished(Result<Vec<Record>, LoadError>),
    SearchInput(String),
    SortFieldChanged(SortField),
    SortOrderToggled,
    Shuffle,
    Retry,
}

impl ViewEvent {
    fn label(&self) -> &'static str {
        match self {
            Self::LoadFinished(_) => "load_finished",
            Self::SearchInput(_) => "search_input",
            Self::SortFieldChanged(_) => "sort_field_changed",
            Self::SortOrderToggled => "sort_order_toggled",
            Self::Shuffle => "shuffle",
            Self::Retry => "retry",
        }
    }
}

/// Applies one event. Events that are not defined for the current state leave
/// it unchanged.
pub fn reduce<R: Rng + ?Sized>(state: ViewState, event: ViewEvent, rng: &mut R) -> ViewState {
    match (state, event) {
        (ViewState::Loading, ViewEvent::LoadFinished(Ok(records))) => {
            ViewState::Ready(TableState::loaded(RecordStore::from_records(records)))
        }
        (ViewState::Loading, ViewEvent::LoadFinished(Err(err))) => {
            ViewState::Error(err.user_message().to_string())
        }
        (ViewState::Error(_), ViewEvent::Retry) => ViewState::Loading,
        (ViewState::Ready(table), ViewEvent::SearchInput(query)) => {
            ViewState::Ready(table.with_query(query))
        }
        (ViewState::Ready(table), ViewEvent::SortFieldChanged(field)) => {
            ViewState::Ready(table.with_sort_field(field))
        }
        (ViewState::Ready(table), ViewEvent::SortOrderToggled) => {
            ViewState::Ready(table.with_toggled_order())
        }
        (ViewState::Ready(table), ViewEvent::Shuffle) => ViewState::Ready(table.shuffled(rng)),
        (state, event) => {
            debug!(
                state = state.label(),
                event = event.label(),
                "ignoring event not valid in current state"
            );
            state
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
