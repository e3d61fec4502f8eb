//! Data pipeline behind the user table: fetch, store, filter, sort or shuffle,
//! and the state machine that ties them to viewer actions.

pub mod compare;
pub mod config;
pub mod controller;
pub mod filter;
pub mod loader;
pub mod render;
pub mod shuffle;
pub mod store;
pub mod view;

pub use config::{load_settings, Settings};
pub use controller::TableController;
pub use loader::{HttpRecordSource, RecordSource};
pub use render::{render, RenderView, RowView};
pub use store::RecordStore;
pub use view::{reduce, TableState, ViewEvent, ViewState};
