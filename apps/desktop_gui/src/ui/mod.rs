//! UI layer for the desktop user table.

pub mod app;

pub use app::{StartupConfig, UserTableApp};
