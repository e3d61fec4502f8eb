//! Controller layer: backend events and command orchestration. View state
//! transitions live in `client_core::view`.

pub mod events;
pub mod orchestration;
