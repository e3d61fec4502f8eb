//! Types shared by the user table core and its front ends.

pub mod domain;
pub mod error;
pub mod protocol;
