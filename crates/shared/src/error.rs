use thiserror::Error;

/// The one message a viewer sees for any failed fetch.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load data";

/// Failure of a record fetch. Every variant collapses to
/// [`LOAD_FAILURE_MESSAGE`] for display; the `Display` impl keeps the detail for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("unexpected http status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("malformed response body: {0}")]
    Malformed(String),
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort field '{0}' (expected one of id, name, username, email, phone)")]
pub struct UnknownSortField(pub String);
