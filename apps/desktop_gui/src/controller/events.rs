//! Backend-to-UI events and status text for load failures.

use shared::{domain::Record, error::LoadError};

pub enum UiEvent {
    Info(String),
    RecordsLoaded(Result<Vec<Record>, LoadError>),
}

/// Status bar hint for a failed fetch. The table area always shows the generic
/// load failure message; this line tells the viewer what to check.
pub fn classify_load_failure(err: &LoadError) -> String {
    match err {
        LoadError::Network(detail) => {
            let lower = detail.to_ascii_lowercase();
            if lower.contains("timed out") || lower.contains("timeout") {
                "Source timed out; retry or raise the request timeout.".to_string()
            } else if lower.contains("backend") {
                format!("Backend worker unavailable: {detail}")
            } else {
                "Source unreachable; check URL/network and retry.".to_string()
            }
        }
        LoadError::Status { status, url } => {
            format!("Source {url} answered with HTTP {status}; retry later.")
        }
        LoadError::Malformed(detail) => format!("Source returned an unexpected payload: {detail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_timeouts_separately_from_refusals() {
        let timeout = classify_load_failure(&LoadError::Network(
            "error sending request: operation timed out".to_string(),
        ));
        assert!(timeout.starts_with("Source timed out"));

        let refused =
            classify_load_failure(&LoadError::Network("connection refused".to_string()));
        assert!(refused.starts_with("Source unreachable"));
    }

    #[test]
    fn status_hint_names_the_code() {
        let hint = classify_load_failure(&LoadError::Status {
            status: 502,
            url: "http://example.test/users".to_string(),
        });
        assert!(hint.contains("HTTP 502"));
    }
}
