use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Record, error::LoadError, protocol::decode_records};
use tracing::{info, warn};

use crate::config::Settings;

/// Something that can produce the full record listing on demand.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Record>, LoadError>;

    fn describe(&self) -> String;
}

pub struct HttpRecordSource {
    http: Client,
    source_url: String,
}

impl HttpRecordSource {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            source_url: source_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to build http client")?;
        Ok(Self {
            http,
            source_url: settings.source_url.clone(),
        })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self) -> Result<Vec<Record>, LoadError> {
        let response = self
            .http
            .get(&self.source_url)
            .send()
            .await
            .map_err(|err| LoadError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.source_url.clone(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| LoadError::Network(err.to_string()))?;
        decode_records(&body)
    }

    fn describe(&self) -> String {
        self.source_url.clone()
    }
}

/// Runs one fetch attempt and logs its outcome.
pub async fn load(source: &dyn RecordSource) -> Result<Vec<Record>, LoadError> {
    let origin = source.describe();
    match source.fetch().await {
        Ok(records) => {
            info!(source = %origin, count = records.len(), "loaded user records");
            Ok(records)
        }
        Err(err) => {
            warn!(source = %origin, error = %err, "failed to load user records");
            Err(err)
        }
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
