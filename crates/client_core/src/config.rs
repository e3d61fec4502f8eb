use std::{collections::HashMap, fs, io, path::Path, time::Duration};

use anyhow::{anyhow, Context};
use url::Url;

pub const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const SETTINGS_FILE: &str = "user_table.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.into(),
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

/// Defaults, then the settings file if present, then environment overrides.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = read_settings_file(path)? {
        let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        if let Some(v) = file_cfg.get("source_url").and_then(toml::Value::as_str) {
            settings.source_url = v.to_string();
        }
        if let Some(v) = file_cfg.get("request_timeout_secs") {
            let secs = v
                .as_integer()
                .and_then(|secs| u64::try_from(secs).ok())
                .with_context(|| {
                    format!(
                        "request_timeout_secs in '{}' must be a non-negative integer, got {v}",
                        path.display()
                    )
                })?;
            settings.request_timeout_secs = Some(secs);
        }
    }

    if let Some(v) = env("USER_TABLE_SOURCE_URL") {
        settings.source_url = v;
    }
    if let Some(v) = env("APP__SOURCE_URL") {
        settings.source_url = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        let parsed = v
            .trim()
            .parse::<u64>()
            .with_context(|| format!("APP__REQUEST_TIMEOUT_SECS must be a number, got '{v}'"))?;
        settings.request_timeout_secs = Some(parsed);
    }

    validate_source_url(&settings.source_url)?;
    Ok(settings)
}

/// A missing file is not an error; anything else that stops us reading it is.
fn read_settings_file(path: &Path) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err)
            .with_context(|| format!("failed to read settings file '{}'", path.display())),
    }
}

pub fn validate_source_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid source url '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!(
            "unsupported source url scheme '{other}' in '{raw}'; expected http or https"
        )),
    }
}
