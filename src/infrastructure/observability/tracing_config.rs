const DEFAULT_FILTER: &str = "info,transcribe_relay=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, json_format: bool, filter: Option<String>) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        }
    }
}
