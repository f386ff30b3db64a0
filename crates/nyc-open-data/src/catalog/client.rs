//! Blocking client for the Socrata catalog (Discovery) API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{NycError, Result};

use super::source::{CatalogSource, records_from_value};

/// Catalog API host.
pub const DEFAULT_BASE_URL: &str = "https://api.us.opendata.socrata.com";

/// Open data portal whose datasets are listed.
pub const DEFAULT_DOMAIN: &str = "data.cityofnewyork.us";

/// Environment variable holding an optional application token.
pub const APP_TOKEN_ENV: &str = "SOCRATA_APP_TOKEN";

/// Catalog client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog API.
    pub base_url: String,
    /// Portal domain to list datasets for.
    pub domain: String,
    /// Maximum number of records requested in the single catalog query.
    pub limit: usize,
    /// Request timeout.
    pub timeout: Duration,
    /// Application token sent as `X-App-Token` (raises rate limits).
    pub app_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            limit: 10_000,
            timeout: Duration::from_secs(60),
            app_token: None,
        }
    }
}

impl ClientConfig {
    /// Default configuration with the app token taken from the environment.
    pub fn from_env() -> Self {
        Self {
            app_token: std::env::var(APP_TOKEN_ENV).ok().filter(|t| !t.is_empty()),
            ..Self::default()
        }
    }

    /// Set the portal domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the record limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the application token.
    pub fn with_app_token(mut self, token: impl Into<String>) -> Self {
        self.app_token = Some(token.into());
        self
    }

    /// Full URL of the catalog query.
    pub fn catalog_url(&self) -> Result<url::Url> {
        let base = format!("{}/api/catalog/v1", self.base_url.trim_end_matches('/'));
        url::Url::parse_with_params(
            &base,
            &[
                ("domains", self.domain.as_str()),
                ("search_context", self.domain.as_str()),
                ("limit", &self.limit.to_string()),
            ],
        )
        .map_err(|e| NycError::Config(format!("Invalid catalog URL '{}': {}", base, e)))
    }
}

/// Remote catalog source backed by the Socrata Discovery API.
pub struct SocrataClient {
    client: Client,
    config: ClientConfig,
}

impl SocrataClient {
    /// Create a client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NycError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(ref token) = self.config.app_token {
            headers.insert(
                "X-App-Token",
                HeaderValue::from_str(token)
                    .map_err(|e| NycError::Config(format!("Invalid app token: {}", e)))?,
            );
        }
        Ok(headers)
    }
}

impl CatalogSource for SocrataClient {
    fn fetch_records(&self) -> Result<Vec<Value>> {
        let url = self.config.catalog_url()?;
        info!(%url, "querying catalog");

        let response = self
            .client
            .get(url)
            .headers(self.build_headers()?)
            .send()
            .map_err(|e| NycError::SourceUnavailable(format!("Catalog request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(NycError::SourceUnavailable(format!(
                "Catalog API error ({}): {}",
                status, error_text
            )));
        }

        let body: Value = response.json().map_err(|e| {
            NycError::SourceUnavailable(format!("Failed to parse catalog response: {}", e))
        })?;

        let records = records_from_value(body)?;
        debug!(records = records.len(), "catalog query returned");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("{} catalog for {}", self.config.base_url, self.config.domain)
    }
}
