use std::time::{Duration, Instant};

use log::{debug, info, warn};
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header;
use serde::Deserialize;

use crate::error::Result;
use crate::lookup::FoodLookup;
use crate::models::FoodRecord;

pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Public rate-limited key accepted by FoodData Central.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Connection settings for FoodData Central.
#[derive(Debug, Clone, PartialEq)]
pub struct UsdaConfig {
    pub base_url: String,
    pub api_key: String,
}

impl UsdaConfig {
    /// Build a config, falling back to the demo key when none is given.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let api_key = match api_key.filter(|k| !k.trim().is_empty()) {
            Some(key) => key,
            None => {
                warn!("No USDA API key configured, using {}", DEMO_API_KEY);
                DEMO_API_KEY.to_string()
            }
        };

        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
        }
    }

    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}/foods/search", self.base_url.trim_end_matches('/'))
    }
}

impl Default for UsdaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEMO_API_KEY.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Option<Vec<serde_json::Value>>,
}

/// Parse a search response body.
///
/// Records are converted one at a time; a record that does not match the
/// expected shape is skipped without affecting the others.
pub fn parse_foods(body: &[u8]) -> Result<Vec<FoodRecord>> {
    let response: SearchResponse = serde_json::from_slice(body)?;

    let foods = response
        .foods
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value::<FoodRecord>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Skipping food record {}: {}", i, e);
                None
            }
        })
        .collect();

    Ok(foods)
}

/// Blocking FoodData Central search client.
#[derive(Debug, Clone)]
pub struct UsdaClient {
    client: Client,
    config: UsdaConfig,
}

impl UsdaClient {
    pub fn new(config: UsdaConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = ClientBuilder::new()
            .user_agent(APP_USER_AGENT)
            .default_headers(headers)
            .timeout(Option::<Duration>::None)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &UsdaConfig {
        &self.config
    }

    fn try_search(&self, query: &str) -> Result<Option<Vec<FoodRecord>>> {
        let response = self
            .client
            .get(self.config.search_url())
            .query(&[("api_key", self.config.api_key.as_str()), ("query", query)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Food search for '{}' returned HTTP {}", query, status);
            return Ok(None);
        }

        let body = response.bytes()?;
        Ok(Some(parse_foods(&body)?))
    }
}

impl FoodLookup for UsdaClient {
    fn search(&self, query: &str) -> Vec<FoodRecord> {
        let started = Instant::now();
        info!("Searching FoodData Central for '{}'", query);

        let foods = match self.try_search(query) {
            Ok(Some(foods)) => foods,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Food search for '{}' failed: {}", query, e);
                Vec::new()
            }
        };

        debug!(
            "Food search for '{}' returned {} results in {:?}",
            query,
            foods.len(),
            started.elapsed()
        );
        foods
    }
}
