use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::app::ports::{GeocodeProvider, HttpClientPort};
use crate::config::GeocodingConfig;
use crate::constants::{GOOGLE_PROVIDER_NAME, INVALID_ADDRESS_MESSAGE, TIER_APPROXIMATE};
use crate::error::{Result, ValidatorError};
use crate::infra::http_client::ReqwestHttp;
use crate::types::{AddressComponents, GeocodeOutcome, RawGeocodeResult};

/// Top-level Google Geocoding response. Results stay as raw JSON.
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<Value>,
    #[serde(default)]
    error_message: Option<String>,
}

/// Google Geocoding API adapter, restricted to one region.
pub struct GoogleGeocodingProvider {
    http: Arc<dyn HttpClientPort>,
    api_key: String,
    base_url: String,
    region: String,
}

impl GoogleGeocodingProvider {
    pub fn new(
        http: Arc<dyn HttpClientPort>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
            region: region.into(),
        }
    }

    /// Builds the provider with a reqwest transport from configuration.
    pub fn from_config(config: &GeocodingConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            ValidatorError::Config("ADDRESS_API_KEY is required. Please set it in your .env file.".to_string())
        })?;
        let http = ReqwestHttp::new(config.timeout())?;
        Ok(Self::new(Arc::new(http), api_key, config.base_url.clone(), config.region.clone()))
    }

    fn request_url(&self, address: &str) -> Result<Url> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("address", address),
                ("key", self.api_key.as_str()),
                ("region", self.region.as_str()),
            ],
        )
        .map_err(|e| ValidatorError::Config(format!("Invalid geocoding base URL '{}': {}", self.base_url, e)))
    }

    async fn fetch(&self, url: &Url) -> Result<GeocodeOutcome> {
        let response = self.http.get(url.as_str()).await.map_err(|e| {
            error!("Failed to call Google Geocoding API: {}", e);
            ValidatorError::provider(format!("Failed to call Google Geocoding API: {}", e))
        })?;

        if !response.is_success() {
            let message = format!(
                "Google Geocoding API error: {} {}",
                response.status, response.status_text
            );
            error!("{}", message);
            return Err(ValidatorError::provider(message));
        }

        let body: GeocodeResponse = serde_json::from_slice(&response.bytes).map_err(|e| {
            error!(content_type = %response.content_type, "Failed to decode Google Geocoding response: {}", e);
            ValidatorError::provider(format!(
                "Failed to call Google Geocoding API: undecodable {} response: {}",
                response.content_type, e
            ))
        })?;

        match body.status.as_str() {
            "OK" => Ok(GeocodeOutcome::ok(body.results)),
            "ZERO_RESULTS" => Ok(GeocodeOutcome::zero_results()),
            "REQUEST_DENIED" => {
                error!(detail = ?body.error_message, "Google Geocoding API request denied");
                Err(ValidatorError::provider(
                    "Google Geocoding API key is invalid or quota exceeded",
                ))
            }
            other => {
                error!(detail = ?body.error_message, "Google Geocoding API error: {}", other);
                Err(ValidatorError::provider(format!("Google Geocoding API error: {}", other)))
            }
        }
    }
}

#[async_trait]
impl GeocodeProvider for GoogleGeocodingProvider {
    fn name(&self) -> &str {
        GOOGLE_PROVIDER_NAME
    }

    #[instrument(skip(self))]
    async fn lookup(&self, address: &str) -> Result<GeocodeOutcome> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ValidatorError::provider(INVALID_ADDRESS_MESSAGE));
        }

        let url = self.request_url(address)?;
        let outcome = self.fetch(&url).await?;
        debug!(results = outcome.results.len(), "Google geocode lookup finished");
        Ok(outcome)
    }

    fn extract_components(&self, result: &RawGeocodeResult) -> AddressComponents {
        let mut extracted = AddressComponents::default();
        let Some(components) = result.get("address_components").and_then(Value::as_array) else {
            return extracted;
        };

        for component in components {
            let types: Vec<&str> = component
                .get("types")
                .and_then(Value::as_array)
                .map(|types| types.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            let long_name = || text(component, "long_name");
            let has = |kind: &str| types.iter().any(|t| *t == kind);

            if has("street_number") {
                extracted.number = long_name();
            } else if has("route") {
                extracted.street = long_name();
            } else if has("locality") {
                extracted.city = long_name();
            } else if has("administrative_area_level_1") {
                extracted.state = text(component, "short_name");
            } else if has("postal_code") {
                extracted.zip_code = long_name();
            }
        }

        extracted
    }

    fn accuracy_tier(&self, result: &RawGeocodeResult) -> String {
        result
            .pointer("/geometry/location_type")
            .and_then(Value::as_str)
            .filter(|tier| !tier.is_empty())
            .unwrap_or(TIER_APPROXIMATE)
            .to_string()
    }

    fn formatted_address(&self, result: &RawGeocodeResult) -> Option<String> {
        result
            .get("formatted_address")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

fn text(value: &Value, key: &str) -> String {
    value.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}
