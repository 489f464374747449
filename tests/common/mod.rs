use address_validator::app::{HttpClientPort, HttpGetResult};
use address_validator::infra::GoogleGeocodingProvider;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Transport that answers every request with one canned Google response.
pub struct CannedHttp {
    response: Result<HttpGetResult, String>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl CannedHttp {
    /// 200 OK carrying `body` as JSON.
    pub fn google(body: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(HttpGetResult {
                status: 200,
                status_text: "OK".to_string(),
                bytes: body.to_string().into_bytes(),
                content_type: "application/json; charset=UTF-8".to_string(),
            }),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpClientPort for CannedHttp {
    async fn get(&self, _url: &str) -> Result<HttpGetResult, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// The real Google adapter wired to a canned transport.
pub fn google_provider(http: Arc<CannedHttp>) -> Arc<GoogleGeocodingProvider> {
    Arc::new(GoogleGeocodingProvider::new(
        http,
        "test-key",
        "https://maps.example.com/maps/api/geocode/json",
        "us",
    ))
}

#[allow(dead_code)]
pub fn ok_results(results: Vec<Value>) -> Value {
    json!({ "status": "OK", "results": results })
}

#[allow(dead_code)]
pub fn zero_results() -> Value {
    json!({ "status": "ZERO_RESULTS", "results": [] })
}

#[allow(dead_code)]
pub fn request_denied() -> Value {
    json!({ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid." })
}

#[allow(dead_code)]
pub fn amphitheatre_rooftop() -> Value {
    json!({
        "formatted_address": "1600 Amphitheatre Parkway, Mountain View, CA 94043, USA",
        "address_components": [
            { "long_name": "1600", "short_name": "1600", "types": ["street_number"] },
            { "long_name": "Amphitheatre Parkway", "short_name": "Amphitheatre Pkwy", "types": ["route"] },
            { "long_name": "Mountain View", "short_name": "Mountain View", "types": ["locality", "political"] },
            { "long_name": "Santa Clara County", "short_name": "Santa Clara County", "types": ["administrative_area_level_2", "political"] },
            { "long_name": "California", "short_name": "CA", "types": ["administrative_area_level_1", "political"] },
            { "long_name": "United States", "short_name": "US", "types": ["country", "political"] },
            { "long_name": "94043", "short_name": "94043", "types": ["postal_code"] }
        ],
        "geometry": { "location_type": "ROOFTOP" }
    })
}
