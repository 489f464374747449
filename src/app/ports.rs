use async_trait::async_trait;

use crate::error::Result;
use crate::pipeline::accuracy_for_tier;
use crate::types::{AddressComponents, GeocodeOutcome, RawGeocodeResult};

/// A geocoding backend the validation pipeline can delegate to.
///
/// `lookup` is the only operation allowed to fail; the extraction methods
/// are total and fall back to empty/lowest-accuracy values on malformed
/// results.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Stable identifier echoed into every validation result.
    fn name(&self) -> &str;

    /// Resolve a free-form address. No matches is `Ok` with
    /// `GeocodeStatus::ZeroResults`, not an error.
    async fn lookup(&self, address: &str) -> Result<GeocodeOutcome>;

    /// Raw, unnormalized components of a result.
    fn extract_components(&self, result: &RawGeocodeResult) -> AddressComponents;

    /// Provider-specific accuracy tier of a result.
    fn accuracy_tier(&self, result: &RawGeocodeResult) -> String;

    /// Provider's display form of the resolved address, if any.
    fn formatted_address(&self, result: &RawGeocodeResult) -> Option<String>;

    /// Maps an accuracy tier onto [0, 1].
    fn accuracy(&self, tier: &str) -> f64 {
        accuracy_for_tier(tier)
    }
}

// Transport port used by HTTP-backed providers
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str) -> std::result::Result<HttpGetResult, String>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub status: u16,
    pub status_text: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl HttpGetResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
