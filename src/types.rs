use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw geocode result as returned by a provider. Opaque to the pipeline;
/// only the provider knows how to read it.
pub type RawGeocodeResult = serde_json::Value;

/// The five standardized address fields. Empty string means "missing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressComponents {
    pub number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl AddressComponents {
    /// Field values in canonical order: number, street, city, state, zip.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.number.as_str(),
            self.street.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.zip_code.as_str(),
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| !f.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Corrected,
    Unverifiable,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Valid => "valid",
            ValidationStatus::Corrected => "corrected",
            ValidationStatus::Unverifiable => "unverifiable",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single validation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    pub original: String,
    pub standardized: AddressComponents,
    /// In [0, 1], rounded to two decimals.
    pub confidence: f64,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn unverifiable(
        original: impl Into<String>,
        provider: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            status: ValidationStatus::Unverifiable,
            original: original.into(),
            standardized: AddressComponents::default(),
            confidence: 0.0,
            provider: provider.into(),
            reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeocodeStatus {
    Ok,
    ZeroResults,
}

/// What a provider lookup hands back to the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeOutcome {
    pub status: GeocodeStatus,
    pub results: Vec<RawGeocodeResult>,
}

impl GeocodeOutcome {
    pub fn ok(results: Vec<RawGeocodeResult>) -> Self {
        Self {
            status: GeocodeStatus::Ok,
            results,
        }
    }

    pub fn zero_results() -> Self {
        Self {
            status: GeocodeStatus::ZeroResults,
            results: Vec::new(),
        }
    }
}
