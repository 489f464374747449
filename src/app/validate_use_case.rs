use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

use crate::app::ports::GeocodeProvider;
use crate::constants::{
    CONFIDENCE_THRESHOLD, REASON_ADDRESS_REQUIRED, REASON_MULTIPLE_MATCHES, REASON_NO_RESULTS,
    REASON_VALIDATION_ERROR_PREFIX,
};
use crate::observability::metrics;
use crate::pipeline::{
    calculate_confidence, component_match_ratio, is_exact_match, normalize_components,
    round_confidence, ConfidenceInputs,
};
use crate::types::{GeocodeOutcome, GeocodeStatus, RawGeocodeResult, ValidationResult, ValidationStatus};

/// Validates and standardizes free-form addresses against a geocoding provider.
///
/// One provider call per validation, no retries, no shared mutable state.
/// `validate` never fails: every failure mode becomes an `unverifiable`
/// result whose `reason` explains why.
pub struct AddressValidationService {
    provider: Arc<dyn GeocodeProvider>,
}

impl AddressValidationService {
    pub fn new(provider: Arc<dyn GeocodeProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    #[instrument(skip(self), fields(provider = %self.provider.name()))]
    pub async fn validate(&self, address: &str) -> ValidationResult {
        let result = self.run(address).await;
        metrics::validation::record_outcome(result.status, result.confidence);
        info!(status = %result.status, confidence = result.confidence, "Address validated");
        result
    }

    async fn run(&self, address: &str) -> ValidationResult {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            debug!("Rejecting empty address without calling provider");
            return self.unverifiable(address, REASON_ADDRESS_REQUIRED);
        }

        let started = Instant::now();
        let outcome = match self.provider.lookup(trimmed).await {
            Ok(outcome) => {
                metrics::provider::request_succeeded(self.provider.name(), started.elapsed().as_secs_f64());
                outcome
            }
            Err(e) => {
                metrics::provider::request_failed(self.provider.name(), started.elapsed().as_secs_f64());
                error!("Address validation error: {}", e);
                return self.unverifiable(
                    address,
                    format!("{} {}", REASON_VALIDATION_ERROR_PREFIX, e),
                );
            }
        };

        match single_result(&outcome) {
            Triage::NoResults => {
                debug!("Provider returned no results");
                self.unverifiable(trimmed, REASON_NO_RESULTS)
            }
            Triage::Ambiguous(count) => {
                debug!(count, "Provider returned multiple results");
                self.unverifiable(trimmed, REASON_MULTIPLE_MATCHES)
            }
            Triage::Single(result) => self.score(trimmed, result),
        }
    }

    /// Normalizes, scores and classifies the sole provider result.
    fn score(&self, original: &str, result: &RawGeocodeResult) -> ValidationResult {
        let raw = self.provider.extract_components(result);
        let standardized = normalize_components(&raw);
        let has_all_components = standardized.is_complete();

        let tier = self.provider.accuracy_tier(result);
        let provider_accuracy = self.provider.accuracy(&tier);
        let formatted = self.provider.formatted_address(result).unwrap_or_default();
        let exact = is_exact_match(original, &formatted);
        let ratio = component_match_ratio(original, &standardized);

        let confidence = round_confidence(calculate_confidence(&ConfidenceInputs {
            has_all_components,
            provider_accuracy,
            is_exact_match: exact,
            component_match_ratio: ratio,
        }));

        debug!(
            tier = %tier,
            exact,
            ratio,
            has_all_components,
            confidence,
            "Scored geocode result"
        );

        ValidationResult {
            status: classify(confidence, exact, has_all_components),
            original: original.to_string(),
            standardized,
            confidence,
            provider: self.provider.name().to_string(),
            reason: None,
        }
    }

    fn unverifiable(&self, original: &str, reason: impl Into<String>) -> ValidationResult {
        ValidationResult::unverifiable(original, self.provider.name(), reason)
    }
}

enum Triage<'a> {
    NoResults,
    Ambiguous(usize),
    Single(&'a RawGeocodeResult),
}

fn single_result(outcome: &GeocodeOutcome) -> Triage<'_> {
    if outcome.status == GeocodeStatus::ZeroResults {
        return Triage::NoResults;
    }
    match outcome.results.as_slice() {
        [] => Triage::NoResults,
        [only] => Triage::Single(only),
        many => Triage::Ambiguous(many.len()),
    }
}

/// First match wins: low confidence, then exact-and-complete, else corrected.
fn classify(confidence: f64, exact: bool, has_all_components: bool) -> ValidationStatus {
    if confidence < CONFIDENCE_THRESHOLD {
        ValidationStatus::Unverifiable
    } else if exact && has_all_components {
        ValidationStatus::Valid
    } else {
        ValidationStatus::Corrected
    }
}
