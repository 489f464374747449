mod common;

use address_validator::{AddressValidationService, ValidationStatus};
use common::{amphitheatre_rooftop, google_provider, ok_results, request_denied, zero_results, CannedHttp};
use serde_json::{json, Value};
use std::sync::Arc;

fn service_with(http: Arc<CannedHttp>) -> AddressValidationService {
    AddressValidationService::new(google_provider(http))
}

#[tokio::test]
async fn test_lowercase_abbreviated_input_is_corrected() {
    let service = service_with(CannedHttp::google(ok_results(vec![amphitheatre_rooftop()])));

    let result = service.validate("1600 amphitheatre pkwy mountain view ca").await;

    assert_eq!(result.status, ValidationStatus::Corrected);
    assert_eq!(result.standardized.street, "Amphitheatre Pkwy");
    assert_eq!(result.standardized.city, "Mountain View");
    assert_eq!(result.standardized.state, "CA");
    assert_eq!(result.standardized.zip_code, "94043");
    assert!(result.confidence > 0.7);
    assert_eq!(result.provider, "google-geocoding");
    assert!(result.reason.is_none());
}

#[tokio::test]
async fn test_full_input_is_valid() {
    let service = service_with(CannedHttp::google(ok_results(vec![amphitheatre_rooftop()])));

    let result = service
        .validate("1600 Amphitheatre Parkway, Mountain View, CA 94043")
        .await;

    assert_eq!(result.status, ValidationStatus::Valid);
    assert_eq!(result.confidence, 1.0);
    assert!(result.standardized.is_complete());
}

#[tokio::test]
async fn test_adapter_extraction_feeds_normalized_components() {
    // Non-canonical upstream values are normalized after extraction.
    let mut result = amphitheatre_rooftop();
    result["address_components"][4]["short_name"] = json!("california");
    result["address_components"][6]["long_name"] = json!("94043-1351");
    let service = service_with(CannedHttp::google(ok_results(vec![result])));

    let result = service.validate("1600 amphitheatre pkwy").await;

    assert_eq!(result.standardized.state, "CA");
    assert_eq!(result.standardized.zip_code, "94043");
    assert_eq!(result.standardized.number, "1600");
}

#[tokio::test]
async fn test_ambiguous_address() {
    let service = service_with(CannedHttp::google(ok_results(vec![
        json!({ "formatted_address": "Address 1" }),
        json!({ "formatted_address": "Address 2" }),
    ])));

    let result = service.validate("ambiguous address").await;

    assert_eq!(result.status, ValidationStatus::Unverifiable);
    assert_eq!(result.reason.as_deref(), Some("Multiple matches found"));
}

#[tokio::test]
async fn test_zero_results() {
    let service = service_with(CannedHttp::google(zero_results()));

    let result = service.validate("invalid address 99999").await;

    assert_eq!(result.status, ValidationStatus::Unverifiable);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.reason.as_deref(), Some("No results found"));
}

#[tokio::test]
async fn test_request_denied_becomes_validation_error() {
    let service = service_with(CannedHttp::google(request_denied()));

    let result = service.validate("test address").await;

    assert_eq!(result.status, ValidationStatus::Unverifiable);
    assert_eq!(
        result.reason.as_deref(),
        Some("Validation error: Google Geocoding API key is invalid or quota exceeded")
    );
    assert_eq!(result.confidence, 0.0);
}

#[tokio::test]
async fn test_transport_failure_becomes_validation_error() {
    let service = service_with(CannedHttp::failing("operation timed out"));

    let result = service.validate("test address").await;

    assert_eq!(result.status, ValidationStatus::Unverifiable);
    assert_eq!(
        result.reason.as_deref(),
        Some("Validation error: Failed to call Google Geocoding API: operation timed out")
    );
}

#[tokio::test]
async fn test_whitespace_address_never_reaches_provider() {
    let http = CannedHttp::google(ok_results(vec![amphitheatre_rooftop()]));
    let service = service_with(http.clone());

    let result = service.validate("  \t ").await;

    assert_eq!(result.status, ValidationStatus::Unverifiable);
    assert_eq!(result.reason.as_deref(), Some("Address is required"));
    assert_eq!(http.calls(), 0);
}

#[tokio::test]
async fn test_confidence_always_in_unit_interval() {
    let odd_results: Vec<Value> = vec![
        json!(null),
        json!({}),
        json!({ "address_components": "not a list", "geometry": { "location_type": 42 } }),
        json!({ "formatted_address": "", "geometry": { "location_type": "SATELLITE" } }),
        amphitheatre_rooftop(),
    ];

    for raw in odd_results {
        let service = service_with(CannedHttp::google(ok_results(vec![raw])));
        for input in ["1600 Amphitheatre Parkway", "x", "!!!", "94043"] {
            let result = service.validate(input).await;
            assert!((0.0..=1.0).contains(&result.confidence), "{:?}", result);
            if result.status == ValidationStatus::Valid {
                assert!(result.standardized.is_complete());
            }
        }
    }
}

#[tokio::test]
async fn test_concurrent_validations_are_independent() {
    let http = CannedHttp::google(ok_results(vec![amphitheatre_rooftop()]));
    let service = Arc::new(service_with(http.clone()));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                if i % 2 == 0 {
                    service.validate("1600 Amphitheatre Parkway, Mountain View, CA 94043").await
                } else {
                    service.validate("1600 amphitheatre pkwy mountain view ca").await
                }
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap();
        let expected = if i % 2 == 0 {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Corrected
        };
        assert_eq!(result.status, expected);
    }
    assert_eq!(http.calls(), 16);
}
