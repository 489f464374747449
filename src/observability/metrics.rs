//! Prometheus metrics for the validation service.
//!
//! Recording functions are safe to call before (or without) `init`; the
//! `metrics` facade drops samples when no recorder is installed.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fmt;

use crate::error::{Result, ValidatorError};
use crate::types::ValidationStatus;

/// Every metric name the service emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    ValidationsTotal,
    ValidationConfidence,
    ProviderRequestsSuccess,
    ProviderRequestsError,
    ProviderRequestDuration,
    HttpRequestsTotal,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::ValidationsTotal => "address_validator_validations_total",
            MetricName::ValidationConfidence => "address_validator_validation_confidence",
            MetricName::ProviderRequestsSuccess => "address_validator_provider_requests_success_total",
            MetricName::ProviderRequestsError => "address_validator_provider_requests_error_total",
            MetricName::ProviderRequestDuration => "address_validator_provider_request_duration_seconds",
            MetricName::HttpRequestsTotal => "address_validator_http_requests_total",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            ValidationsTotal,
            ValidationConfidence,
            ProviderRequestsSuccess,
            ProviderRequestsError,
            ProviderRequestDuration,
            HttpRequestsTotal,
        ]
        .into_iter()
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installs the global Prometheus recorder. Call once per process.
pub fn init() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ValidatorError::Config(format!("Failed to install Prometheus recorder: {}", e)))
}

pub mod validation {
    use super::*;

    /// Record the terminal status (and score) of one validation call.
    pub fn record_outcome(status: ValidationStatus, confidence: f64) {
        ::metrics::counter!(MetricName::ValidationsTotal.as_str(), "status" => status.as_str())
            .increment(1);
        ::metrics::histogram!(MetricName::ValidationConfidence.as_str()).record(confidence);
    }
}

pub mod provider {
    use super::*;

    pub fn request_succeeded(provider: &str, secs: f64) {
        let provider = provider.to_string();
        ::metrics::counter!(MetricName::ProviderRequestsSuccess.as_str(), "provider" => provider.clone())
            .increment(1);
        ::metrics::histogram!(MetricName::ProviderRequestDuration.as_str(), "provider" => provider)
            .record(secs);
    }

    pub fn request_failed(provider: &str, secs: f64) {
        let provider = provider.to_string();
        ::metrics::counter!(MetricName::ProviderRequestsError.as_str(), "provider" => provider.clone())
            .increment(1);
        ::metrics::histogram!(MetricName::ProviderRequestDuration.as_str(), "provider" => provider)
            .record(secs);
    }
}

pub mod http {
    use super::*;

    pub fn request_received(method: &str, status: u16) {
        ::metrics::counter!(
            MetricName::HttpRequestsTotal.as_str(),
            "method" => method.to_string(),
            "status" => status.to_string()
        )
        .increment(1);
    }
}
