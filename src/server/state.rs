use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::app::AddressValidationService;

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AddressValidationService>,
    /// Present only when a Prometheus recorder was installed at startup.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(service: Arc<AddressValidationService>) -> Self {
        Self { service, metrics: None }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
