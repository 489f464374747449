pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod infra;
pub mod observability;
pub mod pipeline;
pub mod server;
pub mod types;

pub use app::{AddressValidationService, GeocodeProvider};
pub use error::{Result, ValidatorError};
pub use types::{AddressComponents, GeocodeOutcome, GeocodeStatus, ValidationResult, ValidationStatus};
