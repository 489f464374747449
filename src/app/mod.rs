pub mod ports;
pub mod validate_use_case;

pub use ports::{GeocodeProvider, HttpClientPort, HttpGetResult};
pub use validate_use_case::AddressValidationService;
