/// Shared constants for the validation pipeline and its HTTP surface.

// Classification
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;

// Unverifiable reasons
pub const REASON_ADDRESS_REQUIRED: &str = "Address is required";
pub const REASON_NO_RESULTS: &str = "No results found";
pub const REASON_MULTIPLE_MATCHES: &str = "Multiple matches found";
pub const REASON_VALIDATION_ERROR_PREFIX: &str = "Validation error:";

// Accuracy tiers (Google `geometry.location_type` taxonomy)
pub const TIER_ROOFTOP: &str = "ROOFTOP";
pub const TIER_RANGE_INTERPOLATED: &str = "RANGE_INTERPOLATED";
pub const TIER_GEOMETRIC_CENTER: &str = "GEOMETRIC_CENTER";
pub const TIER_APPROXIMATE: &str = "APPROXIMATE";

// Google Geocoding provider
pub const GOOGLE_PROVIDER_NAME: &str = "google-geocoding";
pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const GOOGLE_DEFAULT_REGION: &str = "us";

// HTTP surface
pub const SERVICE_NAME: &str = "address-validator";
pub const INVALID_ADDRESS_MESSAGE: &str = "Address is required and must be a non-empty string";
