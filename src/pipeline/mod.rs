// Pure stages of address validation: normalization, match heuristics, scoring.

pub mod confidence;
pub mod matching;
pub mod normalize;

pub use confidence::{accuracy_for_tier, calculate_confidence, round_confidence, ConfidenceInputs};
pub use matching::{component_match_ratio, is_exact_match};
pub use normalize::{
    normalize_city, normalize_components, normalize_number, normalize_state, normalize_street,
    normalize_zip_code,
};
