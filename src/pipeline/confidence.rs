//! Confidence scoring for a single geocode match.
//!
//! The weights are additive and deliberately do not sum to one; the result
//! is clamped into [0, 1].

use crate::constants::{
    TIER_APPROXIMATE, TIER_GEOMETRIC_CENTER, TIER_RANGE_INTERPOLATED, TIER_ROOFTOP,
};

const PROVIDER_ACCURACY_WEIGHT: f64 = 0.4;
const COMPLETENESS_FULL_BONUS: f64 = 0.4;
const COMPLETENESS_PARTIAL_WEIGHT: f64 = 0.3;
const EXACT_MATCH_BONUS: f64 = 0.2;
const PARTIAL_MATCH_WEIGHT: f64 = 0.1;

const UNKNOWN_TIER_ACCURACY: f64 = 0.3;

/// Signals feeding the confidence score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInputs {
    pub has_all_components: bool,
    /// Provider accuracy in [0, 1].
    pub provider_accuracy: f64,
    pub is_exact_match: bool,
    /// Component match ratio in [0, 1].
    pub component_match_ratio: f64,
}

pub fn calculate_confidence(inputs: &ConfidenceInputs) -> f64 {
    let mut score = inputs.provider_accuracy * PROVIDER_ACCURACY_WEIGHT;

    score += if inputs.has_all_components {
        COMPLETENESS_FULL_BONUS
    } else {
        inputs.component_match_ratio * COMPLETENESS_PARTIAL_WEIGHT
    };

    score += if inputs.is_exact_match {
        EXACT_MATCH_BONUS
    } else {
        inputs.component_match_ratio * PARTIAL_MATCH_WEIGHT
    };

    score.clamp(0.0, 1.0)
}

/// Maps the four-tier location accuracy taxonomy to a score. Unrecognized
/// tiers score below the weakest known tier.
pub fn accuracy_for_tier(tier: &str) -> f64 {
    match tier {
        TIER_ROOFTOP => 1.0,
        TIER_RANGE_INTERPOLATED => 0.85,
        TIER_GEOMETRIC_CENTER => 0.7,
        TIER_APPROXIMATE => 0.5,
        _ => UNKNOWN_TIER_ACCURACY,
    }
}

/// Rounds to two decimal places.
pub fn round_confidence(confidence: f64) -> f64 {
    (confidence * 100.0).round() / 100.0
}
