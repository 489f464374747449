//! Agreement heuristics between the caller's input and the provider's answer.

use crate::types::AddressComponents;

/// Lower-cases and drops everything that is not an ASCII letter or digit.
fn alphanumeric_key(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Loose near-duplicate check: after stripping punctuation and whitespace,
/// one string must contain the other. Either side empty is never a match.
pub fn is_exact_match(original: &str, formatted: &str) -> bool {
    if original.is_empty() || formatted.is_empty() {
        return false;
    }

    let original = alphanumeric_key(original);
    let formatted = alphanumeric_key(formatted);
    formatted.contains(&original) || original.contains(&formatted)
}

/// Fraction of non-empty standardized fields that literally appear
/// (case-insensitively) in the original input. Zero when no field is set.
pub fn component_match_ratio(original: &str, standardized: &AddressComponents) -> f64 {
    let original = original.to_lowercase();
    let mut matches = 0usize;
    let mut total = 0usize;

    for value in standardized.fields().iter().filter(|v| !v.is_empty()) {
        total += 1;
        if original.contains(&value.to_lowercase()) {
            matches += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }
    matches as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(number: &str, street: &str, city: &str, state: &str, zip: &str) -> AddressComponents {
        AddressComponents {
            number: number.to_string(),
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip_code: zip.to_string(),
        }
    }

    #[test]
    fn test_exact_match_rejects_empty_sides() {
        assert!(!is_exact_match("", "formatted"));
        assert!(!is_exact_match("original", ""));
        assert!(!is_exact_match("", ""));
    }

    #[test]
    fn test_exact_match_identical_and_containment() {
        assert!(is_exact_match("1600 Amphitheatre Parkway", "1600 Amphitheatre Parkway"));
        assert!(is_exact_match("1600 Amphitheatre", "1600 Amphitheatre Parkway, Mountain View"));
        assert!(is_exact_match("1600 Amphitheatre Parkway, Mountain View", "1600 Amphitheatre"));
    }

    #[test]
    fn test_exact_match_ignores_punctuation_and_case() {
        assert!(is_exact_match("1600 Amphitheatre Parkway", "1600-AMPHITHEATRE-PARKWAY"));
        assert!(is_exact_match(
            "1600 Amphitheatre Parkway, Mountain View, CA 94043",
            "1600 Amphitheatre Parkway, Mountain View, CA 94043, USA"
        ));
    }

    #[test]
    fn test_exact_match_fails_on_abbreviation_differences() {
        assert!(!is_exact_match(
            "1600 amphitheatre pkwy mountain view ca",
            "1600 Amphitheatre Parkway, Mountain View, CA 94043, USA"
        ));
    }

    #[test]
    fn test_ratio_zero_without_components() {
        assert_eq!(component_match_ratio("anything at all", &AddressComponents::default()), 0.0);
        assert_eq!(component_match_ratio("", &AddressComponents::default()), 0.0);
    }

    #[test]
    fn test_ratio_all_components_present() {
        let standardized = components("1600", "Amphitheatre", "Mountain View", "CA", "94043");
        assert_eq!(
            component_match_ratio("1600 Amphitheatre Mountain View CA 94043", &standardized),
            1.0
        );
    }

    #[test]
    fn test_ratio_partial() {
        let standardized = components("1600", "Amphitheatre", "Mountain View", "NY", "94043");
        let ratio = component_match_ratio("1600 Amphitheatre Mountain View", &standardized);
        assert!((ratio - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_counts_only_non_empty_fields() {
        let standardized = components("", "", "Mountain View", "", "");
        assert_eq!(component_match_ratio("mountain view", &standardized), 1.0);
    }
}
