//! Canonical forms for individual address fields.
//!
//! Every function here is total: empty input yields an empty string and
//! unrecognized input passes through in a predictable form.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::types::AddressComponents;

/// Street type suffixes and their USPS-style abbreviations. Abbreviations
/// map to themselves so already-abbreviated input keeps canonical casing.
static STREET_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("st", "St"),
        ("street", "St"),
        ("ave", "Ave"),
        ("avenue", "Ave"),
        ("rd", "Rd"),
        ("road", "Rd"),
        ("blvd", "Blvd"),
        ("boulevard", "Blvd"),
        ("dr", "Dr"),
        ("drive", "Dr"),
        ("ln", "Ln"),
        ("lane", "Ln"),
        ("ct", "Ct"),
        ("court", "Ct"),
        ("pkwy", "Pkwy"),
        ("parkway", "Pkwy"),
        ("pl", "Pl"),
        ("place", "Pl"),
        ("cir", "Cir"),
        ("circle", "Cir"),
    ])
});

static CITY_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("new york", "New York"),
        ("los angeles", "Los Angeles"),
        ("san francisco", "San Francisco"),
        ("san diego", "San Diego"),
        ("las vegas", "Las Vegas"),
    ])
});

/// Full state names (50 states + DC) to postal abbreviations.
static STATE_ABBREVIATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("alabama", "AL"),
        ("alaska", "AK"),
        ("arizona", "AZ"),
        ("arkansas", "AR"),
        ("california", "CA"),
        ("colorado", "CO"),
        ("connecticut", "CT"),
        ("delaware", "DE"),
        ("florida", "FL"),
        ("georgia", "GA"),
        ("hawaii", "HI"),
        ("idaho", "ID"),
        ("illinois", "IL"),
        ("indiana", "IN"),
        ("iowa", "IA"),
        ("kansas", "KS"),
        ("kentucky", "KY"),
        ("louisiana", "LA"),
        ("maine", "ME"),
        ("maryland", "MD"),
        ("massachusetts", "MA"),
        ("michigan", "MI"),
        ("minnesota", "MN"),
        ("mississippi", "MS"),
        ("missouri", "MO"),
        ("montana", "MT"),
        ("nebraska", "NE"),
        ("nevada", "NV"),
        ("new hampshire", "NH"),
        ("new jersey", "NJ"),
        ("new mexico", "NM"),
        ("new york", "NY"),
        ("north carolina", "NC"),
        ("north dakota", "ND"),
        ("ohio", "OH"),
        ("oklahoma", "OK"),
        ("oregon", "OR"),
        ("pennsylvania", "PA"),
        ("rhode island", "RI"),
        ("south carolina", "SC"),
        ("south dakota", "SD"),
        ("tennessee", "TN"),
        ("texas", "TX"),
        ("utah", "UT"),
        ("vermont", "VT"),
        ("virginia", "VA"),
        ("washington", "WA"),
        ("west virginia", "WV"),
        ("wisconsin", "WI"),
        ("wyoming", "WY"),
        ("district of columbia", "DC"),
    ])
});

/// Upper-cases the first character of an already lower-cased word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-cases each word; only the final word is eligible for street type
/// abbreviation ("Parkway Drive" becomes "Parkway Dr").
pub fn normalize_street(street: &str) -> String {
    let lower = street.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let last = words.len().saturating_sub(1);

    words
        .iter()
        .enumerate()
        .map(|(index, word)| match STREET_TYPES.get(*word) {
            Some(abbreviation) if index == last => (*abbreviation).to_string(),
            _ => capitalize(word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn normalize_city(city: &str) -> String {
    let lower = city.trim().to_lowercase();
    if let Some(canonical) = CITY_EXCEPTIONS.get(lower.as_str()) {
        return (*canonical).to_string();
    }

    lower
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn state_code(lower: &str) -> Option<String> {
    if lower.len() == 2 && lower.chars().all(|c| c.is_ascii_lowercase()) {
        return Some(lower.to_ascii_uppercase());
    }
    STATE_ABBREVIATIONS.get(lower).map(|abbreviation| (*abbreviation).to_string())
}

/// Two ASCII letters are upper-cased, full names map to their postal code,
/// anything else is upper-cased as given.
///
/// Unicode upper-casing can fold a miss into a known name (`"ﬂorida"`
/// becomes `"FLORIDA"`), so the upper-cased form is looked up again.
pub fn normalize_state(state: &str) -> String {
    if state.is_empty() {
        return String::new();
    }

    if let Some(code) = state_code(&state.trim().to_lowercase()) {
        return code;
    }

    let upper = state.to_uppercase();
    state_code(&upper.trim().to_lowercase()).unwrap_or(upper)
}

/// Keeps the first five digits; ZIP+4 extensions and punctuation are dropped.
pub fn normalize_zip_code(zip_code: &str) -> String {
    zip_code.chars().filter(|c| c.is_ascii_digit()).take(5).collect()
}

pub fn normalize_number(number: &str) -> String {
    number.trim().to_string()
}

/// Applies the per-field normalizer to each raw component.
pub fn normalize_components(raw: &AddressComponents) -> AddressComponents {
    AddressComponents {
        number: normalize_number(&raw.number),
        street: normalize_street(&raw.street),
        city: normalize_city(&raw.city),
        state: normalize_state(&raw.state),
        zip_code: normalize_zip_code(&raw.zip_code),
    }
}
