//! Shared fixtures and proptest strategies for geohash integration tests.

#![allow(dead_code)] // each test binary uses a subset

use cgeohash_core::geohash::encode;
use proptest::prelude::*;

/// Points with their geohash at the listed length.
pub const KNOWN_POINTS: &[(f64, f64, &str)] = &[
    (57.64911, 10.40744, "u4pruy"),
    (37.8324, 112.5584, "ww8p1r4t8"),
    (42.6, -5.6, "ezs42"),
    (37.7749, -122.4194, "9q8yyk8y"),
    (-33.8688, 151.2093, "r3gx2f77b"),
    (-22.9068, -43.1729, "75cm9tfq"),
];

/// Symbols of the alphabet in both cases.
pub const VALID_SYMBOLS: &str = "[0-9b-hjkmnp-zB-HJKMNP-Z]";

/// Coordinates far enough from the poles and the antimeridian that a
/// one-cell step at length 3 or more stays inside the world.
pub fn interior_coordinate() -> impl Strategy<Value = (f64, f64)> {
    (-80.0f64..80.0, -170.0f64..170.0)
}

/// Any latitude/longitude in the valid domain.
pub fn any_coordinate() -> impl Strategy<Value = (f64, f64)> {
    (-90.0f64..=90.0, -180.0f64..=180.0)
}

/// Geohashes of interior cells, lengths 3 to 9.
pub fn interior_hash() -> impl Strategy<Value = String> {
    (interior_coordinate(), 3usize..=9).prop_map(|((lat, lon), len)| encode(lat, lon, len))
}

/// Strings drawn only from the alphabet, in mixed case.
pub fn valid_hash() -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("{VALID_SYMBOLS}{{0,12}}"))
        .expect("alphabet regex must compile")
}

/// Strings with at least one character outside the alphabet, returned with
/// the position of the first such character.
pub fn hash_with_invalid_char() -> impl Strategy<Value = (String, usize, char)> {
    (
        proptest::string::string_regex(&format!("{VALID_SYMBOLS}{{0,6}}"))
            .expect("alphabet regex must compile"),
        prop::sample::select(vec!['a', 'A', 'i', 'I', 'l', 'L', 'o', 'O', '!', ' ', '-', 'é']),
        valid_hash(),
    )
        .prop_map(|(prefix, bad, suffix)| {
            let position = prefix.chars().count();
            (format!("{prefix}{bad}{suffix}"), position, bad)
        })
}
