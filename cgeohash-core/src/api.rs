//! Configured entry point over the geohash functions.
//!
//! The free functions in [`crate::geohash`] take every parameter
//! explicitly. `GeohashCodec` carries a [`CodecSettings`] so host code can
//! load the preferred precision once and then encode without repeating it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::geohash::{self, BoundingBox, DecodedPoint, Direction, PrecisionRange, Result};

fn deserialize_precision<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let precision = usize::deserialize(deserializer)?;
    geohash::check_precision(precision).map_err(serde::de::Error::custom)
}

/// Settings for a [`GeohashCodec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecSettings {
    /// Hash length used by [`GeohashCodec::encode`], at most
    /// [`MAX_PRECISION`](geohash::MAX_PRECISION) when loaded from JSON
    #[serde(deserialize_with = "deserialize_precision")]
    pub precision: usize,

    /// Lengths produced by [`GeohashCodec::encode_precisions`]
    pub range: PrecisionRange,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            precision: 9,
            range: PrecisionRange::ALL,
        }
    }
}

impl CodecSettings {
    /// Creates `CodecSettings` from a JSON string.
    ///
    /// Missing fields take their default values. The precision and range
    /// are validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the precision exceeds
    /// [`MAX_PRECISION`](geohash::MAX_PRECISION), or the range is invalid.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Converts these settings to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (extremely rare).
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Geohash codec bound to a set of [`CodecSettings`].
///
/// # Examples
///
/// ```
/// use cgeohash_core::{CodecSettings, GeohashCodec};
///
/// let codec = GeohashCodec::new();
/// assert_eq!(codec.encode(37.8324, 112.5584), "ww8p1r4t8");
///
/// let coarse = GeohashCodec::with_settings(CodecSettings {
///     precision: 5,
///     ..CodecSettings::default()
/// });
/// assert_eq!(coarse.encode(37.8324, 112.5584), "ww8p1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeohashCodec {
    settings: CodecSettings,
}

#[allow(clippy::unused_self)]
impl GeohashCodec {
    /// Creates a codec with default settings (precision 9, range 1..=9).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec with the given settings.
    ///
    /// The settings are trusted as given; use [`CodecSettings::from_json`]
    /// or [`geohash::check_precision`] for untrusted input.
    #[must_use]
    pub const fn with_settings(settings: CodecSettings) -> Self {
        Self { settings }
    }

    /// Gets the current settings.
    #[must_use]
    pub const fn settings(&self) -> CodecSettings {
        self.settings
    }

    /// Replaces the settings.
    pub fn set_settings(&mut self, settings: CodecSettings) {
        self.settings = settings;
    }

    /// Encodes at the configured precision.
    #[must_use]
    pub fn encode(&self, latitude: f64, longitude: f64) -> String {
        geohash::encode(latitude, longitude, self.settings.precision)
    }

    /// Encodes at every length of the configured range, shortest first.
    #[must_use]
    pub fn encode_precisions(&self, latitude: f64, longitude: f64) -> Vec<String> {
        geohash::encode_precisions(latitude, longitude, self.settings.range)
    }

    /// See [`geohash::decode`].
    ///
    /// # Errors
    ///
    /// Returns an error if `hash` contains a character outside the alphabet.
    pub fn decode(&self, hash: &str) -> Result<DecodedPoint> {
        geohash::decode(hash)
    }

    /// See [`geohash::decode_bbox`].
    ///
    /// # Errors
    ///
    /// Returns an error if `hash` contains a character outside the alphabet.
    pub fn decode_bbox(&self, hash: &str) -> Result<BoundingBox> {
        geohash::decode_bbox(hash)
    }

    /// See [`geohash::neighbor`].
    ///
    /// # Errors
    ///
    /// Returns an error if `hash` contains a character outside the alphabet.
    pub fn neighbor(&self, hash: &str, direction: Direction) -> Result<String> {
        geohash::neighbor(hash, direction)
    }

    /// See [`geohash::neighbors`].
    ///
    /// # Errors
    ///
    /// Returns an error if `hash` contains a character outside the alphabet.
    pub fn neighbors(&self, hash: &str) -> Result<[String; 8]> {
        geohash::neighbors(hash)
    }

    /// See [`geohash::expand`].
    ///
    /// # Errors
    ///
    /// Returns an error if `hash` contains a character outside the alphabet.
    pub fn expand(&self, hash: &str) -> Result<[String; 9]> {
        geohash::expand(hash)
    }
}
