//! API bridging layer that exposes cgeohash-core functionality.
//!
//! One synchronous function per geohash operation. Every fallible call
//! returns `Result<_, String>`; the error text is the core error's display
//! form or a description of the rejected argument.

#![allow(clippy::needless_pass_by_value)] // host values arrive owned

use cgeohash_core::geohash::{
    self, BoundingBox, DecodedPoint, Direction, PrecisionRange, MAX_PRECISION,
};
use flutter_rust_bridge::frb;

/// Decoded cell centre and half extents (FFI struct).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedHash {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_error: f64,
    pub longitude_error: f64,
}

impl From<DecodedPoint> for DecodedHash {
    fn from(point: DecodedPoint) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            latitude_error: point.latitude_error,
            longitude_error: point.longitude_error,
        }
    }
}

/// Decoded cell bounds (FFI struct).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedBBox {
    pub minlat: f64,
    pub minlon: f64,
    pub maxlat: f64,
    pub maxlon: f64,
}

impl From<BoundingBox> for DecodedBBox {
    fn from(bbox: BoundingBox) -> Self {
        Self {
            minlat: bbox.min_lat,
            minlon: bbox.min_lon,
            maxlat: bbox.max_lat,
            maxlon: bbox.max_lon,
        }
    }
}

/// Converts a host integer into a hash length in `0..=MAX_PRECISION`.
fn to_length(value: i64, name: &str) -> Result<usize, String> {
    match usize::try_from(value) {
        Ok(len) if len <= MAX_PRECISION => Ok(len),
        _ => {
            log::warn!("rejected {name}: {value}");
            Err(format!(
                "{name} must be between 0 and {MAX_PRECISION}, got {value}"
            ))
        }
    }
}

/// Converts a host `[lat_delta, lon_delta]` list into a `Direction`.
fn to_direction(direction: &[i32]) -> Result<Direction, String> {
    let &[lat, lon] = direction else {
        log::warn!("rejected direction with {} components", direction.len());
        return Err(format!(
            "direction must have exactly 2 components, got {}",
            direction.len()
        ));
    };
    let delta = |value: i32| match i8::try_from(value) {
        Ok(delta @ -1..=1) => Ok(delta),
        _ => {
            log::warn!("rejected direction component {value}");
            Err(format!("direction components must be -1, 0 or 1, got {value}"))
        }
    };
    Ok(Direction::new(delta(lat)?, delta(lon)?))
}

/// Encodes a coordinate as a geohash of `precision` characters.
#[frb(sync)]
pub fn encode(latitude: f64, longitude: f64, precision: i64) -> Result<String, String> {
    let precision = to_length(precision, "precision")?;
    Ok(geohash::encode(latitude, longitude, precision))
}

/// Encodes a coordinate at lengths 1 through 9.
#[frb(sync)]
#[must_use]
pub fn encode_all_precisions(latitude: f64, longitude: f64) -> Vec<String> {
    geohash::encode_all_precisions(latitude, longitude)
}

/// Encodes a coordinate at every length in `min..=max`.
#[frb(sync)]
pub fn encode_range_precisions(
    latitude: f64,
    longitude: f64,
    min: i64,
    max: i64,
) -> Result<Vec<String>, String> {
    let min = to_length(min, "min precision")?;
    let max = to_length(max, "max precision")?;
    geohash::encode_range_precisions(latitude, longitude, min, max).map_err(|e| e.to_string())
}

/// Decodes a geohash to its centre and error margins.
#[frb(sync)]
pub fn decode(hash: String) -> Result<DecodedHash, String> {
    geohash::decode(&hash)
        .map(DecodedHash::from)
        .map_err(|e| e.to_string())
}

/// Decodes a geohash to its bounding box.
#[frb(sync)]
pub fn decode_bbox(hash: String) -> Result<DecodedBBox, String> {
    geohash::decode_bbox(&hash)
        .map(DecodedBBox::from)
        .map_err(|e| e.to_string())
}

/// Finds the neighbor of `hash` in `direction` (`[lat_delta, lon_delta]`).
///
/// `[1, 0]` is north, `[-1, -1]` is south-west.
#[frb(sync)]
pub fn neighbor(hash: String, direction: Vec<i32>) -> Result<String, String> {
    let direction = to_direction(&direction)?;
    geohash::neighbor(&hash, direction).map_err(|e| e.to_string())
}

/// Finds all eight neighbors: N, NE, E, SE, S, SW, W, NW.
#[frb(sync)]
pub fn neighbors(hash: String) -> Result<Vec<String>, String> {
    geohash::neighbors(&hash)
        .map(Vec::from)
        .map_err(|e| e.to_string())
}

/// Returns the eight neighbors followed by `hash` itself.
#[frb(sync)]
pub fn expand(hash: String) -> Result<Vec<String>, String> {
    geohash::expand(&hash)
        .map(Vec::from)
        .map_err(|e| e.to_string())
}

/// Configured geohash codec (FFI wrapper).
#[derive(Debug, Clone, Default)]
#[frb(opaque)]
pub struct GeohashCodec {
    inner: cgeohash_core::GeohashCodec,
}

impl GeohashCodec {
    /// Creates a codec with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec with explicit settings.
    pub fn with_settings(
        precision: i64,
        min_precision: i64,
        max_precision: i64,
    ) -> Result<Self, String> {
        let precision = to_length(precision, "precision")?;
        let range = PrecisionRange::new(
            to_length(min_precision, "min precision")?,
            to_length(max_precision, "max precision")?,
        )
        .map_err(|e| e.to_string())?;
        Ok(Self {
            inner: cgeohash_core::GeohashCodec::with_settings(cgeohash_core::CodecSettings {
                precision,
                range,
            }),
        })
    }

    /// Creates a codec from settings stored as JSON.
    pub fn from_settings_json(json: String) -> Result<Self, String> {
        let settings = cgeohash_core::CodecSettings::from_json(&json).map_err(|e| {
            log::warn!("rejected codec settings: {e}");
            e.to_string()
        })?;
        Ok(Self {
            inner: cgeohash_core::GeohashCodec::with_settings(settings),
        })
    }

    /// Gets the current settings as JSON.
    #[frb(sync)]
    pub fn settings_json(&self) -> Result<String, String> {
        self.inner.settings().to_json().map_err(|e| e.to_string())
    }

    /// Gets the configured precision.
    #[frb(sync)]
    #[must_use]
    pub fn precision(&self) -> u64 {
        u64::try_from(self.inner.settings().precision).unwrap_or(u64::MAX)
    }

    /// Encodes at the configured precision.
    #[frb(sync)]
    #[must_use]
    pub fn encode(&self, latitude: f64, longitude: f64) -> String {
        self.inner.encode(latitude, longitude)
    }

    /// Encodes at every length of the configured range.
    #[frb(sync)]
    #[must_use]
    pub fn encode_precisions(&self, latitude: f64, longitude: f64) -> Vec<String> {
        self.inner.encode_precisions(latitude, longitude)
    }
}
