//! Geohash value types.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::{GeohashError, Result};

/// A closed latitude/longitude rectangle in degrees.
///
/// Decoding starts from [`BoundingBox::WORLD`] and narrows the box one
/// bisection at a time, so `min <= max` holds on both axes throughout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge
    pub min_lat: f64,
    /// Northern edge
    pub max_lat: f64,
    /// Western edge
    pub min_lon: f64,
    /// Eastern edge
    pub max_lon: f64,
}

impl BoundingBox {
    /// The whole Earth: `[-90, 90] × [-180, 180]`.
    pub const WORLD: Self = Self {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lon: -180.0,
        max_lon: 180.0,
    };

    /// Returns the centre of the box as `(latitude, longitude)`.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Returns whether the point lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::WORLD
    }
}

/// Centre of a geohash cell together with its half extents.
///
/// The errors are half the cell's height and width, so the decoded cell is
/// `latitude ± latitude_error` by `longitude ± longitude_error`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedPoint {
    /// Latitude of the cell centre
    pub latitude: f64,
    /// Longitude of the cell centre
    pub longitude: f64,
    /// Half the cell height in degrees
    pub latitude_error: f64,
    /// Half the cell width in degrees
    pub longitude_error: f64,
}

impl From<BoundingBox> for DecodedPoint {
    fn from(bbox: BoundingBox) -> Self {
        let (latitude, longitude) = bbox.center();
        Self {
            latitude,
            longitude,
            latitude_error: bbox.max_lat - latitude,
            longitude_error: bbox.max_lon - longitude,
        }
    }
}

/// One step across the geohash grid, as `(lat_delta, lon_delta)`.
///
/// The compass constants use deltas in `{-1, 0, 1}`. Other magnitudes are
/// accepted and simply step that many cells; nothing wraps at the poles or
/// the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    /// Rows to move north (negative for south)
    pub lat_delta: i8,
    /// Columns to move east (negative for west)
    pub lon_delta: i8,
}

impl Direction {
    /// `(1, 0)`: one cell north.
    pub const NORTH: Self = Self::new(1, 0);
    /// `(1, 1)`: one cell north and one east.
    pub const NORTH_EAST: Self = Self::new(1, 1);
    /// `(0, 1)`: one cell east.
    pub const EAST: Self = Self::new(0, 1);
    /// `(-1, 1)`: one cell south and one east.
    pub const SOUTH_EAST: Self = Self::new(-1, 1);
    /// `(-1, 0)`: one cell south.
    pub const SOUTH: Self = Self::new(-1, 0);
    /// `(-1, -1)`: one cell south and one west.
    pub const SOUTH_WEST: Self = Self::new(-1, -1);
    /// `(0, -1)`: one cell west.
    pub const WEST: Self = Self::new(0, -1);
    /// `(1, -1)`: one cell north and one west.
    pub const NORTH_WEST: Self = Self::new(1, -1);

    /// The eight neighbor directions in the order `neighbors` returns them.
    pub const COMPASS: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    /// Creates a direction from raw deltas. Magnitudes are not checked.
    #[must_use]
    pub const fn new(lat_delta: i8, lon_delta: i8) -> Self {
        Self {
            lat_delta,
            lon_delta,
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(self.lat_delta.saturating_neg(), self.lon_delta.saturating_neg())
    }
}

/// Longest geohash length accepted from configuration or host input.
///
/// Past about 22 characters each axis carries more bits than an `f64`
/// mantissa, so longer hashes only repeat edge symbols.
pub const MAX_PRECISION: usize = 64;

/// Checks a single hash length against [`MAX_PRECISION`].
///
/// # Errors
///
/// Returns [`GeohashError::PrecisionTooLarge`] if `precision` exceeds
/// [`MAX_PRECISION`].
pub fn check_precision(precision: usize) -> Result<usize> {
    if precision > MAX_PRECISION {
        log::debug!("rejecting precision {precision}");
        return Err(GeohashError::PrecisionTooLarge {
            precision,
            max: MAX_PRECISION,
        });
    }
    Ok(precision)
}

/// Inclusive range of geohash lengths, `1 <= min <= max <= MAX_PRECISION`.
///
/// Deserialization goes through [`PrecisionRange::new`], so a range read
/// from configuration is validated the same way as one built in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrecisionRange", into = "RawPrecisionRange")]
pub struct PrecisionRange {
    min: usize,
    max: usize,
}

#[derive(Serialize, Deserialize)]
struct RawPrecisionRange {
    min: usize,
    max: usize,
}

impl PrecisionRange {
    /// Lengths 1 through 9.
    pub const ALL: Self = Self { min: 1, max: 9 };

    /// Creates a range of lengths `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::InvalidPrecisionRange`] if `min` is zero,
    /// `min` is greater than `max`, or `max` exceeds [`MAX_PRECISION`].
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min < 1 || max < min || max > MAX_PRECISION {
            log::debug!("rejecting precision range {min}..={max}");
            return Err(GeohashError::InvalidPrecisionRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Shortest length in the range.
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    /// Longest length in the range.
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Number of lengths in the range (never zero).
    #[must_use]
    pub const fn len(self) -> usize {
        self.max - self.min + 1
    }

    /// Always `false`: a validated range holds at least one length.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// The lengths as a standard inclusive range.
    #[must_use]
    pub const fn lengths(self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

impl Default for PrecisionRange {
    fn default() -> Self {
        Self::ALL
    }
}

impl TryFrom<RawPrecisionRange> for PrecisionRange {
    type Error = GeohashError;

    fn try_from(raw: RawPrecisionRange) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl From<PrecisionRange> for RawPrecisionRange {
    fn from(range: PrecisionRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}
