//! Encoding and decoding between coordinates and geohash strings.
//!
//! Both directions walk the same bit stream: starting from the whole
//! world, each bit halves the current box, alternating longitude then
//! latitude, and every five bits form one alphabet symbol (most
//! significant bit first). The axis alternation runs across symbol
//! boundaries, which is what makes every prefix of a hash a valid,
//! coarser hash of the same point.

use super::alphabet::{self, BITS_PER_CHAR};
use super::error::{GeohashError, Result};
use super::types::{BoundingBox, DecodedPoint, PrecisionRange};

/// Halves `[min, max]` towards `value` and returns the emitted bit.
///
/// Ties go to the lower half. Out-of-range values (and NaN, which compares
/// false) keep picking the same side, so the result is still deterministic.
fn bisect(min: &mut f64, max: &mut f64, value: f64) -> bool {
    let mid = (*min + *max) / 2.0;
    if value > mid {
        *min = mid;
        true
    } else {
        *max = mid;
        false
    }
}

/// Halves `[min, max]` on the side selected by `bit`.
fn narrow(min: &mut f64, max: &mut f64, bit: bool) {
    let mid = (*min + *max) / 2.0;
    if bit {
        *min = mid;
    } else {
        *max = mid;
    }
}

/// Encodes a coordinate as a geohash of exactly `precision` characters.
///
/// Coordinates are not validated. Values outside `[-90, 90]` /
/// `[-180, 180]` still bisect deterministically towards the nearest edge.
///
/// # Examples
///
/// ```
/// use cgeohash_core::geohash::encode;
///
/// assert_eq!(encode(57.64911, 10.40744, 6), "u4pruy");
/// assert_eq!(encode(37.8324, 112.5584, 9), "ww8p1r4t8");
/// assert_eq!(encode(0.0, 0.0, 0), "");
/// ```
#[must_use]
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> String {
    let mut bbox = BoundingBox::WORLD;
    let mut hash = String::with_capacity(precision);
    let mut is_lon = true;

    for _ in 0..precision {
        let mut index = 0u8;
        for _ in 0..BITS_PER_CHAR {
            let bit = if is_lon {
                bisect(&mut bbox.min_lon, &mut bbox.max_lon, longitude)
            } else {
                bisect(&mut bbox.min_lat, &mut bbox.max_lat, latitude)
            };
            index = (index << 1) | u8::from(bit);
            is_lon = !is_lon;
        }
        hash.push(alphabet::symbol(index));
    }

    hash
}

/// Encodes a coordinate at every length in `range`, shortest first.
///
/// The point is encoded once at `range.max()`; shorter hashes are
/// truncations of that string, so each entry is a prefix of the next.
#[must_use]
pub fn encode_precisions(latitude: f64, longitude: f64, range: PrecisionRange) -> Vec<String> {
    let full = encode(latitude, longitude, range.max());
    // Geohash strings are ASCII, so byte slicing is character slicing.
    range.lengths().map(|len| full[..len].to_owned()).collect()
}

/// Encodes a coordinate at lengths 1 through 9.
///
/// # Examples
///
/// ```
/// use cgeohash_core::geohash::encode_all_precisions;
///
/// let hashes = encode_all_precisions(37.8324, 112.5584);
/// assert_eq!(hashes.len(), 9);
/// assert_eq!(hashes[0], "w");
/// assert_eq!(hashes[8], "ww8p1r4t8");
/// ```
#[must_use]
pub fn encode_all_precisions(latitude: f64, longitude: f64) -> Vec<String> {
    encode_precisions(latitude, longitude, PrecisionRange::ALL)
}

/// Encodes a coordinate at every length in `min..=max`, shortest first.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidPrecisionRange`] if `min` is zero or
/// greater than `max`.
pub fn encode_range_precisions(
    latitude: f64,
    longitude: f64,
    min: usize,
    max: usize,
) -> Result<Vec<String>> {
    let range = PrecisionRange::new(min, max)?;
    Ok(encode_precisions(latitude, longitude, range))
}

/// Decodes a geohash into the bounding box of its cell.
///
/// Matching is case-insensitive. The empty string decodes to
/// [`BoundingBox::WORLD`].
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`] for the first character that
/// is not in the base32 alphabet.
///
/// # Examples
///
/// ```
/// use cgeohash_core::geohash::decode_bbox;
///
/// let bbox = decode_bbox("ezs42").unwrap();
/// assert_eq!(bbox.min_lat, 42.5830078125);
/// assert_eq!(bbox.max_lon, -5.5810546875);
/// ```
pub fn decode_bbox(hash: &str) -> Result<BoundingBox> {
    let mut bbox = BoundingBox::WORLD;
    let mut is_lon = true;

    for (position, character) in hash.chars().enumerate() {
        let Some(index) = alphabet::index_of(character) else {
            log::debug!("rejecting geohash {hash:?}: invalid character at {position}");
            return Err(GeohashError::InvalidCharacter {
                character,
                position,
            });
        };

        for shift in (0..BITS_PER_CHAR).rev() {
            let bit = (index >> shift) & 1 == 1;
            if is_lon {
                narrow(&mut bbox.min_lon, &mut bbox.max_lon, bit);
            } else {
                narrow(&mut bbox.min_lat, &mut bbox.max_lat, bit);
            }
            is_lon = !is_lon;
        }
    }

    Ok(bbox)
}

/// Decodes a geohash into its cell centre and half extents.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`] under the same conditions as
/// [`decode_bbox`].
///
/// # Examples
///
/// ```
/// use cgeohash_core::geohash::decode;
///
/// let point = decode("ww8p1r4t8").unwrap();
/// assert!((point.latitude - 37.8324).abs() < 0.0001);
/// assert!((point.longitude - 112.5584).abs() < 0.0001);
/// ```
pub fn decode(hash: &str) -> Result<DecodedPoint> {
    decode_bbox(hash).map(DecodedPoint::from)
}
