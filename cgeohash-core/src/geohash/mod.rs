//! Geohash module for cgeohash.
//!
//! A geohash is a base32 string naming a rectangular cell of the Earth's
//! surface. Each character adds five bits of interleaved longitude and
//! latitude bisection, so longer strings name smaller cells and every
//! prefix of a hash names a cell containing it.
//!
//! Provides:
//! - Encoding at a single precision or a range of precisions
//! - Decoding to a centre point with error margins, or to a bounding box
//! - Neighbor lookup in the eight compass directions
//! - Expansion of a cell into its 3×3 neighborhood
//!
//! # Example Usage
//!
//! ```
//! use cgeohash_core::geohash::{decode, encode, neighbor, Direction};
//!
//! let hash = encode(57.64911, 10.40744, 6);
//! assert_eq!(hash, "u4pruy");
//!
//! let point = decode(&hash).unwrap();
//! assert!((point.latitude - 57.64911).abs() <= point.latitude_error);
//! assert!((point.longitude - 10.40744).abs() <= point.longitude_error);
//!
//! assert_eq!(neighbor("dqcjq", Direction::NORTH).unwrap(), "dqcjw");
//! ```

mod alphabet;
mod codec;
mod error;
mod neighbors;
mod types;

pub use codec::{
    decode, decode_bbox, encode, encode_all_precisions, encode_precisions,
    encode_range_precisions,
};
pub use error::{GeohashError, Result};
pub use neighbors::{expand, neighbor, neighbors};
pub use types::{
    check_precision, BoundingBox, DecodedPoint, Direction, PrecisionRange, MAX_PRECISION,
};

/// Alphabet of the base32 geohash encoding, in index order.
pub const BASE32: &str = alphabet::BASE32;
