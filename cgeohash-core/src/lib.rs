//! cgeohash Core Library
//!
//! Geohash primitives: encoding coordinates to base32 cell strings,
//! decoding them back to points and bounding boxes, and walking the
//! grid to neighboring cells.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod geohash;

pub use api::{CodecSettings, GeohashCodec};
