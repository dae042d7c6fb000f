//! Compatibility tests against the `geohash` crate from crates.io.
//!
//! The bit interleaving is part of the geohash format, so any two
//! implementations must agree on interior points. Points that sit exactly
//! on a cell edge are avoided: tie-breaking there is implementation
//! specific.

mod helpers;

use cgeohash_core::geohash::{decode, decode_bbox, encode, neighbor, neighbors, Direction};
use geohash::Coord;
use helpers::{interior_coordinate, interior_hash, KNOWN_POINTS};
use proptest::prelude::*;

const EPSILON: f64 = 1e-12;

fn reference_encode(lat: f64, lon: f64, len: usize) -> String {
    geohash::encode(Coord { x: lon, y: lat }, len).expect("reference encode must succeed")
}

#[test]
fn known_points_match_reference() {
    for &(lat, lon, hash) in KNOWN_POINTS {
        assert_eq!(reference_encode(lat, lon, hash.len()), hash);
        assert_eq!(encode(lat, lon, hash.len()), hash);
    }
}

#[test]
fn known_points_decode_like_reference() {
    for &(_, _, hash) in KNOWN_POINTS {
        let ours = decode(hash).unwrap();
        let (coord, lon_err, lat_err) = geohash::decode(hash).unwrap();

        assert!((ours.latitude - coord.y).abs() < EPSILON);
        assert!((ours.longitude - coord.x).abs() < EPSILON);
        assert!((ours.latitude_error - lat_err).abs() < EPSILON);
        assert!((ours.longitude_error - lon_err).abs() < EPSILON);
    }
}

#[test]
fn known_points_bbox_like_reference() {
    for &(_, _, hash) in KNOWN_POINTS {
        let ours = decode_bbox(hash).unwrap();
        let theirs = geohash::decode_bbox(hash).unwrap();

        assert!((ours.min_lat - theirs.min().y).abs() < EPSILON);
        assert!((ours.max_lat - theirs.max().y).abs() < EPSILON);
        assert!((ours.min_lon - theirs.min().x).abs() < EPSILON);
        assert!((ours.max_lon - theirs.max().x).abs() < EPSILON);
    }
}

#[test]
fn neighbors_of_dqcjq_match_reference() {
    let theirs = geohash::neighbors("dqcjq").unwrap();
    let expected = [
        theirs.n, theirs.ne, theirs.e, theirs.se, theirs.s, theirs.sw, theirs.w, theirs.nw,
    ];
    assert_eq!(neighbors("dqcjq").unwrap(), expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: interior points encode identically at every length up to 12.
    #[test]
    fn encode_matches_reference((lat, lon) in interior_coordinate(), len in 1usize..=12) {
        prop_assert_eq!(encode(lat, lon, len), reference_encode(lat, lon, len));
    }

    /// Property: north and east neighbors of interior cells agree with the
    /// reference neighbor lookup.
    #[test]
    fn neighbor_matches_reference(hash in interior_hash()) {
        prop_assert_eq!(
            neighbor(&hash, Direction::NORTH).unwrap(),
            geohash::neighbor(&hash, geohash::Direction::N).unwrap()
        );
        prop_assert_eq!(
            neighbor(&hash, Direction::EAST).unwrap(),
            geohash::neighbor(&hash, geohash::Direction::E).unwrap()
        );
    }
}
