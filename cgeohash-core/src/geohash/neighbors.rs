//! Neighbor lookup and 3×3 expansion.
//!
//! A neighbor is found by moving the decoded cell centre one full cell
//! (twice the error) along each axis and re-encoding at the same length.
//! There is no wraparound: stepping past a pole or the antimeridian lands
//! in whatever edge cell the encoder's bisection selects.

use super::codec::{decode, encode};
use super::error::Result;
use super::types::{DecodedPoint, Direction};

#[allow(clippy::suboptimal_flops)] // keep the plain `c + d * e * 2` rounding
fn encode_offset(point: &DecodedPoint, direction: Direction, precision: usize) -> String {
    let latitude = point.latitude + f64::from(direction.lat_delta) * point.latitude_error * 2.0;
    let longitude = point.longitude + f64::from(direction.lon_delta) * point.longitude_error * 2.0;
    encode(latitude, longitude, precision)
}

/// Returns the same-length cell adjacent to `hash` in `direction`.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`](super::GeohashError::InvalidCharacter)
/// if `hash` is not a valid geohash.
///
/// # Examples
///
/// ```
/// use cgeohash_core::geohash::{neighbor, Direction};
///
/// assert_eq!(neighbor("dqcjq", Direction::NORTH).unwrap(), "dqcjw");
/// assert_eq!(neighbor("dqcjq", Direction::SOUTH_WEST).unwrap(), "dqcjj");
/// ```
pub fn neighbor(hash: &str, direction: Direction) -> Result<String> {
    let point = decode(hash)?;
    // A successful decode means `hash` is ASCII.
    Ok(encode_offset(&point, direction, hash.len()))
}

/// Returns all eight neighbors of `hash`, in [`Direction::COMPASS`] order.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`](super::GeohashError::InvalidCharacter)
/// if `hash` is not a valid geohash.
pub fn neighbors(hash: &str) -> Result<[String; 8]> {
    let point = decode(hash)?;
    Ok(Direction::COMPASS.map(|direction| encode_offset(&point, direction, hash.len())))
}

/// Returns the eight neighbors of `hash` followed by `hash` itself.
///
/// The ninth entry is the input exactly as given, without case folding.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`](super::GeohashError::InvalidCharacter)
/// if `hash` is not a valid geohash.
///
/// # Examples
///
/// ```
/// use cgeohash_core::geohash::expand;
///
/// let cells = expand("dqcjq").unwrap();
/// assert_eq!(cells.len(), 9);
/// assert_eq!(cells[8], "dqcjq");
/// ```
pub fn expand(hash: &str) -> Result<[String; 9]> {
    let point = decode(hash)?;
    Ok(std::array::from_fn(|i| {
        Direction::COMPASS.get(i).map_or_else(
            || hash.to_owned(),
            |&direction| encode_offset(&point, direction, hash.len()),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geohash::GeohashError;

    #[test]
    fn neighbor_known_vectors() {
        assert_eq!(neighbor("dqcjq", Direction::NORTH).unwrap(), "dqcjw");
        assert_eq!(neighbor("dqcjq", Direction::SOUTH_WEST).unwrap(), "dqcjj");
    }

    #[test]
    fn neighbor_keeps_length() {
        for hash in ["s", "u4", "ezs42", "ww8p1r4t8"] {
            for direction in Direction::COMPASS {
                assert_eq!(neighbor(hash, direction).unwrap().len(), hash.len());
            }
        }
    }

    #[test]
    fn neighbor_accepts_uppercase() {
        assert_eq!(neighbor("DQCJQ", Direction::NORTH).unwrap(), "dqcjw");
    }

    #[test]
    fn neighbor_zero_direction_is_self() {
        assert_eq!(neighbor("dqcjq", Direction::new(0, 0)).unwrap(), "dqcjq");
    }

    #[test]
    fn neighbor_larger_steps_skip_cells() {
        let two_north = neighbor("dqcjq", Direction::new(2, 0)).unwrap();
        let north_of_north = neighbor("dqcjw", Direction::NORTH).unwrap();
        assert_eq!(two_north, north_of_north);
    }

    #[test]
    fn neighbor_does_not_wrap_at_edges() {
        // Top-right corner cell: north and east step outside the world and
        // bisect straight back into the same cell.
        assert_eq!(neighbor("zzzz", Direction::NORTH).unwrap(), "zzzz");
        assert_eq!(neighbor("zzzz", Direction::EAST).unwrap(), "zzzz");
    }

    #[test]
    fn neighbor_rejects_invalid_hash() {
        assert_eq!(
            neighbor("dqcjo", Direction::NORTH),
            Err(GeohashError::InvalidCharacter {
                character: 'o',
                position: 4,
            })
        );
    }

    #[test]
    fn neighbors_of_dqcjq() {
        assert_eq!(
            neighbors("dqcjq").unwrap(),
            ["dqcjw", "dqcjx", "dqcjr", "dqcjp", "dqcjn", "dqcjj", "dqcjm", "dqcjt"]
        );
    }

    #[test]
    fn neighbors_of_single_character() {
        assert_eq!(
            neighbors("s").unwrap(),
            ["u", "v", "t", "m", "k", "7", "e", "g"]
        );
    }

    #[test]
    fn neighbors_match_single_neighbor() {
        let all = neighbors("ezs42").unwrap();
        for (direction, cell) in Direction::COMPASS.iter().zip(&all) {
            assert_eq!(&neighbor("ezs42", *direction).unwrap(), cell);
        }
    }

    #[test]
    fn neighbors_rejects_invalid_hash() {
        assert!(neighbors("ab").is_err());
    }

    #[test]
    fn expand_appends_input() {
        let cells = expand("dqcjq").unwrap();
        assert_eq!(
            cells,
            [
                "dqcjw", "dqcjx", "dqcjr", "dqcjp", "dqcjn", "dqcjj", "dqcjm", "dqcjt", "dqcjq"
            ]
        );
    }

    #[test]
    fn expand_keeps_input_case() {
        let cells = expand("DQCJQ").unwrap();
        assert_eq!(cells[0], "dqcjw");
        assert_eq!(cells[8], "DQCJQ");
    }

    #[test]
    fn expand_rejects_invalid_hash() {
        assert!(matches!(
            expand("u4!"),
            Err(GeohashError::InvalidCharacter { character: '!', position: 2 })
        ));
    }
}
