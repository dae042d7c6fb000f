//! Error types for geohash operations.

use thiserror::Error;

/// Errors that can occur while decoding geohashes or selecting precisions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeohashError {
    /// A character outside the base32 alphabet (after case folding).
    #[error("Invalid geohash character '{character}' at position {position}")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Zero-based character position within the hash.
        position: usize,
    },

    /// A precision range with `min < 1`, `max < min` or `max` above the cap.
    #[error("Invalid precision range: {min}..={max}")]
    InvalidPrecisionRange {
        /// Requested shortest length.
        min: usize,
        /// Requested longest length.
        max: usize,
    },

    /// A single hash length above the configured cap.
    #[error("Precision {precision} exceeds maximum {max}")]
    PrecisionTooLarge {
        /// Requested length.
        precision: usize,
        /// Largest accepted length.
        max: usize,
    },
}

/// Result type for geohash operations.
pub type Result<T> = std::result::Result<T, GeohashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_character_display() {
        let err = GeohashError::InvalidCharacter {
            character: 'a',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid geohash character 'a' at position 3"
        );
    }

    #[test]
    fn invalid_precision_range_display() {
        let err = GeohashError::InvalidPrecisionRange { min: 5, max: 2 };
        assert_eq!(err.to_string(), "Invalid precision range: 5..=2");
    }

    #[test]
    fn precision_too_large_display() {
        let err = GeohashError::PrecisionTooLarge {
            precision: 100,
            max: 64,
        };
        assert_eq!(err.to_string(), "Precision 100 exceeds maximum 64");
    }

    #[test]
    fn errors_are_comparable() {
        let a = GeohashError::InvalidPrecisionRange { min: 0, max: 3 };
        assert_eq!(a.clone(), a);
        assert_ne!(
            a,
            GeohashError::InvalidPrecisionRange { min: 1, max: 3 }
        );
    }
}
