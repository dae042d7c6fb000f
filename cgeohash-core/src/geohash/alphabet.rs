//! The 32-symbol geohash alphabet and its inverse lookup table.
//!
//! Both tables are `const` data: they are laid out at compile time and can
//! never be rebuilt or mutated, so lookups are safe from any thread.

/// Digits plus lowercase letters without `a`, `i`, `l` and `o`.
pub const BASE32: &str = "0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits carried by one alphabet symbol.
pub const BITS_PER_CHAR: u32 = 5;

const SYMBOLS: &[u8] = BASE32.as_bytes();

const INVALID: u8 = u8::MAX;

/// ASCII byte -> alphabet index, `INVALID` for bytes outside the alphabet.
static INDEXES: [u8; 128] = build_indexes();

#[allow(clippy::cast_possible_truncation)] // i < 32
const fn build_indexes() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < SYMBOLS.len() {
        table[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the symbol for a 5-bit index. Bits above the low five are ignored.
#[must_use]
pub fn symbol(index: u8) -> char {
    char::from(SYMBOLS[usize::from(index & 0x1f)])
}

/// Returns the 5-bit index of a symbol, folding uppercase to lowercase first.
///
/// Returns `None` for anything outside the alphabet, including non-ASCII.
#[must_use]
pub fn index_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match INDEXES[c.to_ascii_lowercase() as usize] {
        INVALID => None,
        index => Some(index),
    }
}
