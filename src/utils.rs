use crate::constants::ALPHABET_LEN;

/// Moves an ASCII letter `offset` places along its own alphabet, wrapping
/// in both directions. Every other character comes back unchanged.
pub fn rotate_letter(c: char, offset: i32) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };

    let index = (c as u8 - base) as i32;
    let rotated = (index + normalize_shift(offset)) % ALPHABET_LEN;

    (base + rotated as u8) as char
}

/// Reduces any shift to its equivalent in `0..26`.
pub fn normalize_shift(shift: i32) -> i32 {
    shift.rem_euclid(ALPHABET_LEN)
}
