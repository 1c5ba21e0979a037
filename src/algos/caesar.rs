use crate::constants::{MAX_SHIFT, MIN_SHIFT};
use crate::structs::{Caesar, Candidate};
use crate::traits::{Decryptor, Encryptor};
use crate::utils::{normalize_shift, rotate_letter};

/// Shifts every ASCII letter of `text` back by `shift` places.
///
/// Any shift is accepted; it is reduced modulo 26 first, so `0` and `26`
/// are the identity and negative values shift forward.
pub fn decode(text: &str, shift: i32) -> String {
    let offset = -normalize_shift(shift);

    text.chars().map(|c| rotate_letter(c, offset)).collect()
}

/// Inverse of [`decode`].
pub fn encode(text: &str, shift: i32) -> String {
    let offset = normalize_shift(shift);

    text.chars().map(|c| rotate_letter(c, offset)).collect()
}

/// Decodes `text` with every shift from 1 to 25, in that order.
pub fn brute_force(text: &str) -> Vec<Candidate> {
    (MIN_SHIFT..=MAX_SHIFT)
        .map(|shift| Candidate {
            shift,
            text: decode(text, shift),
        })
        .collect()
}

impl Caesar {
    pub fn new(shift: i32) -> Self {
        Caesar { shift }
    }
}

impl Encryptor for Caesar {
    fn encrypt(&self, message: &str) -> String {
        encode(message, self.shift)
    }
}

impl Decryptor for Caesar {
    fn decrypt(&self, message: &str) -> String {
        decode(message, self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EXAMPLE_ENCODED, EXAMPLE_SHIFT};

    #[test]
    fn decodes_the_example() {
        // The displayed caption reads "ENGINE"; the cipher text only has
        // five letters there.
        assert_eq!(
            decode(EXAMPLE_ENCODED, EXAMPLE_SHIFT),
            "THE EAST ERGIN WILL RISE AGAIN"
        );
    }

    #[test]
    fn decodes_mixed_case_and_punctuation() {
        assert_eq!(decode("Hello, World!", 1), "Gdkkn, Vnqkc!");
    }

    #[test]
    fn wraps_at_the_start_of_the_alphabet() {
        assert_eq!(decode("abc ABC", 3), "xyz XYZ");
    }

    #[test]
    fn full_cycles_are_identity() {
        let text = "The quick brown fox, 42 times.";
        assert_eq!(decode(text, 0), text);
        assert_eq!(decode(text, 26), text);
        assert_eq!(decode(text, -52), text);
    }

    #[test]
    fn negative_shift_moves_forward() {
        assert_eq!(decode("abc", -1), "bcd");
        assert_eq!(decode("abc", -1), encode("abc", 1));
    }

    #[test]
    fn extreme_shifts_do_not_overflow() {
        let text = "Zebra";
        assert_eq!(decode(text, i32::MAX), decode(text, i32::MAX % 26));
        assert_eq!(decode(text, i32::MIN), decode(text, i32::MIN.rem_euclid(26)));
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(decode("Ünïcødé ✓", 5), "Üiïxøyé ✓");
    }

    #[test]
    fn brute_force_covers_every_shift_in_order() {
        let results = brute_force("Khoor");
        assert_eq!(results.len(), 25);
        for (i, candidate) in results.iter().enumerate() {
            assert_eq!(candidate.shift, i as i32 + 1);
            assert_eq!(candidate.text, decode("Khoor", candidate.shift));
        }
        assert_eq!(results[2].text, "Hello");
    }

    #[test]
    fn brute_force_without_letters_repeats_input() {
        let results = brute_force("12345");
        assert_eq!(results.len(), 25);
        assert!(results.iter().all(|c| c.text == "12345"));
    }

    #[test]
    fn caesar_decrypt_matches_decode() {
        let cipher = Caesar::new(3);
        assert_eq!(cipher.decrypt(EXAMPLE_ENCODED), decode(EXAMPLE_ENCODED, 3));
        assert_eq!(cipher.encrypt("xyz"), "abc");
    }

    #[test]
    fn caesar_round_trips_through_traits() {
        let cipher = Caesar::new(11);
        let secret = cipher.encrypt("Attack at dawn!");
        assert_ne!(secret, "Attack at dawn!");
        assert_eq!(cipher.decrypt(&secret), "Attack at dawn!");
    }
}
