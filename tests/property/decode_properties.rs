use caesar_decoder::{brute_force, decode, encode, rank};
use proptest::prelude::*;

proptest! {
    #[test]
    fn complementary_shift_restores_text(s in ".{0,200}", shift in 1i32..=25) {
        let once = decode(&s, shift);
        prop_assert_eq!(decode(&once, (-shift).rem_euclid(26)), s.clone());
        prop_assert_eq!(encode(&once, shift), s);
    }

    #[test]
    fn any_shift_round_trips(s in ".{0,100}", shift in any::<i32>()) {
        prop_assert_eq!(encode(&decode(&s, shift), shift), s);
    }

    #[test]
    fn length_and_non_letters_are_preserved(s in ".{0,200}", shift in any::<i32>()) {
        let out = decode(&s, shift);
        prop_assert_eq!(out.chars().count(), s.chars().count());
        for (a, b) in s.chars().zip(out.chars()) {
            if a.is_ascii_alphabetic() {
                prop_assert!(b.is_ascii_alphabetic());
                prop_assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn full_cycles_are_identity(s in ".{0,200}", k in -1000i32..1000) {
        prop_assert_eq!(decode(&s, 0), s.clone());
        prop_assert_eq!(decode(&s, 26), s.clone());
        prop_assert_eq!(decode(&s, 26 * k), s);
    }

    #[test]
    fn brute_force_is_every_shift_in_order(s in "[a-zA-Z0-9 ,.]{0,80}") {
        let results = brute_force(&s);
        prop_assert_eq!(results.len(), 25);
        for (i, candidate) in results.iter().enumerate() {
            prop_assert_eq!(candidate.shift, i as i32 + 1);
            prop_assert_eq!(&candidate.text, &decode(&s, candidate.shift));
        }
    }

    #[test]
    fn ranking_is_sorted_and_positive(s in "[a-z ,.]{0,120}") {
        let ranked = rank(&brute_force(&s));
        prop_assert!(ranked.iter().all(|r| r.score > 0));
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(ranked.len() <= 25);
    }
}
