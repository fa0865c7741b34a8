//! Secure random primitives used by the password generator
//!
//! All draws take a `CryptoRng` so a general-purpose PRNG can never be
//! substituted by accident.

use rand::{CryptoRng, RngCore};

/// Draw a uniform index in `[0, bound)`.
///
/// Reduces a 32-bit draw modulo `bound`. For the alphabet sizes used here
/// (at most a few hundred symbols) the resulting bias is below 2^-23.
pub fn secure_index<R: CryptoRng + ?Sized>(rng: &mut R, bound: usize) -> usize {
    debug_assert!(bound > 0, "bound must be positive");
    debug_assert!(bound <= u32::MAX as usize, "bound exceeds 32-bit source");
    (rng.next_u32() % bound as u32) as usize
}

/// Pick one character uniformly from `alphabet`
pub fn pick_char<R: CryptoRng + ?Sized>(rng: &mut R, alphabet: &[char]) -> char {
    alphabet[secure_index(rng, alphabet.len())]
}

/// Fisher-Yates shuffle in place, walking from the last index down to 1
pub fn secure_shuffle<T, R: CryptoRng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = secure_index(rng, i + 1);
        items.swap(i, j);
    }
}
