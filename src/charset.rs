//! Character classes shared by the generator and the strength evaluator

use serde::{Deserialize, Serialize};

/// Lowercase letters (a-z)
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase letters (A-Z)
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digits (0-9)
pub const NUMBER_CHARS: &str = "0123456789";
/// Special symbols used by the generator
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four character classes a password can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Number,
    Special,
}

impl CharacterClass {
    /// All classes in the order mandatory characters are drawn
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Number,
        CharacterClass::Special,
    ];

    /// Alphabet the generator draws from for this class
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Number => NUMBER_CHARS,
            CharacterClass::Special => SPECIAL_CHARS,
        }
    }

    /// Alphabet size assumed by the entropy estimate.
    ///
    /// The special class is estimated at 32 symbols rather than the length of
    /// [`SPECIAL_CHARS`]; the strength tiers are calibrated against 32.
    pub fn estimated_size(self) -> u32 {
        match self {
            CharacterClass::Lowercase => 26,
            CharacterClass::Uppercase => 26,
            CharacterClass::Number => 10,
            CharacterClass::Special => 32,
        }
    }

    /// Classify a character. Anything outside ASCII letters and digits,
    /// including non-ASCII letters, counts as special.
    pub fn of(ch: char) -> Self {
        if ch.is_ascii_lowercase() {
            CharacterClass::Lowercase
        } else if ch.is_ascii_uppercase() {
            CharacterClass::Uppercase
        } else if ch.is_ascii_digit() {
            CharacterClass::Number
        } else {
            CharacterClass::Special
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Lowercase => 0b0001,
            CharacterClass::Uppercase => 0b0010,
            CharacterClass::Number => 0b0100,
            CharacterClass::Special => 0b1000,
        }
    }
}

/// Set of character classes found in a string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet(u8);

impl ClassSet {
    /// Collect the classes present anywhere in `text`
    pub fn of(text: &str) -> Self {
        let mut set = ClassSet::default();
        for ch in text.chars() {
            set.insert(CharacterClass::of(ch));
            if set.len() == CharacterClass::ALL.len() {
                break;
            }
        }
        set
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the contained classes in canonical order
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Sum of the estimated alphabet sizes of the contained classes
    pub fn estimated_alphabet_size(&self) -> u32 {
        self.iter().map(CharacterClass::estimated_size).sum()
    }
}
