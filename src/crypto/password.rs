//! Password generation
//!
//! One character is drawn from every enabled class, the rest of the length is
//! filled from the combined pool, and the buffer is shuffled so the mandatory
//! characters land at random positions.

use rand::CryptoRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::random::{pick_char, secure_shuffle};
use crate::charset::CharacterClass;
use crate::error::{GeneratorError, Result};
use crate::{DEFAULT_PASSWORD_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};

/// Options for password generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Password length, 8 to 128 inclusive
    pub length: usize,
    /// Include lowercase letters (a-z)
    pub include_lowercase: bool,
    /// Include uppercase letters (A-Z)
    pub include_uppercase: bool,
    /// Include digits (0-9)
    pub include_numbers: bool,
    /// Include special symbols (!@#$%...)
    pub include_special_chars: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_special_chars: true,
        }
    }
}

impl GenerationConfig {
    /// Config with every class enabled at the given length
    pub fn all_classes(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Whether a class flag is set
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Number => self.include_numbers,
            CharacterClass::Special => self.include_special_chars,
        }
    }

    /// Enabled classes in canonical order
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    /// Check the length bounds, then that at least one class is enabled
    pub fn validate(&self) -> Result<()> {
        if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&self.length) {
            return Err(GeneratorError::InvalidLength {
                length: self.length,
                min: PASSWORD_MIN_LENGTH,
                max: PASSWORD_MAX_LENGTH,
            });
        }

        if !CharacterClass::ALL.iter().any(|class| self.includes(*class)) {
            return Err(GeneratorError::NoCharacterClassSelected);
        }

        Ok(())
    }
}

/// Generate a password with the thread-local CSPRNG.
///
/// # Example
/// ```
/// use passcore::{generate_password, GenerationConfig};
///
/// let config = GenerationConfig {
///     length: 12,
///     include_lowercase: true,
///     include_uppercase: true,
///     include_numbers: true,
///     include_special_chars: false,
/// };
/// let password = generate_password(&config).unwrap();
/// assert_eq!(password.len(), 12);
/// assert!(password.chars().any(|c| c.is_ascii_digit()));
/// ```
pub fn generate_password(config: &GenerationConfig) -> Result<String> {
    generate_password_with_rng(config, &mut rand::rng())
}

/// Generate a password drawing from the supplied secure source
pub fn generate_password_with_rng<R: CryptoRng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<String> {
    config.validate()?;

    let classes = config.enabled_classes();
    let alphabets: Vec<Vec<char>> = classes
        .iter()
        .map(|class| class.alphabet().chars().collect())
        .collect();
    let pool: Vec<char> = alphabets.iter().flatten().copied().collect();

    let mut buffer: Vec<char> = Vec::with_capacity(config.length);
    for alphabet in &alphabets {
        buffer.push(pick_char(rng, alphabet));
    }

    let filler = config.length.saturating_sub(buffer.len());
    for _ in 0..filler {
        buffer.push(pick_char(rng, &pool));
    }

    secure_shuffle(rng, &mut buffer);

    debug!(
        length = config.length,
        classes = classes.len(),
        pool = pool.len(),
        "generated password"
    );

    Ok(buffer.into_iter().collect())
}

/// Generate a password using every character class
pub fn generate_default_password(length: usize) -> Result<String> {
    generate_password(&GenerationConfig::all_classes(length))
}
