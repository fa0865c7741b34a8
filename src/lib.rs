//! # passcore
//!
//! Password generation and strength evaluation.
//!
//! ## Features
//!
//! - Passwords drawn from a cryptographically secure source, with at least one
//!   character from every requested class
//! - Strength scoring from length, character diversity, entropy and
//!   predictable-pattern detection
//! - Enumerated feedback with English and Simplified Chinese display text
//!
//! ## Example
//!
//! ```
//! use passcore::{evaluate, generate_password, GenerationConfig, StrengthTier, Translations};
//!
//! let password = generate_password(&GenerationConfig::default()).unwrap();
//! assert_eq!(password.len(), 16);
//!
//! let report = evaluate(&password);
//! assert!(report.tier >= StrengthTier::Strong);
//!
//! let tr = Translations::new().unwrap();
//! for message in report.messages(&tr) {
//!     println!("{}", message);
//! }
//! ```

pub mod charset;
pub mod crypto;
pub mod error;
pub mod localization;
pub mod strength;

// Re-export main types
pub use charset::CharacterClass;
pub use crypto::{
    GenerationConfig, generate_default_password, generate_password, generate_password_with_rng,
};
pub use error::{GeneratorError, LocalizationError, Result};
pub use localization::Translations;
pub use strength::{Feedback, StrengthReport, StrengthTier, evaluate};

/// Minimum generated password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum generated password length
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Length used by the default generation config
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Language loaded by a new translator
pub const DEFAULT_LANGUAGE: &str = "en";
