//! Secure password generation
//!
//! Random draws come from a cryptographically secure source and are reduced
//! to indices, characters and permutations in [`random`]; [`password`] builds
//! the generator on top of them.

pub mod password;
pub mod random;

pub use password::{
    GenerationConfig, generate_default_password, generate_password, generate_password_with_rng,
};
pub use random::{pick_char, secure_index, secure_shuffle};
