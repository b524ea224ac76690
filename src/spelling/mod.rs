//! Spelling correction
//!
//! Token-level correction applied to messages before topic matching.

pub mod dictionary;

pub use dictionary::{DictionaryCorrector, DictionaryError};

/// Corrects a single whitespace-delimited token.
///
/// Implementations must never panic: unknown or unfixable tokens come back unchanged.
pub trait SpellCorrector: Send + Sync {
    fn correct(&self, token: &str) -> String;
}

/// Pass-through corrector, used when spelling correction is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCorrector;

impl SpellCorrector for IdentityCorrector {
    fn correct(&self, token: &str) -> String {
        token.to_string()
    }
}
