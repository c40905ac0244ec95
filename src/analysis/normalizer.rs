//! Token normalization.
//!
//! A normalizer reduces a raw token to the word that gets indexed, or rejects
//! it when nothing indexable remains.
//!
//! # Examples
//!
//! ```
//! use alphadex::analysis::normalizer::{AlphabeticNormalizer, Normalizer};
//!
//! let normalizer = AlphabeticNormalizer::new();
//! assert_eq!(normalizer.normalize("Fish!"), Some("fish".to_string()));
//! assert_eq!(normalizer.normalize("42"), None);
//! ```

/// Trait for reducing raw tokens to indexable words.
pub trait Normalizer: Send + Sync {
    /// Normalize a token. Returns `None` when the token reduces to nothing.
    fn normalize(&self, token: &str) -> Option<String>;

    /// Get the name of this normalizer.
    fn name(&self) -> &'static str;
}

/// Keeps only ASCII letters and lowercases them.
///
/// Digits, punctuation, and non-ASCII characters are dropped, so every word
/// produced starts with one of `a`..=`z`. The result is idempotent: a word
/// that is already normalized comes back unchanged.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticNormalizer;

impl AlphabeticNormalizer {
    /// Create a new alphabetic normalizer.
    pub fn new() -> Self {
        AlphabeticNormalizer
    }
}

impl Normalizer for AlphabeticNormalizer {
    fn normalize(&self, token: &str) -> Option<String> {
        let word: String = token
            .bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_lowercase() as char)
            .collect();

        if word.is_empty() { None } else { Some(word) }
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
