//! Tokenizer implementations for text analysis.
//!
//! # Examples
//!
//! ```
//! use alphadex::analysis::tokenizer::Tokenizer;
//! use alphadex::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello  world\n").collect();
//! assert_eq!(tokens, vec!["Hello", "world"]);
//! ```

pub mod whitespace;

/// A stream of raw tokens borrowed from the input text.
pub type TokenStream<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

/// Trait for tokenizers that split text into raw tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can be shared by every
/// mapper thread.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into raw tokens.
    fn tokenize<'a>(&self, text: &'a str) -> TokenStream<'a>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}
