//! Whitespace tokenizer implementation.

use super::{TokenStream, Tokenizer};

/// A tokenizer that splits text on runs of ASCII whitespace.
///
/// The separators are space, tab, newline, vertical tab, form feed and
/// carriage return. Non-ASCII spaces such as U+00A0 stay inside the token.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> TokenStream<'a> {
        Box::new(text.split(is_separator).filter(|token| !token.is_empty()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}
