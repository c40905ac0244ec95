//! Word analyzer combining a tokenizer and a normalizer.

use std::sync::Arc;

use crate::analysis::normalizer::{AlphabeticNormalizer, Normalizer};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// Turns text into the stream of words the mapper indexes.
///
/// Cloning is cheap; the tokenizer and normalizer are shared.
#[derive(Clone)]
pub struct WordAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    normalizer: Arc<dyn Normalizer>,
}

impl WordAnalyzer {
    /// Create an analyzer from a tokenizer and a normalizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, normalizer: Arc<dyn Normalizer>) -> Self {
        WordAnalyzer {
            tokenizer,
            normalizer,
        }
    }

    /// Analyze `text`, yielding only non-empty normalized words.
    pub fn analyze<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        self.tokenizer
            .tokenize(text)
            .filter_map(move |token| self.normalizer.normalize(token))
    }

    /// Get the name of this analyzer, e.g. `whitespace+alphabetic`.
    pub fn name(&self) -> String {
        format!("{}+{}", self.tokenizer.name(), self.normalizer.name())
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        WordAnalyzer::new(
            Arc::new(WhitespaceTokenizer::new()),
            Arc::new(AlphabeticNormalizer::new()),
        )
    }
}

impl std::fmt::Debug for WordAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordAnalyzer")
            .field("name", &self.name())
            .finish()
    }
}
