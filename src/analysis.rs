//! Text analysis for the map phase.
//!
//! Input files are split into raw tokens by a [`tokenizer::Tokenizer`], and each
//! token is reduced to an indexable word by a [`normalizer::Normalizer`].
//! [`analyzer::WordAnalyzer`] chains the two.

pub mod analyzer;
pub mod normalizer;
pub mod tokenizer;
