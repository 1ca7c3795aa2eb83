//! Longest-prefix tokenizer turning text into input symbols.

use crate::core::Symbol;
use thiserror::Error;

/// No registered prefix matches the text at `position`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lexical error at position {position}: no symbol matches '{found}'")]
pub struct LexError {
    /// 1-based character position of the first unmatched character.
    pub position: usize,
    pub found: char,
}

/// Maps literal prefixes of the text to input symbols.
///
/// At every position the longest registered prefix wins.
///
/// # Example
///
/// ```rust
/// use pcpa::core::Symbol;
/// use pcpa::lexer::Tokenizer;
///
/// let tokenizer = Tokenizer::new([
///     ("a", Symbol::new("a")),
///     ("ab", Symbol::new("ab")),
///     ("b", Symbol::new("b")),
/// ]);
///
/// let symbols = tokenizer.tokenize("abb").unwrap();
/// assert_eq!(symbols, vec![Symbol::new("ab"), Symbol::new("b")]);
///
/// let error = tokenizer.tokenize("abc").unwrap_err();
/// assert_eq!(error.position, 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    mappings: Vec<(String, Symbol)>,
}

impl Tokenizer {
    /// Build a tokenizer from `(prefix, symbol)` pairs.
    ///
    /// Empty prefixes are ignored. A prefix registered twice keeps its
    /// last symbol.
    pub fn new<P: Into<String>>(mappings: impl IntoIterator<Item = (P, Symbol)>) -> Self {
        let mut unique: Vec<(String, Symbol)> = Vec::new();
        for (prefix, symbol) in mappings {
            let prefix = prefix.into();
            if prefix.is_empty() {
                continue;
            }
            match unique.iter_mut().find(|(existing, _)| *existing == prefix) {
                Some(entry) => entry.1 = symbol,
                None => unique.push((prefix, symbol)),
            }
        }
        unique.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));
        Self { mappings: unique }
    }

    /// Tokenizer whose prefixes are the symbols' own names.
    pub fn from_alphabet(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self::new(
            symbols
                .into_iter()
                .map(|symbol| (symbol.name().to_string(), symbol)),
        )
    }

    /// Registered prefixes, longest first.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.mappings.iter().map(|(prefix, _)| prefix.as_str())
    }

    /// Split `text` into input symbols, left to right.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Symbol>, LexError> {
        let mut symbols = Vec::new();
        let mut rest = text;
        let mut position = 1;

        while let Some(found) = rest.chars().next() {
            let (prefix, symbol) = self
                .mappings
                .iter()
                .find(|(prefix, _)| rest.starts_with(prefix.as_str()))
                .ok_or(LexError { position, found })?;

            symbols.push(symbol.clone());
            rest = &rest[prefix.len()..];
            position += prefix.chars().count();
        }

        Ok(symbols)
    }
}
