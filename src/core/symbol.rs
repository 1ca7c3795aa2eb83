//! Input and pushdown symbols.
//!
//! A symbol is an immutable value identified by its name and whether it is a
//! query symbol. The name is reference counted so symbols can be cloned
//! freely while a loaded system shares one allocation per name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Name of the reserved "no symbol" sentinel.
pub const EPSILON_NAME: &str = "ε";

/// An input or stack symbol of a pushdown automaton.
///
/// Equality and hashing are structural: two symbols are equal when both the
/// name and the query flag match.
///
/// # Example
///
/// ```rust
/// use pcpa::core::Symbol;
///
/// let a = Symbol::new("a");
/// let q = Symbol::query("Q1");
///
/// assert!(!a.is_query());
/// assert!(q.is_query());
/// assert_ne!(Symbol::new("Q1"), q);
/// assert!(Symbol::epsilon().is_epsilon());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Symbol {
    name: Arc<str>,
    is_query: bool,
}

impl Symbol {
    /// Create an ordinary (non-query) symbol.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            is_query: false,
        }
    }

    /// Create a query symbol.
    pub fn query(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            is_query: true,
        }
    }

    /// The ε sentinel: no symbol read, no symbol on the stack.
    pub fn epsilon() -> Self {
        Self::new(EPSILON_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_query(&self) -> bool {
        self.is_query
    }

    pub fn is_epsilon(&self) -> bool {
        !self.is_query && &*self.name == EPSILON_NAME
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Concatenate symbols for display, rendering an empty sequence as `ε`.
pub(crate) fn join_symbols(symbols: &[Symbol]) -> String {
    if symbols.is_empty() {
        return EPSILON_NAME.to_string();
    }
    symbols.iter().map(Symbol::name).collect()
}
