//! Automaton states.
//!
//! States are plain values: a name plus a finality flag. Two states that
//! share a name but differ in finality are different states.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A state of a pushdown automaton.
///
/// # Example
///
/// ```rust
/// use pcpa::core::State;
///
/// let q0 = State::new("q0");
/// let qf = State::accepting("qf");
///
/// assert!(!q0.is_final());
/// assert!(qf.is_final());
/// assert_ne!(State::new("qf"), qf);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct State {
    name: Arc<str>,
    is_final: bool,
}

impl State {
    /// Create a non-final state.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            is_final: false,
        }
    }

    /// Create a final state.
    pub fn accepting(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            is_final: true,
        }
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this is a final state.
    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
