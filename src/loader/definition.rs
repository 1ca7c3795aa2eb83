//! Serializable definition documents.
//!
//! Every referenced name is a plain string here; the loader resolves and
//! validates them. Unknown fields are rejected.

use crate::automaton::AcceptingMode;
use crate::system::SearchLimits;
use serde::{Deserialize, Serialize};

/// A whole system: alphabets, query bindings and one entry per automaton.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemDefinition {
    /// Applies to every automaton.
    #[serde(default)]
    pub returning: bool,
    pub input_symbols: Vec<String>,
    pub pushdown_symbols: Vec<String>,
    #[serde(default)]
    pub query_symbols: Vec<QuerySymbolDefinition>,
    pub automata: Vec<AutomatonDefinition>,
    #[serde(default)]
    pub limits: SearchLimits,
}

/// Binds a query symbol to an automaton by its 1-based index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuerySymbolDefinition {
    pub symbol: String,
    pub automaton: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutomatonDefinition {
    pub states: Vec<String>,
    #[serde(default)]
    pub final_states: Vec<String>,
    pub initial_state: String,
    pub initial_stack_symbol: String,
    pub accepting_mode: AcceptingMode,
    #[serde(default)]
    pub transitions: Vec<TransitionDefinition>,
}

/// One transition; a missing `input_symbol` makes it an ε-move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionDefinition {
    pub old_state: String,
    #[serde(default)]
    pub input_symbol: Option<String>,
    pub topmost_symbol: String,
    pub new_state: String,
    /// Pushed symbols, topmost first.
    #[serde(default)]
    pub replacement: Vec<String>,
}
