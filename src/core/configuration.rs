//! Instantaneous description of a single automaton.

use super::state::State;
use super::symbol::{join_symbols, Symbol};
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Current state, unread input and stack contents of one automaton.
///
/// The stack is stored top first: `stack()[0]` is the topmost symbol.
/// `reached_with` records the transition that produced the configuration,
/// or `None` for an initial configuration or one changed by communication.
/// It does not take part in equality.
///
/// Configurations are plain values. A clone owns its own input and stack.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Configuration {
    state: State,
    input: Vec<Symbol>,
    stack: Vec<Symbol>,
    reached_with: Option<Arc<Transition>>,
}

impl Configuration {
    pub fn new(state: State, input: Vec<Symbol>, stack: Vec<Symbol>) -> Self {
        Self {
            state,
            input,
            stack,
            reached_with: None,
        }
    }

    pub(crate) fn reached_by(
        state: State,
        input: Vec<Symbol>,
        stack: Vec<Symbol>,
        transition: Arc<Transition>,
    ) -> Self {
        Self {
            state,
            input,
            stack,
            reached_with: Some(transition),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Unread input, next symbol first.
    pub fn input(&self) -> &[Symbol] {
        &self.input
    }

    /// Stack contents, topmost symbol first.
    pub fn stack(&self) -> &[Symbol] {
        &self.stack
    }

    pub fn reached_with(&self) -> Option<&Transition> {
        self.reached_with.as_deref()
    }

    /// The next input symbol, or ε when the input is exhausted.
    pub fn input_symbol(&self) -> Symbol {
        self.input.first().cloned().unwrap_or_else(Symbol::epsilon)
    }

    /// The topmost stack symbol, or ε when the stack is empty.
    pub fn topmost_symbol(&self) -> Symbol {
        self.stack.first().cloned().unwrap_or_else(Symbol::epsilon)
    }

    /// Whether a query symbol is on top of the stack.
    pub fn awaits_communication(&self) -> bool {
        self.stack.first().is_some_and(Symbol::is_query)
    }

    /// Copy of this configuration with no producing transition recorded.
    pub fn detached(&self) -> Self {
        Self::new(self.state.clone(), self.input.clone(), self.stack.clone())
    }

    pub(crate) fn stack_mut(&mut self) -> &mut Vec<Symbol> {
        &mut self.stack
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.input == other.input && self.stack == other.stack
    }
}

impl Eq for Configuration {}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.state,
            join_symbols(&self.input),
            join_symbols(&self.stack)
        )
    }
}
