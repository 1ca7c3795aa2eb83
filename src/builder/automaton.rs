//! Builder for constructing pushdown automata.

use crate::automaton::{AcceptingMode, PushdownAutomaton};
use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{State, Symbol, Transition};

/// Builder for constructing automata with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    initial_state: Option<State>,
    initial_stack_symbol: Option<Symbol>,
    accepting_mode: AcceptingMode,
    returning: bool,
    transitions: Vec<Transition>,
}

impl AutomatonBuilder {
    /// Create a new builder accepting by final state, non-returning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial_state(mut self, state: State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the initial stack symbol (required).
    pub fn initial_stack_symbol(mut self, symbol: Symbol) -> Self {
        self.initial_stack_symbol = Some(symbol);
        self
    }

    pub fn accepting_mode(mut self, mode: AcceptingMode) -> Self {
        self.accepting_mode = mode;
        self
    }

    /// Reset the stack to the initial symbol after sending it.
    pub fn returning(mut self, returning: bool) -> Self {
        self.returning = returning;
        self
    }

    /// Add a pre-built transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition_with(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        self.transitions.push(builder.build()?);
        Ok(self)
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the automaton.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<PushdownAutomaton, BuildError> {
        let initial_state = self.initial_state.ok_or(BuildError::MissingInitialState)?;
        let initial_stack_symbol = self
            .initial_stack_symbol
            .ok_or(BuildError::MissingInitialStackSymbol)?;

        Ok(PushdownAutomaton::new(
            self.transitions,
            initial_state,
            initial_stack_symbol,
            self.accepting_mode,
            self.returning,
        ))
    }
}
