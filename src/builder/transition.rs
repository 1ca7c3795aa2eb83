//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{State, Symbol, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// Reading defaults to ε (no input consumed) and pushing defaults to
/// nothing (a pure pop).
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    from: Option<State>,
    input: Option<Symbol>,
    topmost: Option<Symbol>,
    to: Option<State>,
    replacement: Vec<Symbol>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: State) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the input symbol read by the move (optional).
    pub fn reading(mut self, symbol: Symbol) -> Self {
        self.input = Some(symbol);
        self
    }

    /// Set the topmost stack symbol the move pops (required).
    pub fn popping(mut self, symbol: Symbol) -> Self {
        self.topmost = Some(symbol);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: State) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the symbols pushed in place of the popped one, top first (optional).
    pub fn pushing(mut self, replacement: Vec<Symbol>) -> Self {
        self.replacement = replacement;
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let topmost = self.topmost.ok_or(BuildError::MissingTopmostSymbol)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition::new(
            from,
            self.input.unwrap_or_else(Symbol::epsilon),
            topmost,
            to,
            self.replacement,
        ))
    }
}
