//! Transitions of a pushdown automaton.

use super::state::State;
use super::symbol::{join_symbols, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move `(old_state, input_symbol, topmost_symbol) → (new_state, replacement)`.
///
/// An `input_symbol` of [`Symbol::epsilon`] makes the move independent of
/// the input; an empty `replacement` pops without pushing. The leftmost
/// replacement symbol ends up on top of the stack.
///
/// # Example
///
/// ```rust
/// use pcpa::core::{State, Symbol, Transition};
///
/// let push_a = Transition::new(
///     State::new("q0"),
///     Symbol::new("a"),
///     Symbol::new("Z"),
///     State::new("q0"),
///     vec![Symbol::new("A"), Symbol::new("Z")],
/// );
///
/// assert!(!push_a.is_epsilon_move());
/// assert_eq!(push_a.to_string(), "(q0, AZ) ∈ δ(q0, a, Z)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition {
    pub old_state: State,
    pub input_symbol: Symbol,
    pub topmost_symbol: Symbol,
    pub new_state: State,
    pub replacement: Vec<Symbol>,
}

impl Transition {
    pub fn new(
        old_state: State,
        input_symbol: Symbol,
        topmost_symbol: Symbol,
        new_state: State,
        replacement: Vec<Symbol>,
    ) -> Self {
        Self {
            old_state,
            input_symbol,
            topmost_symbol,
            new_state,
            replacement,
        }
    }

    /// Whether the move leaves the input untouched.
    pub fn is_epsilon_move(&self) -> bool {
        self.input_symbol.is_epsilon()
    }

    /// Check if this transition applies to the given context (pure).
    ///
    /// The state and topmost symbol must match exactly; the input symbol
    /// matches when the transition is an ε-move or reads exactly `input`.
    pub fn applies_to(&self, state: &State, input: &Symbol, topmost: &Symbol) -> bool {
        self.old_state == *state
            && self.topmost_symbol == *topmost
            && (self.is_epsilon_move() || self.input_symbol == *input)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) ∈ δ({}, {}, {})",
            self.new_state,
            join_symbols(&self.replacement),
            self.old_state,
            self.input_symbol,
            self.topmost_symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop_on(input: Symbol) -> Transition {
        Transition::new(
            State::new("q0"),
            input,
            Symbol::new("Z"),
            State::accepting("qf"),
            Vec::new(),
        )
    }

    #[test]
    fn applies_to_matches_state_and_top() {
        let transition = pop_on(Symbol::new("a"));

        assert!(transition.applies_to(&State::new("q0"), &Symbol::new("a"), &Symbol::new("Z")));
        assert!(!transition.applies_to(&State::new("q1"), &Symbol::new("a"), &Symbol::new("Z")));
        assert!(!transition.applies_to(&State::new("q0"), &Symbol::new("a"), &Symbol::new("A")));
        assert!(!transition.applies_to(&State::new("q0"), &Symbol::new("b"), &Symbol::new("Z")));
    }

    #[test]
    fn epsilon_move_ignores_input() {
        let transition = pop_on(Symbol::epsilon());

        assert!(transition.is_epsilon_move());
        assert!(transition.applies_to(&State::new("q0"), &Symbol::new("b"), &Symbol::new("Z")));
        assert!(transition.applies_to(&State::new("q0"), &Symbol::epsilon(), &Symbol::new("Z")));
    }

    #[test]
    fn display_renders_empty_replacement_as_epsilon() {
        assert_eq!(pop_on(Symbol::epsilon()).to_string(), "(qf, ε) ∈ δ(q0, ε, Z)");
    }
}
