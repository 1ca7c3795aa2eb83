//! A single pushdown automaton of a PCPA system.
//!
//! The automaton owns its transition table and the policies that decide
//! acceptance and what happens to its stack when another component queries
//! it. The step function is non-deterministic: it returns every
//! configuration reachable in one move.

mod table;

pub use table::TransitionTable;

use crate::core::{Configuration, State, Symbol, Transition};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::trace;

/// Local acceptance policy of one automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AcceptingMode {
    /// Accept in a final state.
    #[default]
    FinalState,
    /// Accept with an empty stack.
    EmptyStack,
    /// Accept in a final state with an empty stack.
    Both,
}

/// One component of a system of parallel communicating pushdown automata.
///
/// # Example
///
/// ```rust
/// use pcpa::automaton::{AcceptingMode, PushdownAutomaton};
/// use pcpa::core::{State, Symbol, Transition};
///
/// let pop = Transition::new(
///     State::new("q0"),
///     Symbol::epsilon(),
///     Symbol::new("Z"),
///     State::new("q0"),
///     Vec::new(),
/// );
/// let mut automaton = PushdownAutomaton::new(
///     vec![pop],
///     State::new("q0"),
///     Symbol::new("Z"),
///     AcceptingMode::EmptyStack,
///     false,
/// );
///
/// let initial = automaton.initial_configuration(Vec::new());
/// assert!(!automaton.is_accepting(&initial));
///
/// let next = automaton.step(&initial);
/// assert_eq!(next.len(), 1);
/// assert!(automaton.is_accepting(&next[0]));
/// ```
#[derive(Clone, Debug)]
pub struct PushdownAutomaton {
    transitions: TransitionTable,
    initial_state: State,
    initial_stack_symbol: Symbol,
    accepting_mode: AcceptingMode,
    returning: bool,
}

impl PushdownAutomaton {
    pub fn new(
        transitions: impl IntoIterator<Item = Transition>,
        initial_state: State,
        initial_stack_symbol: Symbol,
        accepting_mode: AcceptingMode,
        returning: bool,
    ) -> Self {
        Self {
            transitions: transitions.into_iter().collect(),
            initial_state,
            initial_stack_symbol,
            accepting_mode,
            returning,
        }
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn initial_stack_symbol(&self) -> &Symbol {
        &self.initial_stack_symbol
    }

    pub fn accepting_mode(&self) -> AcceptingMode {
        self.accepting_mode
    }

    /// Whether the stack is reset after it is sent to another component.
    pub fn is_returning(&self) -> bool {
        self.returning
    }

    /// Fresh configuration over `input` with only the initial stack symbol.
    pub fn initial_configuration(&self, input: Vec<Symbol>) -> Configuration {
        Configuration::new(
            self.initial_state.clone(),
            input,
            vec![self.initial_stack_symbol.clone()],
        )
    }

    /// Every configuration reachable from `config` in one move.
    ///
    /// When no transition applies but `config` is locally accepting, an
    /// implicit transition that leaves the configuration unchanged is added
    /// to the table and used. The table keeps it, so later calls in the same
    /// context reuse it instead of synthesizing another one.
    pub fn step(&mut self, config: &Configuration) -> Vec<Configuration> {
        let input = config.input_symbol();
        let topmost = config.topmost_symbol();
        let mut candidates = self.transitions.matching(config.state(), &input, &topmost);

        if candidates.is_empty() && self.is_accepting(config) {
            let replacement = if topmost.is_epsilon() {
                Vec::new()
            } else {
                vec![topmost.clone()]
            };
            let idle = Transition::new(
                config.state().clone(),
                input,
                topmost,
                config.state().clone(),
                replacement,
            );
            let (idle, added) = self.transitions.insert(idle);
            if added {
                trace!(transition = %idle, "synthesized implicit transition");
            }
            candidates.push(idle);
        }

        candidates
            .into_iter()
            .map(|transition| Self::apply_shared(config, transition))
            .collect()
    }

    /// Apply `transition` to `config` without checking that it applies.
    ///
    /// Pops the topmost symbol, pushes the replacement and consumes one
    /// input symbol unless the transition is an ε-move.
    pub fn apply(config: &Configuration, transition: &Transition) -> Configuration {
        Self::apply_shared(config, Arc::new(transition.clone()))
    }

    fn apply_shared(config: &Configuration, transition: Arc<Transition>) -> Configuration {
        let consumed = usize::from(!transition.is_epsilon_move());
        let input = config.input().iter().skip(consumed).cloned().collect();
        let stack = transition
            .replacement
            .iter()
            .chain(config.stack().iter().skip(1))
            .cloned()
            .collect();

        Configuration::reached_by(transition.new_state.clone(), input, stack, transition)
    }

    /// Local acceptance test, ignoring every other component.
    pub fn is_accepting(&self, config: &Configuration) -> bool {
        if !config.input().is_empty() {
            return false;
        }

        let in_final_state = config.state().is_final();
        let stack_is_empty = config.stack().is_empty();

        match self.accepting_mode {
            AcceptingMode::FinalState => in_final_state,
            AcceptingMode::EmptyStack => stack_is_empty,
            AcceptingMode::Both => in_final_state && stack_is_empty,
        }
    }

    /// Copy of the stack handed to a querying component.
    ///
    /// A returning automaton also resets `config`'s stack to the initial
    /// stack symbol.
    pub fn send_stack(&self, config: &mut Configuration) -> Vec<Symbol> {
        let stack = config.stack().to_vec();

        if self.returning {
            let live = config.stack_mut();
            live.clear();
            live.push(self.initial_stack_symbol.clone());
        }

        stack
    }

    /// Replace the query symbol on top of `config`'s stack by `stack`.
    pub fn receive_stack(&self, config: &mut Configuration, stack: &[Symbol]) {
        let live = config.stack_mut();
        if !live.is_empty() {
            live.remove(0);
        }
        live.splice(0..0, stack.iter().cloned());
    }
}
