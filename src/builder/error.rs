//! Build errors for automaton, transition and system builders.

use thiserror::Error;

/// Errors that can occur when building automata, transitions and systems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial_state(state) before .build()")]
    MissingInitialState,

    #[error("Initial stack symbol not specified. Call .initial_stack_symbol(symbol) before .build()")]
    MissingInitialStackSymbol,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition topmost symbol not specified. Call .popping(symbol)")]
    MissingTopmostSymbol,

    #[error("No automata defined. Add at least one automaton")]
    NoAutomata,

    #[error("Symbol '{symbol}' is not a query symbol")]
    NotAQuerySymbol { symbol: String },

    #[error("Query symbol '{symbol}' targets automaton {target}, but the system has {count}")]
    QueryTargetOutOfRange {
        symbol: String,
        target: usize,
        count: usize,
    },
}
