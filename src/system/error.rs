//! Errors raised while running a system over an input.

use crate::lexer::LexError;
use std::time::Duration;
use thiserror::Error;

/// Violations of the communication protocol. Fatal to the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("No communication was requested")]
    NoRequests,

    #[error("Circular query among automata {requesters:?}")]
    CircularQuery { requesters: Vec<usize> },

    #[error("Query symbol '{symbol}' on top of automaton {automaton} is not bound to any automaton")]
    UnboundQuery { symbol: String, automaton: usize },
}

/// Errors that abort a call to [`System::parse`](super::System::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Search limit exceeded after {expanded} expansions ({elapsed:?})")]
    LimitExceeded { expanded: usize, elapsed: Duration },

    #[error("Search ended without an accepting or rejected configuration")]
    Exhausted,
}
