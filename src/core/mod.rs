//! Core value types of a pushdown automaton.
//!
//! This module contains the immutable building blocks:
//! - `Symbol`: input, stack and query symbols, plus the ε sentinel
//! - `State`: named states with a finality flag
//! - `Transition`: the transition relation
//! - `Configuration`: instantaneous description of one automaton
//!
//! Everything here is a value with structural equality and no side effects.

mod configuration;
mod state;
mod symbol;
mod transition;

pub use configuration::Configuration;
pub use state::State;
pub use symbol::{Symbol, EPSILON_NAME};
pub use transition::Transition;

pub(crate) use symbol::join_symbols;
