//! Systems of parallel communicating pushdown automata.
//!
//! A [`System`] runs every component over the same input. Each system-level
//! move is exactly one of:
//!
//! - **communication step**: some component has a query symbol on top of
//!   its stack and receives the stack of the automaton bound to it;
//! - **accepting step**: every component makes one move of its own.
//!
//! [`System::parse`] explores every possible evolution breadth-first and
//! reports an accepting or best-effort rejecting [`Trace`](crate::trace::Trace).

mod communication;
mod configuration;
mod error;
mod product;
mod search;

pub use configuration::{ConfigId, ConfigTag, History, SystemConfiguration};
pub use error::{ParseError, ProtocolError};
pub use search::{SearchLimits, SearchStats};

use crate::automaton::PushdownAutomaton;
use crate::core::{Configuration, Symbol};
use crate::lexer::Tokenizer;
use product::cartesian_product;
use std::collections::HashMap;

/// Successors of one system configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum Expansion {
    /// A communication round produced one new set of components.
    Communicated(Vec<Configuration>),
    /// Every component moved; one entry per combination of moves.
    Moved(Vec<Vec<Configuration>>),
    /// Some component has no move; the configuration is a dead end.
    Stuck,
}

/// A system of parallel communicating pushdown automata.
///
/// Built with [`SystemBuilder`](crate::builder::SystemBuilder) or loaded
/// from a definition document with [`crate::loader`].
#[derive(Clone, Debug)]
pub struct System {
    automata: Vec<PushdownAutomaton>,
    query_targets: HashMap<Symbol, usize>,
    tokenizer: Tokenizer,
    limits: SearchLimits,
}

impl System {
    /// Assemble a system. Query targets must be valid automaton indices.
    pub(crate) fn from_parts(
        automata: Vec<PushdownAutomaton>,
        query_targets: HashMap<Symbol, usize>,
        tokenizer: Tokenizer,
        limits: SearchLimits,
    ) -> Self {
        Self {
            automata,
            query_targets,
            tokenizer,
            limits,
        }
    }

    pub fn automata(&self) -> &[PushdownAutomaton] {
        &self.automata
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Replace the search limits.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    /// Index of the automaton a query symbol asks for.
    pub fn query_target(&self, symbol: &Symbol) -> Option<usize> {
        self.query_targets.get(symbol).copied()
    }

    /// Whether every component accepts in isolation.
    pub fn is_accepting(&self, components: &[Configuration]) -> bool {
        self.automata
            .iter()
            .zip(components)
            .all(|(automaton, component)| automaton.is_accepting(component))
    }

    /// Expand one system configuration by the step kind it calls for.
    pub fn expand(&mut self, components: &[Configuration]) -> Result<Expansion, ProtocolError> {
        if components.iter().any(Configuration::awaits_communication) {
            return self.communicate(components).map(Expansion::Communicated);
        }

        Ok(self
            .accepting_step(components)
            .map_or(Expansion::Stuck, Expansion::Moved))
    }

    /// Every combination of one move per component.
    ///
    /// Returns `None` when some component cannot move. Each returned
    /// combination owns its components; no two combinations share one.
    pub fn accepting_step(&mut self, components: &[Configuration]) -> Option<Vec<Vec<Configuration>>> {
        let candidates: Vec<Vec<Configuration>> = self
            .automata
            .iter_mut()
            .zip(components)
            .map(|(automaton, component)| automaton.step(component))
            .collect();

        if candidates.iter().any(Vec::is_empty) {
            return None;
        }

        if candidates.iter().all(|moves| moves.len() == 1) {
            return Some(vec![candidates.into_iter().flatten().collect()]);
        }

        Some(cartesian_product(&candidates))
    }
}
