//! Loading systems from JSON definition documents.
//!
//! Loading happens in two passes. Deserialization checks the document
//! shape, then every name is resolved against the declared alphabets and
//! states. Resolution does not stop at the first problem: each check is a
//! `stillwater::Validation`, and all failures are reported together in
//! [`LoadError::Validation`].
//!
//! # Example
//!
//! ```rust
//! use pcpa::loader;
//!
//! let mut system = loader::from_json_str(r#"{
//!     "input_symbols": ["a"],
//!     "pushdown_symbols": ["Z"],
//!     "automata": [{
//!         "states": ["q0"],
//!         "final_states": ["qf"],
//!         "initial_state": "q0",
//!         "initial_stack_symbol": "Z",
//!         "accepting_mode": "FinalState",
//!         "transitions": [
//!             { "old_state": "q0", "input_symbol": "a", "topmost_symbol": "Z",
//!               "new_state": "qf", "replacement": ["Z"] }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! assert!(system.parse("a").unwrap().is_accepted());
//! ```

pub mod definition;
pub mod error;

pub use definition::{
    AutomatonDefinition, QuerySymbolDefinition, SystemDefinition, TransitionDefinition,
};
pub use error::{IssueKind, LoadError, ValidationIssue};

use crate::automaton::AcceptingMode;
use crate::builder::{AutomatonBuilder, BuildError, SystemBuilder};
use crate::core::{State, Symbol, Transition, EPSILON_NAME};
use crate::system::System;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Read, parse and build the system described by the file at `path`.
pub fn load_system(path: impl AsRef<Path>) -> Result<System, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&text)
}

/// Parse and build the system described by a JSON document.
pub fn from_json_str(text: &str) -> Result<System, LoadError> {
    let definition: SystemDefinition = serde_json::from_str(text)?;
    build_system(&definition)
}

/// Validate a definition and build its system.
///
/// # Errors
///
/// [`LoadError::Validation`] with every issue found when names do not
/// resolve or indices are out of range.
pub fn build_system(definition: &SystemDefinition) -> Result<System, LoadError> {
    let mut checks = Checks::default();
    let alphabet = Alphabet::resolve(definition, &mut checks);

    let automata: Vec<_> = definition
        .automata
        .iter()
        .enumerate()
        .map(|(index, automaton)| resolve_automaton(index, automaton, &alphabet, &mut checks))
        .collect();

    checks.finish()?;

    let mut builder = SystemBuilder::new().limits(definition.limits);
    for resolved in automata {
        let initial_state = resolved.initial_state.ok_or(BuildError::MissingInitialState)?;
        let initial_stack_symbol = resolved
            .initial_stack_symbol
            .ok_or(BuildError::MissingInitialStackSymbol)?;
        let automaton = AutomatonBuilder::new()
            .initial_state(initial_state)
            .initial_stack_symbol(initial_stack_symbol)
            .accepting_mode(resolved.accepting_mode)
            .returning(definition.returning)
            .transitions(resolved.transitions)
            .build()?;
        builder = builder.automaton(automaton);
    }
    for (symbol, target) in alphabet.query_targets {
        builder = builder.query(symbol, target);
    }
    for (text, symbol) in alphabet.input {
        builder = builder.input_symbol(text, symbol);
    }

    let system = builder.build()?;
    debug!(
        automata = system.automata().len(),
        returning = definition.returning,
        "system loaded"
    );
    Ok(system)
}

/// Accumulates the outcome of every check.
#[derive(Default)]
struct Checks {
    results: Vec<Validation<(), NonEmptyVec<ValidationIssue>>>,
}

impl Checks {
    fn require(&mut self, ok: bool, location: impl FnOnce() -> String, kind: impl FnOnce() -> IssueKind) {
        let result = if ok {
            Validation::success(())
        } else {
            Validation::fail(ValidationIssue::new(location(), kind()))
        };
        self.results.push(result);
    }

    fn issue(&mut self, location: impl Into<String>, kind: IssueKind) {
        self.results
            .push(Validation::fail(ValidationIssue::new(location, kind)));
    }

    /// A declared name must be non-empty and not the ε sentinel.
    fn declared_name(&mut self, name: &str, location: impl Fn() -> String) {
        self.require(!name.is_empty(), &location, || IssueKind::EmptyName);
        self.require(name != EPSILON_NAME, &location, || {
            IssueKind::ReservedName(name.to_string())
        });
    }

    fn finish(self) -> Result<(), LoadError> {
        match Validation::all_vec(self.results) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(LoadError::Validation {
                issues: errors.iter().cloned().collect(),
            }),
        }
    }
}

/// Declared symbols, interned by name.
struct Alphabet {
    input: HashMap<String, Symbol>,
    /// Pushdown symbols, query symbols included.
    pushdown: HashMap<String, Symbol>,
    /// Query symbol to 0-based automaton index.
    query_targets: HashMap<Symbol, usize>,
}

impl Alphabet {
    fn resolve(definition: &SystemDefinition, checks: &mut Checks) -> Self {
        let count = definition.automata.len();
        if count == 0 {
            checks.issue("automata", IssueKind::NoAutomata);
        }

        let mut input = HashMap::new();
        for (i, name) in definition.input_symbols.iter().enumerate() {
            checks.declared_name(name, || format!("input_symbols[{i}]"));
            input.insert(name.clone(), Symbol::new(name.as_str()));
        }

        let mut pushdown = HashMap::new();
        for (i, name) in definition.pushdown_symbols.iter().enumerate() {
            checks.declared_name(name, || format!("pushdown_symbols[{i}]"));
            pushdown.insert(name.clone(), Symbol::new(name.as_str()));
        }

        let mut query_targets = HashMap::new();
        let mut bound = HashSet::new();
        for (i, query) in definition.query_symbols.iter().enumerate() {
            checks.declared_name(&query.symbol, || format!("query_symbols[{i}].symbol"));

            let symbol = Symbol::query(query.symbol.as_str());
            if !bound.insert(query.symbol.as_str()) {
                checks.issue(
                    format!("query_symbols[{i}].symbol"),
                    IssueKind::DuplicateQuerySymbol(query.symbol.clone()),
                );
                continue;
            }

            let in_range = (1..=count).contains(&query.automaton);
            checks.require(
                in_range,
                || format!("query_symbols[{i}].automaton"),
                || IssueKind::AutomatonOutOfRange {
                    index: query.automaton,
                    count,
                },
            );
            if in_range {
                query_targets.insert(symbol.clone(), query.automaton - 1);
            }
            pushdown.insert(query.symbol.clone(), symbol);
        }

        Self {
            input,
            pushdown,
            query_targets,
        }
    }

    fn input_symbol(&self, name: &str, location: String, checks: &mut Checks) -> Option<Symbol> {
        let symbol = self.input.get(name).cloned();
        if symbol.is_none() {
            checks.issue(location, IssueKind::UndefinedSymbol(name.to_string()));
        }
        symbol
    }

    /// Resolve a stack symbol used by the automaton at `automaton`.
    fn stack_symbol(
        &self,
        name: &str,
        automaton: usize,
        location: String,
        checks: &mut Checks,
    ) -> Option<Symbol> {
        let Some(symbol) = self.pushdown.get(name) else {
            checks.issue(location, IssueKind::UndefinedSymbol(name.to_string()));
            return None;
        };

        if self.query_targets.get(symbol) == Some(&automaton) {
            checks.issue(location, IssueKind::SelfQuery(name.to_string()));
            return None;
        }
        Some(symbol.clone())
    }
}

struct ResolvedAutomaton {
    initial_state: Option<State>,
    initial_stack_symbol: Option<Symbol>,
    accepting_mode: AcceptingMode,
    transitions: Vec<Transition>,
}

fn lookup_state(
    states: &HashMap<&str, State>,
    name: &str,
    location: String,
    checks: &mut Checks,
) -> Option<State> {
    let state = states.get(name).cloned();
    if state.is_none() {
        checks.issue(location, IssueKind::UndefinedState(name.to_string()));
    }
    state
}

/// Resolve one automaton. Unresolved names are reported to `checks`.
fn resolve_automaton(
    index: usize,
    definition: &AutomatonDefinition,
    alphabet: &Alphabet,
    checks: &mut Checks,
) -> ResolvedAutomaton {
    let at = |field: &str| format!("automata[{index}].{field}");

    let mut states = HashMap::new();
    for (i, name) in definition.states.iter().enumerate() {
        checks.declared_name(name, || at(&format!("states[{i}]")));
        states.insert(name.as_str(), State::new(name.as_str()));
    }
    for (i, name) in definition.final_states.iter().enumerate() {
        checks.declared_name(name, || at(&format!("final_states[{i}]")));
        states.insert(name.as_str(), State::accepting(name.as_str()));
    }

    let initial_state = lookup_state(&states, &definition.initial_state, at("initial_state"), checks);
    let initial_stack_symbol = alphabet.stack_symbol(
        &definition.initial_stack_symbol,
        index,
        at("initial_stack_symbol"),
        checks,
    );

    let mut transitions = Vec::new();
    for (t, transition) in definition.transitions.iter().enumerate() {
        let field = |name: &str| at(&format!("transitions[{t}].{name}"));

        let old_state = lookup_state(&states, &transition.old_state, field("old_state"), checks);
        let input_symbol = match &transition.input_symbol {
            Some(name) => alphabet.input_symbol(name, field("input_symbol"), checks),
            None => Some(Symbol::epsilon()),
        };
        let topmost_symbol =
            alphabet.stack_symbol(&transition.topmost_symbol, index, field("topmost_symbol"), checks);
        let new_state = lookup_state(&states, &transition.new_state, field("new_state"), checks);

        let mut replacement = Some(Vec::with_capacity(transition.replacement.len()));
        for (r, name) in transition.replacement.iter().enumerate() {
            let symbol = alphabet.stack_symbol(name, index, field(&format!("replacement[{r}]")), checks);
            replacement = replacement.zip(symbol).map(|(mut symbols, symbol)| {
                symbols.push(symbol);
                symbols
            });
        }

        if let (Some(old), Some(input), Some(topmost), Some(new), Some(replacement)) =
            (old_state, input_symbol, topmost_symbol, new_state, replacement)
        {
            transitions.push(Transition::new(old, input, topmost, new, replacement));
        }
    }

    ResolvedAutomaton {
        initial_state,
        initial_stack_symbol,
        accepting_mode: definition.accepting_mode,
        transitions,
    }
}
