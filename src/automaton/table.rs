//! Append-only transition table.

use crate::core::{State, Symbol, Transition};
use std::collections::HashMap;
use std::sync::Arc;

/// Transition relation of one automaton.
///
/// Transitions are kept in insertion order and indexed by
/// `(old_state, topmost_symbol)`. The table only grows: [`insert`] is the
/// single mutation path and ignores transitions already present.
///
/// [`insert`]: TransitionTable::insert
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
    transitions: Vec<Arc<Transition>>,
    index: HashMap<(State, Symbol), Vec<usize>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a transition unless an equal one is already present.
    ///
    /// Returns the stored transition and whether it was newly added.
    pub fn insert(&mut self, transition: Transition) -> (Arc<Transition>, bool) {
        let key = (
            transition.old_state.clone(),
            transition.topmost_symbol.clone(),
        );

        if let Some(positions) = self.index.get(&key) {
            if let Some(&existing) = positions
                .iter()
                .find(|&&i| *self.transitions[i] == transition)
            {
                return (Arc::clone(&self.transitions[existing]), false);
            }
        }

        let stored = Arc::new(transition);
        self.index
            .entry(key)
            .or_default()
            .push(self.transitions.len());
        self.transitions.push(Arc::clone(&stored));
        (stored, true)
    }

    /// All transitions applicable in the given context, in insertion order.
    pub fn matching(&self, state: &State, input: &Symbol, topmost: &Symbol) -> Vec<Arc<Transition>> {
        let key = (state.clone(), topmost.clone());
        self.index
            .get(&key)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&i| &self.transitions[i])
                    .filter(|t| t.applies_to(state, input, topmost))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().map(|t| t.as_ref())
    }
}

impl FromIterator<Transition> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        let mut table = Self::new();
        for transition in iter {
            table.insert(transition);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(input: Symbol, new_state: &str) -> Transition {
        Transition::new(
            State::new("q0"),
            input,
            Symbol::new("Z"),
            State::new(new_state),
            vec![Symbol::new("Z")],
        )
    }

    #[test]
    fn insert_is_idempotent() {
        let mut table = TransitionTable::new();

        let (_, added) = table.insert(transition(Symbol::new("a"), "q1"));
        assert!(added);
        let (_, added) = table.insert(transition(Symbol::new("a"), "q1"));
        assert!(!added);

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn matching_filters_on_input() {
        let table: TransitionTable = vec![
            transition(Symbol::new("a"), "q1"),
            transition(Symbol::new("b"), "q2"),
            transition(Symbol::epsilon(), "q3"),
        ]
        .into_iter()
        .collect();

        let found = table.matching(&State::new("q0"), &Symbol::new("a"), &Symbol::new("Z"));
        let targets: Vec<_> = found.iter().map(|t| t.new_state.name().to_string()).collect();

        assert_eq!(targets, vec!["q1", "q3"]);
    }

    #[test]
    fn matching_unknown_context_is_empty() {
        let table: TransitionTable = std::iter::once(transition(Symbol::new("a"), "q1")).collect();

        assert!(table
            .matching(&State::new("q9"), &Symbol::new("a"), &Symbol::new("Z"))
            .is_empty());
        assert!(table
            .matching(&State::new("q0"), &Symbol::new("a"), &Symbol::new("A"))
            .is_empty());
    }
}
