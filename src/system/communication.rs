//! Stack exchange between components.
//!
//! A component with a query symbol on top of its stack requests the stack
//! of the automaton bound to that symbol. A request is served only when its
//! target is not itself waiting for a stack; the rest stay pending and are
//! retried on the next round, so a chain of `n` requests takes `n` rounds.

use super::error::ProtocolError;
use super::System;
use crate::core::{Configuration, Symbol};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

impl System {
    /// Requests `requester → target` for every component awaiting a stack.
    pub fn requests(&self, components: &[Configuration]) -> Result<BTreeMap<usize, usize>, ProtocolError> {
        let mut requests = BTreeMap::new();

        for (requester, component) in components.iter().enumerate() {
            if !component.awaits_communication() {
                continue;
            }

            let symbol = component.topmost_symbol();
            let target = self
                .query_target(&symbol)
                .ok_or_else(|| ProtocolError::UnboundQuery {
                    symbol: symbol.name().to_string(),
                    automaton: requester,
                })?;
            requests.insert(requester, target);
        }

        Ok(requests)
    }

    /// One communication round.
    ///
    /// Returns fresh component configurations with no producing transition
    /// recorded. Every satisfiable request receives its target's stack; a
    /// target queried by several components sends once, and all of them
    /// receive the same snapshot.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::NoRequests`] when no component awaits a stack and
    /// [`ProtocolError::CircularQuery`] when every requester is also a
    /// target. A round in which no request can be served otherwise yields
    /// the components unchanged.
    pub fn communicate(&self, components: &[Configuration]) -> Result<Vec<Configuration>, ProtocolError> {
        let requests = self.requests(components)?;

        if requests.is_empty() {
            return Err(ProtocolError::NoRequests);
        }

        // Every requester waits on another requester: a circular wait.
        let targets: BTreeSet<usize> = requests.values().copied().collect();
        if requests.keys().all(|requester| targets.contains(requester)) {
            return Err(ProtocolError::CircularQuery {
                requesters: requests.keys().copied().collect(),
            });
        }

        let mut next: Vec<Configuration> = components.iter().map(Configuration::detached).collect();
        let mut sent: HashMap<usize, Vec<Symbol>> = HashMap::new();
        let mut served = 0;

        for (&requester, &target) in requests
            .iter()
            .filter(|(_, target)| !requests.contains_key(*target))
        {
            let stack = sent
                .entry(target)
                .or_insert_with(|| self.automata[target].send_stack(&mut next[target]));
            self.automata[requester].receive_stack(&mut next[requester], stack);
            served += 1;
        }

        debug!(
            requests = requests.len(),
            served,
            "communication round"
        );

        Ok(next)
    }
}
