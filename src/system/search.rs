//! Breadth-first search over system configurations.

use super::configuration::{ConfigId, ConfigTag, History, SystemConfiguration};
use super::error::ParseError;
use super::{Expansion, System};
use crate::core::Symbol;
use crate::trace::{Trace, Verdict};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Caller-imposed bounds on one search.
///
/// The search itself has no termination guard: ensembles whose ε-moves or
/// idle transitions revisit configurations can grow the frontier forever.
/// Both bounds are checked before each dequeue and default to unbounded.
///
/// # Example
///
/// ```rust
/// use pcpa::system::SearchLimits;
/// use std::time::Duration;
///
/// let limits = SearchLimits::unbounded()
///     .with_max_expansions(10_000)
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(limits.max_expansions, Some(10_000));
/// assert_eq!(limits.timeout_ms, Some(5_000));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchLimits {
    /// Maximum number of configurations taken off the frontier.
    pub max_expansions: Option<usize>,
    /// Maximum wall-clock time of the search, in milliseconds.
    pub timeout_ms: Option<u64>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    fn check(&self, expanded: usize, started: Instant) -> Result<(), ParseError> {
        let elapsed = started.elapsed();
        let out_of_expansions = self.max_expansions.is_some_and(|max| expanded >= max);
        let out_of_time = self
            .timeout_ms
            .is_some_and(|ms| elapsed >= Duration::from_millis(ms));

        if out_of_expansions || out_of_time {
            warn!(expanded, ?elapsed, "search limit exceeded");
            return Err(ParseError::LimitExceeded { expanded, elapsed });
        }
        Ok(())
    }
}

/// Counters describing one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Configurations taken off the frontier and expanded.
    pub expanded: usize,
    /// Configurations created by expansions.
    pub generated: usize,
    /// Branches that ended with a component unable to move.
    pub failed_branches: usize,
}

impl System {
    /// Tokenize `text` and run the system over it.
    ///
    /// Returns the first accepting configuration found (at minimal search
    /// depth) or, if every branch dies, the rejected configuration with the
    /// least unread input. Either way the trace holds its full lineage.
    ///
    /// # Errors
    ///
    /// Lexical and protocol errors abort the whole parse, as does exceeding
    /// the configured [`SearchLimits`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use pcpa::automaton::AcceptingMode;
    /// use pcpa::builder::{AutomatonBuilder, SystemBuilder, TransitionBuilder};
    /// use pcpa::core::{State, Symbol};
    ///
    /// let read_a = TransitionBuilder::new()
    ///     .from(State::new("q0"))
    ///     .reading(Symbol::new("a"))
    ///     .popping(Symbol::new("Z"))
    ///     .to(State::accepting("qf"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let automaton = AutomatonBuilder::new()
    ///     .initial_state(State::new("q0"))
    ///     .initial_stack_symbol(Symbol::new("Z"))
    ///     .accepting_mode(AcceptingMode::FinalState)
    ///     .transition(read_a)
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut system = SystemBuilder::new()
    ///     .automaton(automaton)
    ///     .input_symbol("a", Symbol::new("a"))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(system.parse("a").unwrap().is_accepted());
    /// assert!(!system.parse("aa").unwrap().is_accepted());
    /// ```
    pub fn parse(&mut self, text: &str) -> Result<Trace, ParseError> {
        let input = self.tokenizer.tokenize(text)?;
        self.parse_symbols(input)
    }

    /// Run the system over an already tokenized input.
    pub fn parse_symbols(&mut self, input: Vec<Symbol>) -> Result<Trace, ParseError> {
        let started = Instant::now();
        let mut history = History::new();
        let mut stats = SearchStats::default();

        debug!(
            automata = self.automata.len(),
            input_len = input.len(),
            "starting search"
        );

        let initial = self
            .automata
            .iter()
            .map(|automaton| automaton.initial_configuration(input.clone()))
            .collect();
        let root = history.record(SystemConfiguration::initial(initial));

        if self.is_accepting(history.get(root).components()) {
            history.classify(root, ConfigTag::Accepted);
            info!("input accepted by the initial configuration");
            return Ok(Trace::from_history(&history, root, Verdict::Accepted, stats));
        }

        let mut frontier = VecDeque::from([root]);
        let mut failed: Vec<ConfigId> = Vec::new();

        while let Some(current) = frontier.pop_front() {
            self.limits.check(stats.expanded, started)?;
            stats.expanded += 1;

            let successors = match self.expand(history.get(current).components())? {
                Expansion::Stuck => {
                    history.classify(current, ConfigTag::Rejected);
                    failed.push(current);
                    stats.failed_branches += 1;
                    continue;
                }
                Expansion::Communicated(components) => vec![components],
                Expansion::Moved(combinations) => combinations,
            };

            for components in successors {
                let accepting = self.is_accepting(&components);
                let id = history.record(SystemConfiguration::successor(components, current));
                stats.generated += 1;

                if accepting {
                    history.classify(id, ConfigTag::Accepted);
                    info!(
                        expanded = stats.expanded,
                        depth = history.lineage(id).len() - 1,
                        "input accepted"
                    );
                    return Ok(Trace::from_history(&history, id, Verdict::Accepted, stats));
                }

                frontier.push_back(id);
            }
        }

        let witness = failed
            .into_iter()
            .min_by_key(|&id| history.get(id).unread_input())
            .ok_or(ParseError::Exhausted)?;

        info!(
            expanded = stats.expanded,
            failed_branches = stats.failed_branches,
            unread = history.get(witness).unread_input(),
            "input rejected"
        );
        Ok(Trace::from_history(&history, witness, Verdict::Rejected, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_limits_never_trip() {
        let limits = SearchLimits::unbounded();
        assert!(limits.check(usize::MAX - 1, Instant::now()).is_ok());
    }

    #[test]
    fn expansion_limit_trips_at_bound() {
        let limits = SearchLimits::unbounded().with_max_expansions(3);

        assert!(limits.check(2, Instant::now()).is_ok());
        assert!(matches!(
            limits.check(3, Instant::now()),
            Err(ParseError::LimitExceeded { expanded: 3, .. })
        ));
    }

    #[test]
    fn zero_timeout_trips_immediately() {
        let limits = SearchLimits::unbounded().with_timeout(Duration::ZERO);
        assert!(limits.check(0, Instant::now()).is_err());
    }

    #[test]
    fn limits_deserialize_with_defaults() {
        let limits: SearchLimits = serde_json::from_str(r#"{ "max_expansions": 5 }"#).unwrap();

        assert_eq!(limits.max_expansions, Some(5));
        assert_eq!(limits.timeout_ms, None);
    }
}
