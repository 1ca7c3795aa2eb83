//! Builder for constructing systems.

use crate::automaton::PushdownAutomaton;
use crate::builder::error::BuildError;
use crate::core::Symbol;
use crate::lexer::Tokenizer;
use crate::system::{SearchLimits, System};
use std::collections::HashMap;

/// Builder for constructing systems with a fluent API.
///
/// Query targets are 0-based automaton indices.
#[derive(Clone, Debug, Default)]
pub struct SystemBuilder {
    automata: Vec<PushdownAutomaton>,
    queries: Vec<(Symbol, usize)>,
    input_symbols: Vec<(String, Symbol)>,
    limits: SearchLimits,
}

impl SystemBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component.
    pub fn automaton(mut self, automaton: PushdownAutomaton) -> Self {
        self.automata.push(automaton);
        self
    }

    /// Bind a query symbol to the automaton at `target`.
    pub fn query(mut self, symbol: Symbol, target: usize) -> Self {
        self.queries.push((symbol, target));
        self
    }

    /// Register the text that the tokenizer maps to `symbol`.
    pub fn input_symbol(mut self, text: impl Into<String>, symbol: Symbol) -> Self {
        self.input_symbols.push((text.into(), symbol));
        self
    }

    pub fn limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Build the system.
    /// Returns an error if there are no automata or a query binding is invalid.
    pub fn build(self) -> Result<System, BuildError> {
        if self.automata.is_empty() {
            return Err(BuildError::NoAutomata);
        }

        let count = self.automata.len();
        let mut query_targets = HashMap::new();
        for (symbol, target) in self.queries {
            if !symbol.is_query() {
                return Err(BuildError::NotAQuerySymbol {
                    symbol: symbol.name().to_string(),
                });
            }
            if target >= count {
                return Err(BuildError::QueryTargetOutOfRange {
                    symbol: symbol.name().to_string(),
                    target,
                    count,
                });
            }
            query_targets.insert(symbol, target);
        }

        Ok(System::from_parts(
            self.automata,
            query_targets,
            Tokenizer::new(self.input_symbols),
            self.limits,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;
    use crate::core::State;

    fn automaton() -> PushdownAutomaton {
        AutomatonBuilder::new()
            .initial_state(State::new("q0"))
            .initial_stack_symbol(Symbol::new("Z"))
            .build()
            .unwrap()
    }

    #[test]
    fn builder_requires_automata() {
        let result = SystemBuilder::new().build();
        assert!(matches!(result, Err(BuildError::NoAutomata)));
    }

    #[test]
    fn query_target_must_exist() {
        let result = SystemBuilder::new()
            .automaton(automaton())
            .query(Symbol::query("Q2"), 1)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::QueryTargetOutOfRange {
                symbol: "Q2".to_string(),
                target: 1,
                count: 1,
            }
        );
    }

    #[test]
    fn query_binding_needs_query_symbol() {
        let result = SystemBuilder::new()
            .automaton(automaton())
            .automaton(automaton())
            .query(Symbol::new("Q2"), 1)
            .build();

        assert!(matches!(result, Err(BuildError::NotAQuerySymbol { .. })));
    }

    #[test]
    fn fluent_api_builds_system() {
        let system = SystemBuilder::new()
            .automaton(automaton())
            .automaton(automaton())
            .query(Symbol::query("Q2"), 1)
            .input_symbol("a", Symbol::new("a"))
            .limits(SearchLimits::unbounded().with_max_expansions(10))
            .build()
            .unwrap();

        assert_eq!(system.automata().len(), 2);
        assert_eq!(system.query_target(&Symbol::query("Q2")), Some(1));
        assert_eq!(system.query_target(&Symbol::new("Q2")), None);
        assert_eq!(system.limits().max_expansions, Some(10));
        assert_eq!(system.tokenizer().tokenize("aa").unwrap().len(), 2);
    }
}
