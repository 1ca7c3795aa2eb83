//! pcpa: a simulator for parallel communicating pushdown automata
//!
//! A system runs several pushdown automata over the same input. Whenever
//! one of them has a query symbol on top of its stack, it receives the
//! stack of the automaton that symbol names; otherwise every automaton
//! makes one move. The input is accepted once every automaton accepts.
//!
//! # Core Concepts
//!
//! - **Automaton**: nondeterministic pushdown automaton with one of three
//!   accepting modes, see [`automaton`]
//! - **System**: the communicating ensemble and its breadth-first search,
//!   see [`system`]
//! - **Trace**: lineage of the accepting (or best rejected) configuration,
//!   see [`trace`]
//! - **Loader**: JSON definition documents, see [`loader`]
//!
//! # Example
//!
//! ```rust
//! use pcpa::automaton::AcceptingMode;
//! use pcpa::builder::{transition, AutomatonBuilder, SystemBuilder};
//! use pcpa::core::{State, Symbol};
//!
//! // The first automaton asks for the second one's stack, then empties it.
//! // The second one starts in a final state.
//! let asker = AutomatonBuilder::new()
//!     .initial_state(State::new("q0"))
//!     .initial_stack_symbol(Symbol::query("Q2"))
//!     .accepting_mode(AcceptingMode::EmptyStack)
//!     .transition(transition("q0", None, "Z", "q0", &[], &[]))
//!     .build()
//!     .unwrap();
//!
//! let giver = AutomatonBuilder::new()
//!     .initial_state(State::accepting("p0"))
//!     .initial_stack_symbol(Symbol::new("Z"))
//!     .accepting_mode(AcceptingMode::FinalState)
//!     .transitions([transition("p0", None, "Z", "p0", &["A", "Z"], &["p0"])])
//!     .build()
//!     .unwrap();
//!
//! let mut system = SystemBuilder::new()
//!     .automaton(asker)
//!     .automaton(giver)
//!     .query(Symbol::query("Q2"), 1)
//!     .build()
//!     .unwrap();
//!
//! let trace = system.parse("").unwrap();
//! assert!(trace.is_accepted());
//! // initial, after communication, after one move of each automaton
//! assert_eq!(trace.steps().len(), 3);
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod lexer;
pub mod loader;
pub mod system;
pub mod trace;

// Re-export commonly used types
pub use crate::automaton::{AcceptingMode, PushdownAutomaton};
pub use crate::core::{Configuration, State, Symbol, Transition};
pub use crate::system::{ParseError, System};
pub use crate::trace::{Trace, Verdict};
