//! Builder API for ergonomic system construction.
//!
//! This module provides fluent builders for transitions, automata and whole
//! systems. Each `build()` validates the required parts and reports a
//! [`BuildError`] instead of panicking.

pub mod automaton;
pub mod error;
pub mod system;
pub mod transition;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
pub use system::SystemBuilder;
pub use transition::TransitionBuilder;

use crate::core::{State, Symbol, Transition};

/// Create a transition from plain names.
///
/// `input` of `None` makes an ε-move. States named in `finals` are final.
///
/// # Example
///
/// ```
/// use pcpa::builder::transition;
///
/// let push = transition("q0", Some("a"), "Z", "q0", &["A", "Z"], &[]);
/// assert_eq!(push.to_string(), "(q0, AZ) ∈ δ(q0, a, Z)");
///
/// let finish = transition("q0", None, "Z", "qf", &[], &["qf"]);
/// assert!(finish.new_state.is_final());
/// assert!(finish.is_epsilon_move());
/// ```
pub fn transition(
    old_state: &str,
    input: Option<&str>,
    topmost: &str,
    new_state: &str,
    replacement: &[&str],
    finals: &[&str],
) -> Transition {
    let state = |name: &str| {
        if finals.contains(&name) {
            State::accepting(name)
        } else {
            State::new(name)
        }
    };

    Transition::new(
        state(old_state),
        input.map_or_else(Symbol::epsilon, Symbol::new),
        Symbol::new(topmost),
        state(new_state),
        replacement.iter().map(|s| Symbol::new(*s)).collect(),
    )
}
