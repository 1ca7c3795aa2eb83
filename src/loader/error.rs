//! Errors raised while loading a definition document.

use crate::builder::BuildError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a system definition.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed definition at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Definition has {} validation issue(s): {}", .issues.len(), render(.issues))]
    Validation { issues: Vec<ValidationIssue> },

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

fn render(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ValidationIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One problem found in a definition, with its location in the document.
///
/// Locations are paths such as `automata[0].transitions[2].new_state`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {kind}")]
pub struct ValidationIssue {
    pub location: String,
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn new(location: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            location: location.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueKind {
    #[error("symbol '{0}' is not declared")]
    UndefinedSymbol(String),

    #[error("state '{0}' is not declared")]
    UndefinedState(String),

    #[error("automaton {index} does not exist (automata are numbered 1 to {count})")]
    AutomatonOutOfRange { index: usize, count: usize },

    #[error("query symbol '{0}' is bound to the automaton using it")]
    SelfQuery(String),

    #[error("'{0}' is a reserved name")]
    ReservedName(String),

    #[error("names must not be empty")]
    EmptyName,

    #[error("no automata defined")]
    NoAutomata,

    #[error("query symbol '{0}' is bound more than once")]
    DuplicateQuerySymbol(String),
}
