//! Results of a search.
//!
//! A [`Trace`] holds the lineage of the configuration a search stopped at,
//! oldest first, together with the verdict and search counters. Its
//! `Display` implementation lists every automaton's configurations, each
//! annotated with the move that produced it.

use crate::core::Configuration;
use crate::system::{ConfigId, History, SearchStats, SystemConfiguration};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// Lineage of the configuration a search ended at.
///
/// `steps` runs from the initial system configuration to the accepting
/// one, or to the best rejected one. The `previous` link of each step
/// points at its index in `steps`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace {
    verdict: Verdict,
    steps: Vec<SystemConfiguration>,
    stats: SearchStats,
}

impl Trace {
    pub(crate) fn from_history(
        history: &History,
        id: ConfigId,
        verdict: Verdict,
        stats: SearchStats,
    ) -> Self {
        let steps = history
            .lineage(id)
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let mut step = history.get(node).clone();
                step.relink(index.checked_sub(1).map(ConfigId));
                step
            })
            .collect();

        Self {
            verdict,
            steps,
            stats,
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }

    pub fn steps(&self) -> &[SystemConfiguration] {
        &self.steps
    }

    /// The configuration the search stopped at.
    pub fn result(&self) -> &SystemConfiguration {
        &self.steps[self.steps.len() - 1]
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Configurations of one automaton, oldest first.
    pub fn automaton_lineage(&self, automaton: usize) -> Vec<&Configuration> {
        self.steps
            .iter()
            .filter_map(|step| step.components().get(automaton))
            .collect()
    }

    /// Serialize the trace as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// How component `automaton` got to step `index`.
    fn annotation(&self, automaton: usize, index: usize) -> Option<String> {
        let previous = index.checked_sub(1)?;
        let component = self.steps[index].components().get(automaton)?;

        if let Some(transition) = component.reached_with() {
            return Some(transition.to_string());
        }

        let requested = self.steps[previous]
            .components()
            .get(automaton)
            .is_some_and(Configuration::awaits_communication);
        Some(if requested {
            "after requested communication".to_string()
        } else {
            "after communication".to_string()
        })
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self.verdict {
            Verdict::Accepted => "accepted",
            Verdict::Rejected => "rejected",
        };
        writeln!(
            f,
            "Input {verdict} after {} step(s) ({} configurations expanded)",
            self.steps.len() - 1,
            self.stats.expanded
        )?;

        let automata = self.steps.first().map_or(0, |s| s.components().len());
        let number_width = (self.steps.len() - 1).to_string().len();

        for automaton in 0..automata {
            writeln!(f)?;
            writeln!(f, "Automaton {}", automaton + 1)?;

            let rendered: Vec<String> = self
                .automaton_lineage(automaton)
                .iter()
                .map(ToString::to_string)
                .collect();
            let width = rendered.iter().map(|r| r.chars().count()).max().unwrap_or(0);

            for (index, configuration) in rendered.iter().enumerate() {
                match self.annotation(automaton, index) {
                    Some(note) => writeln!(
                        f,
                        "{index:>number_width$}. {configuration:<width$}  {note}"
                    )?,
                    None => writeln!(f, "{index:>number_width$}. {configuration}")?,
                }
            }
        }
        Ok(())
    }
}
