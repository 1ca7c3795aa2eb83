//! System configurations and the arena that records their lineage.

use crate::core::Configuration;
use serde::{Deserialize, Serialize};

/// Index of a system configuration in its [`History`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConfigId(pub usize);

/// Classification of a system configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigTag {
    /// Not yet classified; still a candidate for expansion.
    #[default]
    General,
    /// Every component accepts.
    Accepted,
    /// Some component has no move.
    Rejected,
}

/// Snapshot of every component at one point of the search.
///
/// `previous` points at the configuration this one was expanded from;
/// the initial configuration has none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemConfiguration {
    components: Vec<Configuration>,
    previous: Option<ConfigId>,
    tag: ConfigTag,
}

impl SystemConfiguration {
    pub fn initial(components: Vec<Configuration>) -> Self {
        Self {
            components,
            previous: None,
            tag: ConfigTag::General,
        }
    }

    pub fn successor(components: Vec<Configuration>, previous: ConfigId) -> Self {
        Self {
            components,
            previous: Some(previous),
            tag: ConfigTag::General,
        }
    }

    pub fn components(&self) -> &[Configuration] {
        &self.components
    }

    pub fn previous(&self) -> Option<ConfigId> {
        self.previous
    }

    pub fn tag(&self) -> ConfigTag {
        self.tag
    }

    /// Total number of input symbols not yet read by any component.
    pub fn unread_input(&self) -> usize {
        self.components.iter().map(|c| c.input().len()).sum()
    }

    pub(crate) fn relink(&mut self, previous: Option<ConfigId>) {
        self.previous = previous;
    }
}

/// Arena of every system configuration created during one search.
///
/// Configurations are stored in creation order and refer to their
/// predecessor by [`ConfigId`], so following `previous` links always
/// moves towards the initial configuration.
#[derive(Clone, Debug, Default)]
pub struct History {
    nodes: Vec<SystemConfiguration>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a configuration and return its id.
    pub fn record(&mut self, configuration: SystemConfiguration) -> ConfigId {
        debug_assert!(configuration
            .previous
            .is_none_or(|ConfigId(p)| p < self.nodes.len()));
        self.nodes.push(configuration);
        ConfigId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: ConfigId) -> &SystemConfiguration {
        &self.nodes[id.0]
    }

    /// Set the tag of a configuration that has not been classified yet.
    pub fn classify(&mut self, id: ConfigId, tag: ConfigTag) {
        let node = &mut self.nodes[id.0];
        debug_assert_eq!(node.tag, ConfigTag::General, "configuration classified twice");
        node.tag = tag;
    }

    /// Ids from the initial configuration up to and including `id`.
    pub fn lineage(&self, id: ConfigId) -> Vec<ConfigId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(previous) = self.get(current).previous {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
