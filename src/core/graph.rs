//! The skill connection graph and its builder.
//!
//! `build` is a pure fold: it seeds a node table from an optional existing
//! graph, folds one edge per active pairing into it, and returns the table
//! in first-seen order. It never mutates the existing graph and never fails;
//! malformed pairings were already dropped during sheet resolution.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

use crate::core::pairing::{MemberDirectory, ResolvedPairing};

/// A directed link from a contributing member's skill to the skill it was
/// paired against, annotated with the contributing member's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub name: String,
    pub developer: String,
}

/// A graph vertex keyed by an expertise label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillNode {
    pub name: String,
    #[serde(rename = "connectedTo", default)]
    pub connected_to: Vec<Connection>,
}

impl SkillNode {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connected_to: Vec::new(),
        }
    }
}

/// The exported document shape: `{"skills": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGraph {
    #[serde(default)]
    pub skills: Vec<SkillNode>,
}

impl SkillGraph {
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&SkillNode> {
        self.skills.iter().find(|node| node.name == name)
    }

    /// Total edge count across all nodes.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.skills.iter().map(|node| node.connected_to.len()).sum()
    }
}

/// Merge an optional existing graph with the active pairing selections.
///
/// For each pairing, a node is ensured for the target expertise and an edge
/// `{ name: source expertise, developer: resolved source member name }` is
/// appended to it unless an identical `(name, developer)` pair is already
/// present. Node identity is the expertise string, so repeated expertise
/// labels collapse into one node. Idempotent given the same inputs.
#[must_use]
pub fn build(
    existing: Option<&SkillGraph>,
    pairings: &[ResolvedPairing],
    names: &MemberDirectory,
) -> SkillGraph {
    let mut order: Vec<String> = Vec::new();
    let mut nodes: HashMap<String, SkillNode> = HashMap::new();

    if let Some(graph) = existing {
        for node in &graph.skills {
            match nodes.entry(node.name.clone()) {
                Entry::Vacant(slot) => {
                    order.push(node.name.clone());
                    slot.insert(node.clone());
                }
                // Duplicate node names in an upload merge into the first
                // occurrence, suppressing repeated edges.
                Entry::Occupied(slot) => {
                    let merged = slot.into_mut();
                    for connection in &node.connected_to {
                        if !merged.connected_to.contains(connection) {
                            merged.connected_to.push(connection.clone());
                        }
                    }
                }
            }
        }
    }

    for pairing in pairings {
        let node = match nodes.entry(pairing.target_expertise.clone()) {
            Entry::Vacant(slot) => {
                order.push(pairing.target_expertise.clone());
                slot.insert(SkillNode::new(&pairing.target_expertise))
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };

        let connection = Connection {
            name: pairing.source_expertise.clone(),
            developer: names.resolve(&pairing.source_member),
        };
        if !node.connected_to.contains(&connection) {
            node.connected_to.push(connection);
        }
    }

    SkillGraph {
        skills: order
            .into_iter()
            .filter_map(|name| nodes.remove(&name))
            .collect(),
    }
}
