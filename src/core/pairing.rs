//! Pairing selections and the selection sheet.
//!
//! A selection sheet is the on-disk form of the user's in-progress work:
//! a member directory plus one pairing per row. Each pairing carries an
//! ordered slot list decided when the pairing was created; source/target
//! are taken from explicit `source`/`target` fields when present, otherwise
//! from the declared slot order. Map-key iteration order is never consulted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::SkillRegistry;

/// Lookup from member id to display name.
///
/// Resolution is total: an unmapped id resolves to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberDirectory(HashMap<String, String>);

impl MemberDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, member_id: impl Into<String>, name: impl Into<String>) {
        self.0.insert(member_id.into(), name.into());
    }

    /// Resolve a member id to its display name, falling back to the raw id.
    #[must_use]
    pub fn resolve(&self, member_id: &str) -> String {
        self.0
            .get(member_id)
            .cloned()
            .unwrap_or_else(|| member_id.to_string())
    }
}

/// A per-slot skill choice: either an inline expertise label or a reference
/// to a registry/catalog skill id. Both shapes occur in real sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillRef {
    Inline {
        expertise: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        experience: Option<String>,
    },
    Label(String),
}

/// One member slot within a pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    pub member: String,
    /// `None` while the user has not picked anything for this slot yet.
    #[serde(default)]
    pub skill: Option<SkillRef>,
}

/// A checkbox-gated pairing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingSelection {
    pub id: String,
    #[serde(default)]
    pub checked: bool,
    /// Explicit source member id; overrides slot order when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Explicit target member id; overrides slot order when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default)]
    pub slots: Vec<SlotSelection>,
}

/// The full selection store, as read from a JSON/YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSheet {
    #[serde(default)]
    pub members: MemberDirectory,
    #[serde(default)]
    pub pairings: Vec<PairingSelection>,
}

/// An edge-producing event: one active pairing with both slots resolved to
/// expertise labels. Input to the graph builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPairing {
    pub pairing_id: String,
    pub source_member: String,
    pub source_expertise: String,
    pub target_member: String,
    pub target_expertise: String,
}

impl SelectionSheet {
    /// Resolve the sheet into the ordered list of edge-producing events.
    ///
    /// Pairings that are unchecked or have a filled-slot count other than
    /// two are dropped silently: they represent normal in-progress editing,
    /// not errors.
    #[must_use]
    pub fn resolve(&self, registry: &SkillRegistry) -> Vec<ResolvedPairing> {
        self.pairings
            .iter()
            .filter_map(|pairing| resolve_pairing(pairing, registry))
            .collect()
    }
}

fn resolve_pairing(
    pairing: &PairingSelection,
    registry: &SkillRegistry,
) -> Option<ResolvedPairing> {
    if !pairing.checked {
        return None;
    }

    let filled: Vec<(&str, String)> = pairing
        .slots
        .iter()
        .filter_map(|slot| {
            slot.skill
                .as_ref()
                .map(|skill| (slot.member.as_str(), resolve_skill_ref(skill, registry)))
        })
        .collect();

    if filled.len() != 2 {
        debug!(
            pairing = %pairing.id,
            filled = filled.len(),
            "skipping pairing without exactly two filled slots"
        );
        return None;
    }

    let (mut source_idx, mut target_idx) = (0, 1);
    if let (Some(source), Some(target)) = (&pairing.source, &pairing.target) {
        let by_member = |id: &str| filled.iter().position(|(member, _)| *member == id);
        match (by_member(source), by_member(target)) {
            (Some(s), Some(t)) if s != t => {
                source_idx = s;
                target_idx = t;
            }
            _ => {
                debug!(
                    pairing = %pairing.id,
                    "explicit source/target do not match filled slots; using slot order"
                );
            }
        }
    }

    Some(ResolvedPairing {
        pairing_id: pairing.id.clone(),
        source_member: filled[source_idx].0.to_string(),
        source_expertise: filled[source_idx].1.clone(),
        target_member: filled[target_idx].0.to_string(),
        target_expertise: filled[target_idx].1.clone(),
    })
}

fn resolve_skill_ref(skill: &SkillRef, registry: &SkillRegistry) -> String {
    match skill {
        SkillRef::Inline { expertise, .. } => expertise.clone(),
        // A bare label is a skill id when the registry knows it, otherwise
        // it is taken as an expertise literal.
        SkillRef::Label(label) => registry
            .get(label)
            .map_or_else(|| label.clone(), |record| record.expertise.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::skill::SkillRecord;

    fn slot(member: &str, expertise: Option<&str>) -> SlotSelection {
        SlotSelection {
            member: member.to_string(),
            skill: expertise.map(|e| SkillRef::Label(e.to_string())),
        }
    }

    fn checked_pairing(id: &str, slots: Vec<SlotSelection>) -> PairingSelection {
        PairingSelection {
            id: id.to_string(),
            checked: true,
            source: None,
            target: None,
            slots,
        }
    }

    #[test]
    fn unchecked_pairing_is_dropped() {
        let sheet = SelectionSheet {
            members: MemberDirectory::new(),
            pairings: vec![PairingSelection {
                checked: false,
                ..checked_pairing(
                    "P0",
                    vec![slot("101", Some("Go")), slot("102", Some("Rust"))],
                )
            }],
        };
        assert!(sheet.resolve(&SkillRegistry::new()).is_empty());
    }

    #[test]
    fn missing_slot_selection_is_dropped() {
        let sheet = SelectionSheet {
            members: MemberDirectory::new(),
            pairings: vec![checked_pairing(
                "P0",
                vec![slot("101", Some("Go")), slot("102", None)],
            )],
        };
        assert!(sheet.resolve(&SkillRegistry::new()).is_empty());
    }

    #[test]
    fn three_filled_slots_is_dropped() {
        let sheet = SelectionSheet {
            members: MemberDirectory::new(),
            pairings: vec![checked_pairing(
                "P0",
                vec![
                    slot("101", Some("Go")),
                    slot("102", Some("Rust")),
                    slot("103", Some("C")),
                ],
            )],
        };
        assert!(sheet.resolve(&SkillRegistry::new()).is_empty());
    }

    #[test]
    fn slot_order_decides_source_and_target() {
        let sheet = SelectionSheet {
            members: MemberDirectory::new(),
            pairings: vec![checked_pairing(
                "P0",
                vec![slot("101", Some("Frontend")), slot("102", Some("Backend"))],
            )],
        };
        let resolved = sheet.resolve(&SkillRegistry::new());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].source_member, "101");
        assert_eq!(resolved[0].source_expertise, "Frontend");
        assert_eq!(resolved[0].target_expertise, "Backend");
    }

    #[test]
    fn explicit_source_target_override_slot_order() {
        let mut pairing = checked_pairing(
            "P0",
            vec![slot("101", Some("Frontend")), slot("102", Some("Backend"))],
        );
        pairing.source = Some("102".to_string());
        pairing.target = Some("101".to_string());

        let sheet = SelectionSheet {
            members: MemberDirectory::new(),
            pairings: vec![pairing],
        };
        let resolved = sheet.resolve(&SkillRegistry::new());
        assert_eq!(resolved[0].source_member, "102");
        assert_eq!(resolved[0].source_expertise, "Backend");
        assert_eq!(resolved[0].target_member, "101");
    }

    #[test]
    fn label_resolves_through_registry() {
        let mut registry = SkillRegistry::new();
        registry
            .insert(SkillRecord {
                id: "sk-1".to_string(),
                employee_id: "101".to_string(),
                expertise: "Go".to_string(),
                experience: "2 years".to_string(),
            })
            .unwrap();

        let sheet = SelectionSheet {
            members: MemberDirectory::new(),
            pairings: vec![checked_pairing(
                "P0",
                vec![slot("101", Some("sk-1")), slot("102", Some("Backend"))],
            )],
        };
        let resolved = sheet.resolve(&registry);
        assert_eq!(resolved[0].source_expertise, "Go");
        assert_eq!(resolved[0].target_expertise, "Backend");
    }

    #[test]
    fn inline_skill_ref_carries_expertise() {
        let sheet = SelectionSheet {
            members: MemberDirectory::new(),
            pairings: vec![checked_pairing(
                "P0",
                vec![
                    SlotSelection {
                        member: "101".to_string(),
                        skill: Some(SkillRef::Inline {
                            expertise: "Frontend".to_string(),
                            experience: Some("2 years".to_string()),
                        }),
                    },
                    slot("102", Some("Backend")),
                ],
            )],
        };
        let resolved = sheet.resolve(&SkillRegistry::new());
        assert_eq!(resolved[0].source_expertise, "Frontend");
    }

    #[test]
    fn member_directory_falls_back_to_raw_id() {
        let mut directory = MemberDirectory::new();
        directory.insert("101", "Alice");
        assert_eq!(directory.resolve("101"), "Alice");
        assert_eq!(directory.resolve("999"), "999");
    }

    #[test]
    fn sheet_parses_from_yaml() {
        let raw = r#"
members:
  "101": Alice
pairings:
  - id: P0
    checked: true
    slots:
      - member: "101"
        skill: Frontend
      - member: "102"
        skill:
          expertise: Backend
"#;
        let sheet: SelectionSheet = serde_yaml::from_str(raw).unwrap();
        assert_eq!(sheet.pairings.len(), 1);
        assert_eq!(sheet.members.resolve("101"), "Alice");
        let resolved = sheet.resolve(&SkillRegistry::new());
        assert_eq!(resolved[0].target_expertise, "Backend");
    }
}
