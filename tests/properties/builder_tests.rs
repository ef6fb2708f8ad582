use proptest::prelude::*;

use teamgraph::core::graph::{SkillGraph, SkillNode, build};
use teamgraph::core::pairing::{MemberDirectory, ResolvedPairing};

// Small label pools so node and edge collisions actually happen.
fn arb_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Backend".to_string()),
        Just("Frontend".to_string()),
        Just("Ops".to_string()),
        Just("Data".to_string()),
    ]
}

fn arb_member() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("devA".to_string()),
        Just("devB".to_string()),
        Just("devC".to_string()),
    ]
}

fn arb_pairing(index: usize) -> impl Strategy<Value = ResolvedPairing> {
    (arb_member(), arb_label(), arb_member(), arb_label()).prop_map(
        move |(source_member, source_expertise, target_member, target_expertise)| {
            ResolvedPairing {
                pairing_id: format!("P{index}"),
                source_member,
                source_expertise,
                target_member,
                target_expertise,
            }
        },
    )
}

fn arb_pairings() -> impl Strategy<Value = Vec<ResolvedPairing>> {
    prop::collection::vec(any::<u8>(), 0..8).prop_flat_map(|seeds| {
        seeds
            .into_iter()
            .enumerate()
            .map(|(i, _)| arb_pairing(i))
            .collect::<Vec<_>>()
    })
}

fn arb_existing() -> impl Strategy<Value = SkillGraph> {
    prop::collection::vec(arb_label(), 0..3).prop_map(|names| SkillGraph {
        skills: names.into_iter().map(SkillNode::new).collect(),
    })
}

fn directory() -> MemberDirectory {
    let mut directory = MemberDirectory::new();
    directory.insert("devA", "Alice");
    directory.insert("devB", "Bob");
    directory
}

proptest! {
    #[test]
    fn test_build_never_mutates_existing(existing in arb_existing(), pairings in arb_pairings()) {
        let before = existing.clone();
        let _ = build(Some(&existing), &pairings, &directory());
        prop_assert_eq!(existing, before);
    }

    #[test]
    fn test_build_is_deterministic(existing in arb_existing(), pairings in arb_pairings()) {
        let first = build(Some(&existing), &pairings, &directory());
        let second = build(Some(&existing), &pairings, &directory());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_rebuilding_from_own_output_is_idempotent(pairings in arb_pairings()) {
        let first = build(None, &pairings, &directory());
        let second = build(Some(&first), &pairings, &directory());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_no_duplicate_edges(existing in arb_existing(), pairings in arb_pairings()) {
        let graph = build(Some(&existing), &pairings, &directory());
        for node in &graph.skills {
            for (i, connection) in node.connected_to.iter().enumerate() {
                prop_assert!(!node.connected_to[..i].contains(connection));
            }
        }
    }

    #[test]
    fn test_node_names_are_unique(existing in arb_existing(), pairings in arb_pairings()) {
        let graph = build(Some(&existing), &pairings, &directory());
        for (i, node) in graph.skills.iter().enumerate() {
            prop_assert!(graph.skills[..i].iter().all(|other| other.name != node.name));
        }
    }
}
