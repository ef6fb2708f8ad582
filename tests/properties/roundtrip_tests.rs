use proptest::prelude::*;

use teamgraph::core::graph::{Connection, SkillGraph, SkillNode};

fn arb_connection() -> impl Strategy<Value = Connection> {
    (r"[A-Za-z][A-Za-z0-9 ]{0,16}", r"[A-Za-z][A-Za-z0-9 ]{0,16}")
        .prop_map(|(name, developer)| Connection { name, developer })
}

fn arb_graph() -> impl Strategy<Value = SkillGraph> {
    let node = (
        r"[A-Za-z][A-Za-z0-9 ]{0,16}",
        prop::collection::vec(arb_connection(), 0..4),
    )
        .prop_map(|(name, connected_to)| SkillNode { name, connected_to });

    prop::collection::vec(node, 0..6).prop_map(|skills| SkillGraph { skills })
}

proptest! {
    #[test]
    fn test_graph_json_roundtrip(graph in arb_graph()) {
        let serialized = serde_json::to_string_pretty(&graph).unwrap();
        let deserialized: SkillGraph = serde_json::from_str(&serialized).unwrap();
        prop_assert_eq!(graph, deserialized);
    }

    #[test]
    fn test_graph_yaml_roundtrip(graph in arb_graph()) {
        let serialized = serde_yaml::to_string(&graph).unwrap();
        let deserialized: SkillGraph = serde_yaml::from_str(&serialized).unwrap();
        prop_assert_eq!(graph, deserialized);
    }
}
