//! Core domain types: skills, pairings, and the connection graph.

pub mod graph;
pub mod pairing;
pub mod skill;

pub use graph::{Connection, SkillGraph, SkillNode, build};
pub use pairing::{
    MemberDirectory, PairingSelection, ResolvedPairing, SelectionSheet, SkillRef, SlotSelection,
};
pub use skill::SkillRecord;
