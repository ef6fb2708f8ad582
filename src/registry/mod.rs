//! Local skill registry.
//!
//! Single owner of the evolving list of known skills. Keyed by id, with a
//! uniqueness index on `(employee_id, expertise, experience)` so duplicate
//! definitions are rejected at insert time instead of by repeated scans.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::debug;

use crate::core::skill::SkillRecord;
use crate::error::{Result, TgError};

#[derive(Debug, Default)]
pub struct SkillRegistry {
    skills: Vec<SkillRecord>,
    by_id: HashMap<String, usize>,
    identity_index: HashSet<(String, String, String)>,
}

impl SkillRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a skill, rejecting duplicates.
    ///
    /// A duplicate id or a duplicate `(employee_id, expertise, experience)`
    /// triple leaves the registry unchanged.
    pub fn insert(&mut self, skill: SkillRecord) -> Result<()> {
        skill.validate()?;

        if self.by_id.contains_key(&skill.id) {
            return Err(TgError::InvalidSkill(format!(
                "skill id '{}' already registered",
                skill.id
            )));
        }
        if self.identity_index.contains(&skill.identity()) {
            return Err(TgError::DuplicateSkill {
                employee_id: skill.employee_id,
                expertise: skill.expertise,
                experience: skill.experience,
            });
        }

        self.identity_index.insert(skill.identity());
        self.by_id.insert(skill.id.clone(), self.skills.len());
        self.skills.push(skill);
        Ok(())
    }

    /// Merge a batch of records, skipping invalid entries and duplicates.
    ///
    /// Returns the number of records actually added. Used for catalog
    /// merges, where overlap with already-known skills is expected.
    pub fn merge(&mut self, records: Vec<SkillRecord>) -> usize {
        let mut added = 0;
        for record in records {
            match self.insert(record) {
                Ok(()) => added += 1,
                Err(err) => debug!("skipping catalog record: {err}"),
            }
        }
        added
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SkillRecord> {
        self.by_id.get(id).map(|&idx| &self.skills[idx])
    }

    #[must_use]
    pub fn all(&self) -> &[SkillRecord] {
        &self.skills
    }

    #[must_use]
    pub fn by_employee(&self, employee_id: &str) -> Vec<&SkillRecord> {
        self.skills
            .iter()
            .filter(|s| s.employee_id == employee_id)
            .collect()
    }

    /// Case-insensitive expertise substring filter.
    #[must_use]
    pub fn filter_expertise(&self, needle: &str) -> Vec<&SkillRecord> {
        let needle = needle.to_lowercase();
        self.skills
            .iter()
            .filter(|s| s.expertise.to_lowercase().contains(&needle))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Load the registry from a JSON file; a missing file is an empty registry.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }

        let raw = std::fs::read_to_string(path)?;
        let records: Vec<SkillRecord> = serde_json::from_str(&raw).map_err(|err| {
            TgError::Serialization(format!("read registry {}: {err}", path.display()))
        })?;

        let mut registry = Self::new();
        for record in records {
            registry.insert(record)?;
        }
        Ok(registry)
    }

    /// Persist the registry as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.skills)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}
