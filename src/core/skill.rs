//! Skill records as served by the catalog and stored in the registry.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{Result, TgError};

/// A single skill entry.
///
/// Identity is the `id`; uniqueness of `(employee_id, expertise, experience)`
/// is enforced by the registry at insert time. The wire format is camelCase
/// to match the catalog resource, and `id` accepts either a string or a
/// number since both shapes occur in uploaded data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub employee_id: String,
    pub expertise: String,
    pub experience: String,
}

impl SkillRecord {
    /// Create a new locally-defined skill with a fresh id.
    #[must_use]
    pub fn new(
        employee_id: impl Into<String>,
        expertise: impl Into<String>,
        experience: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.into(),
            expertise: expertise.into(),
            experience: experience.into(),
        }
    }

    /// Validate required fields.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(TgError::InvalidSkill("id must not be empty".to_string()));
        }
        if self.employee_id.trim().is_empty() {
            return Err(TgError::InvalidSkill(
                "employee id must not be empty".to_string(),
            ));
        }
        if self.expertise.trim().is_empty() {
            return Err(TgError::InvalidSkill(
                "expertise must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The uniqueness triple enforced by the registry.
    #[must_use]
    pub fn identity(&self) -> (String, String, String) {
        (
            self.employee_id.clone(),
            self.expertise.clone(),
            self.experience.clone(),
        )
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_skill_gets_unique_ids() {
        let a = SkillRecord::new("101", "Go", "2 years");
        let b = SkillRecord::new("101", "Go", "2 years");
        assert_ne!(a.id, b.id);
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn deserializes_numeric_id() {
        let record: SkillRecord = serde_json::from_str(
            r#"{"id": 7, "employeeId": "101", "expertise": "Go", "experience": "2 years"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.employee_id, "101");
    }

    #[test]
    fn deserializes_string_id() {
        let record: SkillRecord = serde_json::from_str(
            r#"{"id": "sk-1", "employeeId": "101", "expertise": "Go", "experience": "2 years"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "sk-1");
    }

    #[test]
    fn validate_rejects_blank_expertise() {
        let mut record = SkillRecord::new("101", "Go", "2 years");
        record.expertise = "  ".to_string();
        assert!(record.validate().is_err());
    }
}
