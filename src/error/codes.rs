//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Skill errors
//! - 3xx: Config errors
//! - 4xx: Input file errors
//! - 5xx: Network errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine mode output.
///
/// Each variant maps to a numeric code (e.g., `SkillDuplicate` -> E103).
/// Codes are grouped by category for easy identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Skill errors (1xx)
    // ========================================
    /// E101: Requested skill was not found in the registry
    SkillNotFound,
    /// E102: Skill record exists but has invalid fields
    SkillInvalid,
    /// E103: Skill with the same (employee, expertise, experience) already exists
    SkillDuplicate,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file not found
    ConfigNotFound,
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Input file errors (4xx)
    // ========================================
    /// E401: File extension is neither .json nor .yml/.yaml
    FormatUnsupported,
    /// E402: File content failed to parse as JSON or YAML
    DocumentInvalid,

    // ========================================
    // Network errors (5xx)
    // ========================================
    /// E501: Cannot reach the skill catalog
    CatalogUnreachable,
    /// E502: Catalog response did not decode as a skill list
    CatalogDecodeFailed,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Failed to read from local storage
    StorageReadError,
    /// E602: Failed to write to local storage
    StorageWriteError,
    /// E605: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Unexpected internal error
    InternalError,
    /// E905: Generic not found (catch-all)
    NotFound,
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `SkillDuplicate` -> 103).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            // Skill errors (1xx)
            Self::SkillNotFound => 101,
            Self::SkillInvalid => 102,
            Self::SkillDuplicate => 103,

            // Config errors (3xx)
            Self::ConfigNotFound => 301,
            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,

            // Input file errors (4xx)
            Self::FormatUnsupported => 401,
            Self::DocumentInvalid => 402,

            // Network errors (5xx)
            Self::CatalogUnreachable => 501,
            Self::CatalogDecodeFailed => 502,

            // Storage errors (6xx)
            Self::StorageReadError => 601,
            Self::StorageWriteError => 602,
            Self::SerializationError => 605,

            // Internal errors (9xx)
            Self::InternalError => 901,
            Self::NotFound => 905,
            Self::IoError => 906,
        }
    }

    /// Get the static recovery suggestion for this code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::SkillNotFound => "Run `tg skill list` to see known skills, or `tg catalog fetch --merge` to pull the catalog",
            Self::SkillInvalid => "Check that expertise and experience are non-empty",
            Self::SkillDuplicate => "A skill with the same employee, expertise, and experience already exists; change one of the three fields",
            Self::ConfigNotFound => "Create a config file or pass --config with an explicit path",
            Self::ConfigInvalid => "Fix the TOML syntax in the config file",
            Self::ConfigMissingRequired => "Set the missing key in config.toml or via its TG_* environment variable",
            Self::FormatUnsupported => "Use a .json, .yml, or .yaml file",
            Self::DocumentInvalid => "The file is not valid JSON or YAML; check its contents",
            Self::CatalogUnreachable => "Check the catalog URL and your network connection",
            Self::CatalogDecodeFailed => "The catalog endpoint did not return a flat list of skill records",
            Self::StorageReadError => "Check file permissions for the tg data directory",
            Self::StorageWriteError => "Check file permissions and free space for the tg data directory",
            Self::SerializationError => "This is likely a bug; re-run with -vv and report the output",
            Self::InternalError => "This is likely a bug; re-run with -vv and report the output",
            Self::NotFound => "Check the identifier and try again",
            Self::IoError => "Check file paths and permissions",
        }
    }

    /// Get the category name for this code.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::SkillNotFound | Self::SkillInvalid | Self::SkillDuplicate => "skill",
            Self::ConfigNotFound | Self::ConfigInvalid | Self::ConfigMissingRequired => "config",
            Self::FormatUnsupported | Self::DocumentInvalid => "input",
            Self::CatalogUnreachable | Self::CatalogDecodeFailed => "network",
            Self::StorageReadError | Self::StorageWriteError | Self::SerializationError => {
                "storage"
            }
            Self::InternalError | Self::NotFound | Self::IoError => "internal",
        }
    }

    /// Whether the user can plausibly recover from this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InternalError | Self::SerializationError)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.numeric())
    }
}
