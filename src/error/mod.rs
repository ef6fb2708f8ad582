//! Error handling for teamgraph.
//!
//! This module provides:
//! - [`TgError`]: The main error enum for all tg operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context
//! - Suggestion helpers for context-aware error recovery hints

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// Main error type for teamgraph operations.
#[derive(Error, Debug)]
pub enum TgError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Skill not found: {0}")]
    SkillNotFound(String),

    #[error("Invalid skill: {0}")]
    InvalidSkill(String),

    #[error("Duplicate skill for employee {employee_id}: {expertise} ({experience})")]
    DuplicateSkill {
        employee_id: String,
        expertise: String,
        experience: String,
    },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid file format: {path}: {reason}")]
    InvalidDocument { path: String, reason: String },

    #[error("Skill catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Skill catalog returned unexpected data: {0}")]
    CatalogDecode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl TgError {
    /// Get the error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Yaml(_) | Self::Serialization(_) => {
                ErrorCode::SerializationError
            }
            Self::Http(_) => ErrorCode::CatalogUnreachable,
            Self::SkillNotFound(_) => ErrorCode::SkillNotFound,
            Self::InvalidSkill(_) => ErrorCode::SkillInvalid,
            Self::DuplicateSkill { .. } => ErrorCode::SkillDuplicate,
            Self::UnsupportedFormat(_) => ErrorCode::FormatUnsupported,
            Self::InvalidDocument { .. } => ErrorCode::DocumentInvalid,
            Self::CatalogUnavailable(_) => ErrorCode::CatalogUnreachable,
            Self::CatalogDecode(_) => ErrorCode::CatalogDecodeFailed,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::NotFound(_) => ErrorCode::NotFound,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::SkillNotFound(id) => Some(serde_json::json!({ "skill_id": id })),
            Self::InvalidSkill(reason) => Some(serde_json::json!({ "reason": reason })),
            Self::DuplicateSkill {
                employee_id,
                expertise,
                experience,
            } => Some(serde_json::json!({
                "employee_id": employee_id,
                "expertise": expertise,
                "experience": experience,
            })),
            Self::UnsupportedFormat(path) => Some(serde_json::json!({ "path": path })),
            Self::InvalidDocument { path, reason } => {
                Some(serde_json::json!({ "path": path, "reason": reason }))
            }
            Self::CatalogUnavailable(url) => Some(serde_json::json!({ "url": url })),
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_tg_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
///
/// This type is designed for machine mode output where scripts and agents
/// need to parse errors and take appropriate action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "SKILL_DUPLICATE")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 103)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "skill", "config", "network")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message,
        }
    }

    /// Create a structured error from a `TgError`.
    #[must_use]
    pub fn from_tg_error(err: &TgError) -> Self {
        let code = err.code();
        let context = err.context();
        let message = err.to_string();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message,
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        // Regenerate suggestion with new context
        self.suggestion = suggest_for_error(self.code, self.context.as_ref());
        self
    }

    /// Set a custom suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<TgError> for StructuredError {
    fn from(err: TgError) -> Self {
        Self::from_tg_error(&err)
    }
}

impl From<&TgError> for StructuredError {
    fn from(err: &TgError) -> Self {
        Self::from_tg_error(err)
    }
}

/// Result type alias using `TgError`.
pub type Result<T> = std::result::Result<T, TgError>;
