//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with dynamic
//! suggestion generation based on error context.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
///
/// Uses contextual information to provide more specific suggestions than the
/// default static ones, falling back to the static text when no useful
/// context is present.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::SkillNotFound => suggest_skill_not_found(context),
        ErrorCode::SkillDuplicate => suggest_skill_duplicate(context),
        ErrorCode::FormatUnsupported => suggest_format_unsupported(context),
        ErrorCode::DocumentInvalid => suggest_document_invalid(context),
        ErrorCode::CatalogUnreachable => suggest_catalog_unreachable(context),
        // Fall back to static suggestion for other codes
        _ => code.suggestion().to_string(),
    }
}

fn suggest_skill_not_found(context: Option<&Value>) -> String {
    let skill_id = context
        .and_then(|c| c.get("skill_id"))
        .and_then(Value::as_str);

    match skill_id {
        Some(id) => format!(
            "Skill '{}' is not in the local registry. Try:\n  - `tg skill list` to see known skills\n  - `tg catalog fetch --merge` to pull the remote catalog",
            id
        ),
        None => ErrorCode::SkillNotFound.suggestion().to_string(),
    }
}

fn suggest_skill_duplicate(context: Option<&Value>) -> String {
    let employee = context
        .and_then(|c| c.get("employee_id"))
        .and_then(Value::as_str);
    let expertise = context
        .and_then(|c| c.get("expertise"))
        .and_then(Value::as_str);

    match (employee, expertise) {
        (Some(employee), Some(expertise)) => format!(
            "Employee '{}' already has a '{}' skill with that experience.\nRun `tg skill list --employee {}` to see their existing skills",
            employee, expertise, employee
        ),
        _ => ErrorCode::SkillDuplicate.suggestion().to_string(),
    }
}

fn suggest_format_unsupported(context: Option<&Value>) -> String {
    let path = context.and_then(|c| c.get("path")).and_then(Value::as_str);

    match path {
        Some(path) => format!(
            "'{}' has an unsupported extension. Rename it to .json, .yml, or .yaml",
            path
        ),
        None => ErrorCode::FormatUnsupported.suggestion().to_string(),
    }
}

fn suggest_document_invalid(context: Option<&Value>) -> String {
    let path = context.and_then(|c| c.get("path")).and_then(Value::as_str);

    match path {
        Some(path) => format!(
            "'{}' did not parse. Run `tg inspect {}` for details on what was read",
            path, path
        ),
        None => ErrorCode::DocumentInvalid.suggestion().to_string(),
    }
}

fn suggest_catalog_unreachable(context: Option<&Value>) -> String {
    let url = context.and_then(|c| c.get("url")).and_then(Value::as_str);

    match url {
        Some(url) => format!(
            "Could not reach the catalog at {}\nCheck the URL (config key catalog.url or TG_CATALOG_URL) and your network",
            url
        ),
        None => ErrorCode::CatalogUnreachable.suggestion().to_string(),
    }
}
