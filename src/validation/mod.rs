//! Config-driven form validation. Pure functions, no side effects: rules come
//! from the kind's [`KindConfig`](crate::config::KindConfig) and results are a
//! field-keyed message map. An empty map means the draft is valid.

use std::collections::BTreeMap;

use crate::config::config_for;
use crate::domain::ProductDraft;

/// Per-field error messages, keyed by the field's draft name.
pub type ValidationErrors = BTreeMap<&'static str, String>;

/// Checks every required field of the draft's kind. All violations are
/// reported, not just the first. Fields the kind does not define and fields
/// marked optional are never flagged.
pub fn validate(draft: &ProductDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in &config_for(draft.kind).fields {
        if !field.required {
            continue;
        }
        if is_blank(draft.field(field.name)) {
            errors.insert(field.name, format!("{} is required", field.label));
        }
    }
    errors
}

/// Re-validates a single field, for live feedback after a failed submit.
/// `None` when the field is valid, unknown to the kind, or optional.
pub fn validate_field(draft: &ProductDraft, name: &str) -> Option<String> {
    let field = config_for(draft.kind).field(name)?;
    if field.required && is_blank(draft.field(field.name)) {
        Some(format!("{} is required", field.label))
    } else {
        None
    }
}

/// True when the draft would pass [`validate`] with no errors.
pub fn is_valid(draft: &ProductDraft) -> bool {
    validate(draft).is_empty()
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
