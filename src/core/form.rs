use crate::config::{config_for, KindConfig};
use crate::domain::{Product, ProductDraft, ProductKind};
use crate::validation::{validate, validate_field, ValidationErrors};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft validated; the finished product is handed to the caller and
    /// the controller has already reset to a fresh draft of the same kind.
    Accepted(Product),
    /// Validation failed; the draft is untouched so the user can correct it.
    Rejected(ValidationErrors),
}

/// Drives one product form: holds the draft being edited plus the errors from
/// the last failed submit. Validation runs on submit; a field that already
/// carries an error is re-checked on every edit so its message clears as soon
/// as the user fixes it.
#[derive(Debug, Clone)]
pub struct FormController {
    kind: ProductKind,
    draft: ProductDraft,
    errors: ValidationErrors,
}

impl FormController {
    pub fn new(kind: ProductKind) -> Self {
        Self {
            kind,
            draft: ProductDraft::new(kind),
            errors: ValidationErrors::new(),
        }
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Configuration for the kind currently being edited.
    pub fn config(&self) -> &'static KindConfig {
        config_for(self.kind)
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Switches the form to another kind. The draft is rebuilt empty and all
    /// errors are cleared; field sets differ structurally across kinds, so
    /// entered values never carry over.
    pub fn select_kind(&mut self, kind: ProductKind) {
        self.kind = kind;
        self.draft = ProductDraft::new(kind);
        self.errors.clear();
    }

    /// Edits one field in place. Unknown field names are ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if !self.draft.set_field(name, value) {
            return;
        }
        if let Some(key) = self.errored_key(name) {
            match validate_field(&self.draft, key) {
                Some(message) => {
                    self.errors.insert(key, message);
                }
                None => {
                    self.errors.remove(key);
                }
            }
        }
    }

    /// Validates the draft. On success the finished product is returned and
    /// the form resets to empty defaults for the same kind; on failure the
    /// errors are retained for display and the draft is left as entered.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return SubmitOutcome::Rejected(errors);
        }
        let product = self.draft.to_product();
        self.draft = ProductDraft::new(self.kind);
        self.errors.clear();
        SubmitOutcome::Accepted(product)
    }

    // Errors are keyed by 'static config names; map the caller's borrowed
    // name back to the stored key before touching the map.
    fn errored_key(&self, name: &str) -> Option<&'static str> {
        self.errors.keys().copied().find(|key| *key == name)
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(ProductKind::Soda)
    }
}
