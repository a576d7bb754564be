use thiserror::Error;

/// Errors that can occur when storing typed values or building products
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeKitError {
    /// A value's concrete type doesn't match the type its token denotes
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// No value is stored for the requested type
    #[error("no value stored for type {0}")]
    NotFound(&'static str),
    /// A builder was consumed before a required attribute was supplied
    #[error("missing required field `{field}`")]
    MissingRequiredField { field: &'static str },
    /// Attributes are valid on their own but break a rule together
    #[error("invariant violated: {rule} ({detail})")]
    InvariantViolation { rule: &'static str, detail: String },
}

impl TypeKitError {
    pub(crate) fn invariant(rule: &'static str, detail: impl Into<String>) -> Self {
        TypeKitError::InvariantViolation {
            rule,
            detail: detail.into(),
        }
    }
}
