use thiserror::Error;

/// Errors that can occur during invoice construction or processing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// One or more validation rules failed.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Amount arithmetic overflowed `i64` yen.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "billing_terms.closing_day").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Short rule identifier if applicable (e.g. "TERMS-01").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_rule() {
        let e = ValidationError::with_rule("lines", "at least one line required", "INV-03");
        assert_eq!(e.to_string(), "[INV-03] lines: at least one line required");
    }

    #[test]
    fn display_without_rule() {
        let e = ValidationError::new("buyer", "must not be empty");
        assert_eq!(e.to_string(), "buyer: must not be empty");
    }

    #[test]
    fn validation_error_lists_every_rule() {
        let err = InvoiceError::Validation(vec![
            ValidationError::with_rule("number", "must not be empty", "INV-01"),
            ValidationError::new("lines[0].description", "must not be empty"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: [INV-01] number: must not be empty; lines[0].description: must not be empty"
        );
    }
}
