//! Validation trait and error type
//!
//! Configuration objects implement [`Validatable`] for the checks that can
//! be made on their fields alone, before anything is read from disk.

use thiserror::Error;

/// Validation error with the offending field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Required field missing: {field} ({message})")]
    Required { field: String, message: String },
}

impl ValidationError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Required {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field the error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidValue { field, .. } | Self::Required { field, .. } => field,
        }
    }
}

/// Trait for types that can be validated
pub trait Validatable {
    /// Validate the instance, returning the first violation found
    fn validate(&self) -> Result<(), ValidationError>;

    /// Check if the instance is valid without returning the error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Window {
        lo: u32,
        hi: u32,
    }

    impl Validatable for Window {
        fn validate(&self) -> Result<(), ValidationError> {
            if self.lo > self.hi {
                return Err(ValidationError::invalid("lo", "must not exceed hi"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_validatable_default_is_valid() {
        assert!(Window { lo: 1, hi: 2 }.is_valid());
        assert!(!Window { lo: 3, hi: 2 }.is_valid());
    }

    #[test]
    fn test_error_field_and_message() {
        let err = ValidationError::required("KEY", "template needs a key");
        assert_eq!(err.field(), "KEY");
        assert_eq!(
            err.to_string(),
            "Required field missing: KEY (template needs a key)"
        );
    }
}
