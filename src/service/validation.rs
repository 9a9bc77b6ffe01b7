//! Request validation from per-field length rules.

use crate::error::AppError;

/// Length bounds for a text field, counted in characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldRule {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

/// Implemented by request bodies that must be checked before reaching storage.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub struct RequestValidator;

impl RequestValidator {
    pub fn validate_field(field: &str, value: &str, rule: &FieldRule) -> Result<(), AppError> {
        let len = value.chars().count();
        if let Some(min) = rule.min_length {
            if len < min {
                if min == 1 {
                    return Err(AppError::Validation(format!("{} must not be empty", field)));
                }
                return Err(AppError::Validation(format!(
                    "{} must be at least {} characters",
                    field, min
                )));
            }
        }
        if let Some(max) = rule.max_length {
            if len > max {
                return Err(AppError::Validation(format!(
                    "{} must be at most {} characters",
                    field, max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE: FieldRule = FieldRule {
        min_length: Some(1),
        max_length: Some(5),
    };

    #[test]
    fn within_bounds_passes() {
        RequestValidator::validate_field("title", "abc", &RULE).unwrap();
        RequestValidator::validate_field("title", "a", &RULE).unwrap();
        RequestValidator::validate_field("title", "abcde", &RULE).unwrap();
    }

    #[test]
    fn empty_is_rejected() {
        let err = RequestValidator::validate_field("title", "", &RULE).unwrap_err();
        assert_eq!(err.to_string(), "title must not be empty");
    }

    #[test]
    fn too_long_is_rejected() {
        let err = RequestValidator::validate_field("title", "abcdef", &RULE).unwrap_err();
        assert_eq!(err.to_string(), "title must be at most 5 characters");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // five characters, fifteen bytes
        RequestValidator::validate_field("title", "牛奶和鸡蛋", &RULE).unwrap();
    }

    #[test]
    fn larger_minimum_reports_bound() {
        let rule = FieldRule {
            min_length: Some(3),
            max_length: None,
        };
        let err = RequestValidator::validate_field("name", "ab", &rule).unwrap_err();
        assert_eq!(err.to_string(), "name must be at least 3 characters");
    }
}
