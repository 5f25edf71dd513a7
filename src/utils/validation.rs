use crate::utils::error::{Result, SequenceError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SequenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SequenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SequenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("score_key", "score").is_ok());
        assert!(validate_non_empty_string("score_key", "").is_err());
        assert!(validate_non_empty_string("score_key", "   ").is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("threshold", 10.0).is_ok());
        assert!(validate_finite("threshold", f64::NAN).is_err());
        assert!(validate_finite("threshold", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("limit", 5, 1).is_ok());
        assert!(validate_positive_number("limit", 0, 1).is_err());
    }
}
