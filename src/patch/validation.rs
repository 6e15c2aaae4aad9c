//! Value validation for numeric session settings.

use crate::patch::PatchError;

/// Check that `value` is a strictly positive integer written with ASCII
/// digits only and fitting in a signed 32-bit integer.
///
/// Signs, whitespace and decimal points are rejected.
pub fn validate_positive_numeric(path: &str, value: &str) -> Result<(), PatchError> {
    let invalid = || PatchError::InvalidNumericValue {
        path: path.to_string(),
        value: value.to_string(),
    };

    if value.trim().is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match value.parse::<i32>() {
        Ok(number) if number > 0 => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "/idleSessionTimeoutPeriod";

    #[test]
    fn test_accepts_positive_integers() {
        for value in ["1", "15", "007", "2147483647"] {
            assert!(validate_positive_numeric(PATH, value).is_ok(), "{}", value);
        }
    }

    #[test]
    fn test_rejects_invalid_values() {
        for value in [
            "", "   ", "0", "000", "-5", "+5", "1.5", " 5", "5 ", "abc", "2147483648", "١٢",
        ] {
            let result = validate_positive_numeric(PATH, value);
            assert!(
                matches!(result, Err(PatchError::InvalidNumericValue { .. })),
                "{:?} should be rejected",
                value
            );
        }
    }
}
