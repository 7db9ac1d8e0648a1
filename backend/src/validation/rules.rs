//! Field rules shared by the scheme and step guards.
//!
//! Rules take the raw JSON value so that an absent field, a field of the
//! wrong type and a blank string can all be told apart if needed.

use serde_json::Value;
use validator::ValidationError;

/// Returns the raw text of a string field that is not blank once trimmed.
fn non_blank_string<'a>(
    value: Option<&'a Value>,
    code: &'static str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.as_str()),
        _ => Err(ValidationError::new(code)),
    }
}

/// Validates a scheme name.
///
/// Requirements:
/// - Present and a JSON string
/// - Not empty after trimming
///
/// The untrimmed text is returned.
pub fn validate_scheme_name(value: Option<&Value>) -> Result<&str, ValidationError> {
    non_blank_string(value, "scheme_name_invalid")
}

/// Validates step instructions with the same requirements as a scheme name.
pub fn validate_instructions(value: Option<&Value>) -> Result<&str, ValidationError> {
    non_blank_string(value, "instructions_invalid")
}

/// Validates a step number.
///
/// Requirements:
/// - A JSON number (numeric strings are rejected)
/// - Integral, so `3.0` is accepted as 3 but `2.5` is not
/// - At least 1 and within the store's 32-bit column range
pub fn validate_step_number(value: Option<&Value>) -> Result<i32, ValidationError> {
    let Some(Value::Number(number)) = value else {
        return Err(ValidationError::new("step_number_not_numeric"));
    };

    let integral = match number.as_i64() {
        Some(int) => Some(int),
        None => number
            .as_f64()
            .filter(|float| float.is_finite() && float.fract() == 0.0)
            .filter(|float| *float >= i64::MIN as f64 && *float <= i64::MAX as f64)
            .map(|float| float as i64),
    };

    let Some(int) = integral else {
        return Err(ValidationError::new("step_number_not_integer"));
    };
    if int < 1 {
        return Err(ValidationError::new("step_number_below_one"));
    }
    i32::try_from(int).map_err(|_| ValidationError::new("step_number_out_of_range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scheme_name_rejects_absent() {
        assert!(validate_scheme_name(None).is_err());
    }

    #[test]
    fn scheme_name_rejects_blank_and_non_string() {
        for value in [json!(""), json!("   "), json!(null), json!(12), json!(["Pasta"])] {
            assert!(
                validate_scheme_name(Some(&value)).is_err(),
                "expected {value} to be rejected"
            );
        }
    }

    #[test]
    fn scheme_name_returns_untrimmed_text() {
        let value = json!("  Pasta ");
        assert_eq!(validate_scheme_name(Some(&value)).unwrap(), "  Pasta ");
    }

    #[test]
    fn instructions_reject_whitespace() {
        let value = json!("\t\n");
        let err = validate_instructions(Some(&value)).unwrap_err();
        assert_eq!(err.code, "instructions_invalid");
    }

    #[test]
    fn step_number_accepts_positive_integers() {
        assert_eq!(validate_step_number(Some(&json!(1))).unwrap(), 1);
        assert_eq!(validate_step_number(Some(&json!(3.0))).unwrap(), 3);
    }

    #[test]
    fn step_number_rejects_below_one() {
        for value in [json!(0), json!(-4), json!(0.0)] {
            let err = validate_step_number(Some(&value)).unwrap_err();
            assert_eq!(err.code, "step_number_below_one");
        }
    }

    #[test]
    fn step_number_rejects_non_numeric() {
        for value in [json!("3"), json!(null), json!(true), json!({ "n": 3 })] {
            let err = validate_step_number(Some(&value)).unwrap_err();
            assert_eq!(err.code, "step_number_not_numeric");
        }
        assert!(validate_step_number(None).is_err());
    }

    #[test]
    fn step_number_rejects_fractions_and_overflow() {
        let err = validate_step_number(Some(&json!(2.5))).unwrap_err();
        assert_eq!(err.code, "step_number_not_integer");

        let err = validate_step_number(Some(&json!(5_000_000_000_i64))).unwrap_err();
        assert_eq!(err.code, "step_number_out_of_range");
    }
}
