//! Length stage - validates the raw password length.

use crate::error::LengthError;

/// Validates a raw length answer against `[min, max]`.
///
/// Checks run in a fixed order and only the first failing one is reported:
/// empty, not a number, no response, not an integer, out of range.
///
/// # Returns
/// - `Ok(length)` if the value is an integer within bounds
/// - `Err(LengthError)` describing the first failed check
pub fn validate_length(raw: Option<&str>, min: usize, max: usize) -> Result<usize, LengthError> {
    let Some(raw) = raw else {
        return Err(LengthError::NoResponse);
    };

    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LengthError::Empty);
    }

    let value: f64 = match raw.parse() {
        Ok(v) if !f64::is_nan(v) => v,
        _ => return Err(LengthError::NotANumber),
    };

    // fract() of an infinity is NaN, which also lands here
    if value.fract() != 0.0 {
        return Err(LengthError::NotInteger);
    }

    if value < min as f64 || value > max as f64 {
        return Err(LengthError::OutOfRange { min, max });
    }

    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: Option<&str>) -> Result<usize, LengthError> {
        validate_length(raw, 8, 128)
    }

    #[test]
    fn test_every_length_in_range_is_valid() {
        for n in 8..=128 {
            assert_eq!(check(Some(&n.to_string())), Ok(n));
        }
    }

    #[test]
    fn test_lengths_outside_range() {
        for raw in ["7", "0", "-1", "129", "200", "1e300"] {
            assert_eq!(
                check(Some(raw)),
                Err(LengthError::OutOfRange { min: 8, max: 128 }),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(check(Some("")), Err(LengthError::Empty));
        assert_eq!(check(Some("   ")), Err(LengthError::Empty));
    }

    #[test]
    fn test_non_numeric_input() {
        for raw in ["twelve", "12abc", "NaN", "1 2"] {
            assert_eq!(check(Some(raw)), Err(LengthError::NotANumber), "input {raw:?}");
        }
    }

    #[test]
    fn test_cancelled_input() {
        assert_eq!(check(None), Err(LengthError::NoResponse));
    }

    #[test]
    fn test_fractional_input() {
        assert_eq!(check(Some("12.5")), Err(LengthError::NotInteger));
        // fractional check wins over the range check
        assert_eq!(check(Some("3.5")), Err(LengthError::NotInteger));
        assert_eq!(check(Some("inf")), Err(LengthError::NotInteger));
    }

    #[test]
    fn test_integral_float_notation_is_accepted() {
        assert_eq!(check(Some("12.0")), Ok(12));
        assert_eq!(check(Some(" 16 ")), Ok(16));
        assert_eq!(check(Some("1e1")), Ok(10));
    }

    #[test]
    fn test_validation_is_repeatable() {
        for raw in [Some("12"), Some("abc"), Some(""), None, Some("7.5"), Some("500")] {
            assert_eq!(check(raw), check(raw));
        }
    }
}
