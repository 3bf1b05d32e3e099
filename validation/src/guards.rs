//! Runtime type-predicate guards.
//!
//! Each guard classifies one [`RawValue`] of unknown origin and returns a
//! boolean. All guards are total: wrong-kind values, `NaN`, and absence map
//! to `false` instead of an error, so call sites validating hostile input
//! never need their own error handling.

use crate::value::RawValue;

/// `true` only for plain key/value maps.
///
/// Null, arrays, and every scalar are not objects.
pub fn is_object(value: Option<&RawValue>) -> bool {
    matches!(value, Some(RawValue::Object(_)))
}

/// `true` only for the explicit absence of a value, including a missed map
/// lookup. Null is a present value and returns `false`.
pub fn is_undefined(value: Option<&RawValue>) -> bool {
    value.is_none()
}

/// `true` only for textual values, including the empty string.
pub fn is_string(value: Option<&RawValue>) -> bool {
    matches!(value, Some(RawValue::String(_)))
}

/// `true` only for the two boolean values.
pub fn is_boolean(value: Option<&RawValue>) -> bool {
    matches!(value, Some(RawValue::Bool(_)))
}

/// `true` for numeric values except `NaN`. The infinities count as numbers;
/// numeric-looking strings do not.
pub fn is_number(value: Option<&RawValue>) -> bool {
    matches!(value, Some(RawValue::Number(number)) if !number.is_nan())
}

/// `true` only for finite numeric values whose fractional part is zero.
///
/// This is a genuine fractional-part test, not a type-tag check: `5.0`
/// classifies as an integer. Precision floor: a literal closer to an integer
/// than one ulp (for example `5.000_000_000_000_000_1`) already parses to
/// exactly `5.0` and therefore also classifies as an integer. That follows
/// from finite floating-point precision, it is not a rounding step performed
/// here.
pub fn is_integer(value: Option<&RawValue>) -> bool {
    matches!(
        value,
        Some(RawValue::Number(number)) if number.is_finite() && number.fract() == 0.0
    )
}
