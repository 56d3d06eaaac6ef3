use crate::error::RuntimeError;

/// Converts an integer to the nearest double.
///
/// Integers beyond `2^53` lose precision, which is the language's defined
/// behavior for mixed integer/double arithmetic.
///
/// ## Example
/// ```
/// use quasi::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates a double toward zero.
///
/// Values outside the `i64` range saturate and `NaN` becomes `0`.
///
/// ## Example
/// ```
/// use quasi::util::num::f64_to_i64_truncating;
///
/// assert_eq!(f64_to_i64_truncating(-2.9), -2);
/// assert_eq!(f64_to_i64_truncating(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_truncating(value: f64) -> i64 {
    value as i64
}

/// Converts a container length to an integer value, saturating at
/// `i64::MAX`.
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Validates `index` against a container of `length` elements.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfRange` if the index is negative or not
/// smaller than `length`.
///
/// ## Example
/// ```
/// use quasi::util::num::checked_index;
///
/// assert_eq!(checked_index(2, 3).unwrap(), 2);
/// assert!(checked_index(3, 3).is_err());
/// assert!(checked_index(-1, 3).is_err());
/// ```
pub fn checked_index(index: i64, length: usize) -> Result<usize, RuntimeError> {
    usize::try_from(index).ok()
                          .filter(|&i| i < length)
                          .ok_or(RuntimeError::IndexOutOfRange { index, length })
}

/// Formats a double the way the language prints it.
///
/// Whole numbers keep a trailing `.0` so they stay distinguishable from
/// integers, and infinities are spelled out.
///
/// ## Example
/// ```
/// use quasi::util::num::format_double;
///
/// assert_eq!(format_double(3.0), "3.0");
/// assert_eq!(format_double(0.25), "0.25");
/// assert_eq!(format_double(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_double(value: f64) -> String {
    if value.is_infinite() {
        if value.is_sign_positive() { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        format!("{value:?}")
    }
}
