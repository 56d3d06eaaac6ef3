use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::{core::Value, hash_key::HashKey}},
    util::num::checked_index,
};

/// Decodes the escape sequences of a string literal.
///
/// Escapes are resolved when the literal is evaluated, so a quoted string
/// literal still carries its raw text. Supported escapes are `\b`, `\t`,
/// `\n`, `\f`, `\r`, `\\` and `\'`.
///
/// # Errors
/// - `IllegalEscape` for any other character after a backslash.
/// - `UnterminatedEscape` if the literal ends with a backslash.
///
/// # Example
/// ```
/// use quasi::interpreter::evaluator::utils::decode_escapes;
///
/// assert_eq!(decode_escapes(r"a\tb\\").unwrap(), "a\tb\\");
/// assert!(decode_escapes(r"\q").is_err());
/// ```
pub fn decode_escapes(raw: &str) -> EvalResult<String> {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        let escaped = match chars.next() {
            Some('b') => '\u{8}',
            Some('t') => '\t',
            Some('n') => '\n',
            Some('f') => '\u{c}',
            Some('r') => '\r',
            Some('\\') => '\\',
            Some('\'') => '\'',
            Some(other) => return Err(RuntimeError::IllegalEscape { character: other }),
            None => return Err(RuntimeError::UnterminatedEscape),
        };
        decoded.push(escaped);
    }

    Ok(decoded)
}

/// Converts a value to a hash key.
///
/// # Errors
/// `UnhashableKey` for anything but integers, doubles, booleans and strings.
pub fn hash_key(value: &Value) -> EvalResult<HashKey> {
    HashKey::try_from(value).map_err(|()| RuntimeError::UnhashableKey { type_name:
                                                                            value.type_name()
                                                                                 .to_string() })
}

/// Validates an array or string index value against `length`.
///
/// # Errors
/// - `InvalidIndex` if `index` is not an integer.
/// - `IndexOutOfRange` if it is negative or past the end.
pub fn integer_index(index: &Value, length: usize) -> EvalResult<usize> {
    match index {
        Value::Integer(i) => checked_index(i.get(), length),
        other => Err(RuntimeError::InvalidIndex { type_name: other.type_name().to_string() }),
    }
}
