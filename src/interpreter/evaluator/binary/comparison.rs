use crate::ast::InfixOperator;

/// Evaluates a relational or equality operator on two ordered operands.
///
/// Every operator table funnels its comparisons through here. Arrays and
/// hashes pass their lengths for the relational operators.
///
/// # Returns
/// `Some(result)` for `== != < <= > >=`, `None` for any other operator.
///
/// # Example
/// ```
/// use quasi::{ast::InfixOperator, interpreter::evaluator::binary::comparison::compare};
///
/// assert_eq!(compare(InfixOperator::LessEqual, &2, &2), Some(true));
/// assert_eq!(compare(InfixOperator::Add, &2, &2), None);
/// ```
#[must_use]
pub fn compare<T: PartialOrd>(op: InfixOperator, a: &T, b: &T) -> Option<bool> {
    use InfixOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    match op {
        Equal => Some(a == b),
        NotEqual => Some(a != b),
        Less => Some(a < b),
        LessEqual => Some(a <= b),
        Greater => Some(a > b),
        GreaterEqual => Some(a >= b),
        _ => None,
    }
}

/// Like [`compare`], but only for `==` and `!=`, given whether the operands
/// are equal.
#[must_use]
pub const fn equality(op: InfixOperator, is_equal: bool) -> Option<bool> {
    match op {
        InfixOperator::Equal => Some(is_equal),
        InfixOperator::NotEqual => Some(!is_equal),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_unequal_to_itself() {
        assert_eq!(compare(InfixOperator::Equal, &f64::NAN, &f64::NAN), Some(false));
        assert_eq!(compare(InfixOperator::NotEqual, &f64::NAN, &f64::NAN), Some(true));
    }

    #[test]
    fn equality_ignores_ordering_operators() {
        assert_eq!(equality(InfixOperator::NotEqual, true), Some(false));
        assert_eq!(equality(InfixOperator::Less, true), None);
    }
}
