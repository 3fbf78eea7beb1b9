use crate::interpreter::value::core::Value;

/// Evaluates an exponentiation operation.
///
/// An integer raised to a non-negative integer is computed exactly with
/// checked arithmetic. Negative exponents, real operands and results that
/// overflow an `i64` are computed with `powf`, so fractional results and
/// infinities are possible. A negative base with a fractional exponent yields
/// `NaN`, which the caller rejects.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
///
/// # Returns
/// The value of `base ^ exponent`.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{evaluator::binary::power::eval_pow, value::core::Value};
///
/// let b = Value::Integer(2);
///
/// assert_eq!(eval_pow(&b, &Value::Integer(10)), Value::Integer(1024));
/// assert_eq!(eval_pow(&b, &Value::Integer(-1)), Value::Real(0.5));
/// ```
#[must_use]
pub fn eval_pow(base: &Value, exponent: &Value) -> Value {
    use Value::{Integer, Real};

    let real = || Real(base.as_real().powf(exponent.as_real()));

    match (base, exponent) {
        (Integer(b), Integer(e)) => u32::try_from(*e).ok()
                                                     .and_then(|e| b.checked_pow(e))
                                                     .map_or_else(real, Integer),
        _ => real(),
    }
}
