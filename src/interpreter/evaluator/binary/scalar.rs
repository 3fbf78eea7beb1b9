use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, operator::BinaryOperator, value::core::Value},
};

/// Evaluates a scalar arithmetic operation.
///
/// Two integers are added, subtracted or multiplied with checked arithmetic.
/// If that overflows, or if either side is real, the operation is carried out
/// on `f64`. Division always produces a real.
///
/// # Parameters
/// - `op`: The arithmetic operator, one of `Add`, `Sub`, `Mul` or `Div`.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Byte offset of the operator, for error reporting.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] if `op` is `Div` and `right` is
/// zero.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{
///     evaluator::binary::scalar::eval_scalar_op, operator::BinaryOperator, value::core::Value,
/// };
///
/// let x = Value::Integer(5);
/// let y = Value::Integer(2);
///
/// let result = eval_scalar_op(BinaryOperator::Div, &x, &y, 0).unwrap();
/// assert_eq!(result, Value::Real(2.5));
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      offset: usize)
                      -> EvalResult<Value> {
    use Value::{Integer, Real};

    if op == BinaryOperator::Div && right.is_zero() {
        return Err(RuntimeError::DivisionByZero { offset });
    }

    let real = || Real(apply_real(op, left.as_real(), right.as_real()));

    Ok(match (left, right) {
           (Integer(a), Integer(b)) => checked_integer_op(op, *a, *b).map_or_else(real, Integer),
           _ => real(),
       })
}

/// Applies `op` to two integers, or returns `None` if the result does not fit
/// an `i64` or is not an integer operation at all.
const fn checked_integer_op(op: BinaryOperator, a: i64, b: i64) -> Option<i64> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add => a.checked_add(b),
        Sub => a.checked_sub(b),
        Mul => a.checked_mul(b),
        Div | Pow => None,
    }
}

fn apply_real(op: BinaryOperator, a: f64, b: f64) -> f64 {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => a / b,
        Pow => a.powf(b),
    }
}
