use crate::interpreter::{
    evaluator::{
        binary::{power::eval_pow, scalar::eval_scalar_op},
        core::EvalResult,
    },
    operator::BinaryOperator,
    value::core::Value,
};

/// Evaluates a binary operation between two values.
///
/// `+`, `-`, `*` and `/` go to [`eval_scalar_op`], `^` goes to [`eval_pow`].
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Byte offset of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{
///     evaluator::binary::core::eval_binary, operator::BinaryOperator, value::core::Value,
/// };
///
/// let left = Value::Integer(3);
/// let right = Value::Integer(4);
///
/// let result = eval_binary(BinaryOperator::Add, &left, &right, 0);
/// assert_eq!(result.unwrap(), Value::Integer(7));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   offset: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add | Sub | Mul | Div => eval_scalar_op(op, left, right, offset),
        Pow => Ok(eval_pow(left, right)),
    }
}
