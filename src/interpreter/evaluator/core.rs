use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::eval_binary, split::find_splits},
        lexer::Token,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a token sequence and returns the resulting value.
///
/// This is the main entry point for evaluation. It works on any slice of a
/// token sequence and calls itself on the operands:
/// 1. A pair of parentheses that encloses the whole slice is removed.
/// 2. A single integer token is returned as-is.
/// 3. Otherwise the slice is split on its weakest-binding operators (see
///    [`find_splits`]), and the operands between them are evaluated and
///    combined from left to right.
///
/// The first failure aborts the evaluation; there are no partial results.
///
/// # Errors
/// - [`RuntimeError::UnexpectedEndOfInput`] for an empty (sub)expression.
/// - [`RuntimeError::UnexpectedToken`] for a lone operator or parenthesis.
/// - [`RuntimeError::MissingOperator`] if several tokens contain no operator.
/// - [`RuntimeError::LeadingOperator`] if the first split operator is the
///   first token, which is how a unary minus shows up.
/// - [`RuntimeError::DivisionByZero`] and [`RuntimeError::NotANumber`] from
///   the arithmetic.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{evaluator::core::eval_tokens, lexer::tokenize, value::core::Value};
///
/// let tokens = tokenize("(1 + 2) * (3 + 4)").unwrap();
/// assert_eq!(eval_tokens(&tokens).unwrap(), Value::Integer(21));
///
/// let tokens = tokenize("-3").unwrap();
/// assert!(eval_tokens(&tokens).is_err());
/// ```
pub fn eval_tokens(mut tokens: &[(Token, usize)]) -> EvalResult<Value> {
    while let Some(inner) = strip_enclosing_parens(tokens) {
        tokens = inner;
    }

    let first_offset = match tokens {
        [] => return Err(RuntimeError::UnexpectedEndOfInput),
        [(Token::Integer(n), _)] => return Ok(Value::Integer(*n)),
        [(token, offset)] => {
            return Err(RuntimeError::UnexpectedToken { token:  *token,
                                                       offset: *offset, });
        },
        [(_, offset), ..] => *offset,
    };

    let splits = find_splits(tokens);
    let Some(&(first, op)) = splits.first() else {
        return Err(RuntimeError::MissingOperator { offset: first_offset });
    };

    if first == 0 {
        return Err(RuntimeError::LeadingOperator { operator: op,
                                                   offset:   first_offset, });
    }

    // Operators of equal rank are folded in a loop so that long flat chains
    // do not deepen the recursion.
    let ends = splits.iter().skip(1).map(|(index, _)| *index).chain([tokens.len()]);
    let mut result = eval_tokens(&tokens[..first])?;

    for (&(index, op), end) in splits.iter().zip(ends) {
        let offset = tokens[index].1;
        let right = eval_tokens(&tokens[index + 1..end])?;
        let left = result;

        result = eval_binary(op, &left, &right, offset)?;

        if result.is_nan() {
            return Err(RuntimeError::NotANumber { operator: op, offset });
        }

        log::trace!("{left} {op} {right} = {result}");
    }

    Ok(result)
}

/// Returns the interior of `tokens` if its first and last tokens are a
/// matching pair of parentheses.
///
/// `(1 + 2) * (3 + 4)` starts and ends with parentheses that belong to
/// different groups and is therefore left alone.
fn strip_enclosing_parens(tokens: &[(Token, usize)]) -> Option<&[(Token, usize)]> {
    let [(Token::LParen, _), inner @ .., (Token::RParen, _)] = tokens else {
        return None;
    };

    let mut depth = 0usize;
    for (token, _) in inner {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                // The opening parenthesis is closed before the end.
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            },
            Token::Integer(_) | Token::Operator(_) | Token::Ignored => {},
        }
    }

    (depth == 0).then_some(inner)
}
