//! # infixcalc
//!
//! infixcalc evaluates integer infix expressions written with `+`, `-`, `*`,
//! `/`, `^` and parentheses.
//!
//! Evaluation runs in two stages. The lexer turns the source into a flat token
//! sequence, then the evaluator repeatedly splits that sequence on its
//! weakest-binding operator and combines the values of both halves. There is
//! no syntax tree in between.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::eval_tokens, lexer::tokenize, value::core::Value},
};

/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating an expression, and folds them into the two kinds a user gets to
/// see: invalid syntax and division by zero.
///
/// # Responsibilities
/// - Defines error enums for both stages (lexer, evaluator).
/// - Attaches source offsets and detailed messages for debugging.
/// - Maps every failure to a short user-visible message.
pub mod error;
/// Orchestrates expression evaluation.
///
/// This module ties together lexing, evaluation, operators and value
/// representations.
///
/// # Responsibilities
/// - Coordinates the lexer and the evaluator.
/// - Provides lower-level entry points for each stage.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Evaluates an expression and returns its value.
///
/// Every call tokenizes `source` from scratch; nothing is kept between calls,
/// so evaluating the same string twice always gives the same outcome.
///
/// # Errors
/// Returns an [`Error`] if `source` contains an invalid literal, is
/// malformed, divides by zero, or produces a value that is not a number.
/// Its `Display` is the short user-visible message, `Invalid syntax` or
/// `Cannot divide by 0`.
///
/// # Examples
/// ```
/// use infixcalc::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Value::Integer(14));
/// assert_eq!(evaluate("5 / 2").unwrap().to_string(), "2.5");
///
/// assert_eq!(evaluate("5 / 0").unwrap_err().to_string(), "Cannot divide by 0");
/// assert_eq!(evaluate("3 +").unwrap_err().to_string(), "Invalid syntax");
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let tokens = tokenize(source).inspect_err(|e| log::debug!("{source:?}: {e}"))?;
    let value = eval_tokens(&tokens).inspect_err(|e| log::debug!("{source:?}: {e}"))?;

    Ok(value)
}
