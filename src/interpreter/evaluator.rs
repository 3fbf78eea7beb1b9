/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*`, `/` and `^` to two values, including integer
/// overflow fallback and the division-by-zero check.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the recursive evaluation entry point, the parenthesis elision and
/// error propagation.
pub mod core;

/// Split point selection.
///
/// Finds the operator that binds weakest, taking parenthesis depth into
/// account.
pub mod split;
