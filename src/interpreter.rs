/// The evaluator module computes results from tokens.
///
/// The evaluator works directly on the token sequence: it repeatedly splits
/// the sequence on its weakest-binding operator and combines the values of
/// both halves.
///
/// # Responsibilities
/// - Strips parentheses that enclose a whole (sub)expression.
/// - Chooses split points by parenthesis depth and operator precedence.
/// - Reports malformed input, division by zero and results that are not a
///   number.
pub mod evaluator;
/// The lexer module tokenizes source text for evaluation.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// integer literals, operators and parentheses, each tagged with its byte
/// offset. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Skips whitespace.
/// - Recognizes the fixed set of operator and parenthesis symbols.
/// - Reports literal runs that are not valid integers.
pub mod lexer;
/// Binary operators and their precedence.
pub mod operator;
/// The value module defines the numeric result type.
pub mod value;
