use crate::interpreter::{lexer::Token, operator::BinaryOperator};

/// Finds the operators an expression should be split on.
///
/// Every operator is ranked by the pair `(depth, precedence)`, where `depth`
/// is the number of parentheses open at its position. Pairs compare
/// lexicographically, so any operator outside a group ranks below every
/// operator inside it, whatever their precedence. All operators sharing the
/// lowest rank are returned in source order. The caller combines the operands
/// between them from left to right, which makes operators of equal precedence
/// group from the left (`10 - 2 - 3` is `(10 - 2) - 3`).
///
/// Parentheses are only counted, never validated. Unbalanced input still
/// yields split points and fails later on one of the operands.
///
/// # Returns
/// The index and operator of every split point, or an empty vector if the
/// slice contains no operator.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{evaluator::split::find_splits, lexer::tokenize, operator::BinaryOperator};
///
/// let tokens = tokenize("2 * (3 + 4) - 5 + 1").unwrap();
/// assert_eq!(find_splits(&tokens), vec![(7, BinaryOperator::Sub), (9, BinaryOperator::Add)]);
///
/// let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
/// assert_eq!(find_splits(&tokens), vec![(1, BinaryOperator::Pow), (3, BinaryOperator::Pow)]);
/// ```
#[must_use]
pub fn find_splits(tokens: &[(Token, usize)]) -> Vec<(usize, BinaryOperator)> {
    let mut depth: isize = 0;
    let mut least: Option<(isize, u8)> = None;
    let mut splits = Vec::new();

    for (index, (token, _)) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth -= 1,
            Token::Operator(op) => {
                let rank = (depth, op.precedence());
                if least.is_none_or(|least| rank < least) {
                    least = Some(rank);
                    splits.clear();
                }
                if least == Some(rank) {
                    splits.push((index, *op));
                }
            },
            Token::Integer(_) | Token::Ignored => {},
        }
    }

    log::trace!("split {} tokens on {:?} at rank {least:?}", tokens.len(), splits);

    splits
}
