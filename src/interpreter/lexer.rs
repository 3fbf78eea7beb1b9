use logos::Logos;

use crate::{error::ParseError, interpreter::operator::BinaryOperator};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// Everything between two symbols (or whitespace) is read as one literal,
    /// so `3x` or `1.5` become a single literal and are rejected when parsed.
    #[regex(r"[^\s+\-*/^()]+", parse_integer, allow_greedy = true)]
    Integer(i64),
    /// One of `+`, `-`, `*`, `/` or `^`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("^", |_| BinaryOperator::Pow)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Converts source text into a sequence of tokens.
///
/// Every token is paired with the byte offset at which it starts in `source`.
/// Parenthesis balance and operator placement are not checked here; the
/// evaluator reports those.
///
/// # Errors
/// Returns [`ParseError::InvalidLiteral`] for the first run of characters that
/// is neither a symbol nor a valid `i64` literal.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{lexer::{Token, tokenize}, operator::BinaryOperator};
///
/// let tokens = tokenize("(1 + 23)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LParen, 0),
///                 (Token::Integer(1), 1),
///                 (Token::Operator(BinaryOperator::Add), 3),
///                 (Token::Integer(23), 5),
///                 (Token::RParen, 7)]);
///
/// assert!(tokenize("").unwrap().is_empty());
/// assert!(tokenize("1 + two").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, offset));
        } else {
            return Err(ParseError::InvalidLiteral { literal: lexer.slice().to_string(),
                                                    offset });
        }
    }

    log::trace!("tokenized {source:?} into {} tokens", tokens.len());

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// Signs never reach this point since `+` and `-` are tokens of their own.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice is not a valid base-10 `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
