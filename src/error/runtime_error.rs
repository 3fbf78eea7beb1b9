use crate::interpreter::{lexer::Token, operator::BinaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operand was expected but the (sub)expression is empty.
    UnexpectedEndOfInput,
    /// A lone token that is not an integer was found where an operand was
    /// expected.
    UnexpectedToken {
        /// The token encountered.
        token:  Token,
        /// Byte offset of the token in the source.
        offset: usize,
    },
    /// Several tokens were found but none of them is an operator to split on.
    MissingOperator {
        /// Byte offset of the first token of the expression.
        offset: usize,
    },
    /// The expression starts with an operator, e.g. a unary minus.
    LeadingOperator {
        /// The operator found.
        operator: BinaryOperator,
        /// Byte offset of the operator in the source.
        offset:   usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` in the source.
        offset: usize,
    },
    /// An arithmetic step produced a value that is not a number.
    NotANumber {
        /// The operator whose result was not a number.
        operator: BinaryOperator,
        /// Byte offset of the operator in the source.
        offset:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at offset {offset}: Unexpected token: {token}.")
            },
            Self::MissingOperator { offset } => {
                write!(f, "Error at offset {offset}: Expected an operator between operands.")
            },
            Self::LeadingOperator { operator, offset } => write!(f,
                                                                 "Error at offset {offset}: Operator '{operator}' is missing its left operand."),
            Self::DivisionByZero { offset } => write!(f, "Error at offset {offset}: Division by zero."),
            Self::NotANumber { operator, offset } => write!(f,
                                                            "Error at offset {offset}: Result of '{operator}' is not a number."),
        }
    }
}

impl std::error::Error for RuntimeError {}
