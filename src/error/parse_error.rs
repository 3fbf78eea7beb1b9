#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum ParseError {
    /// A run of characters between symbols is not a valid integer literal.
    InvalidLiteral {
        /// The offending source text.
        literal: String,
        /// Byte offset of the literal in the source.
        offset:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLiteral { literal, offset } => {
                write!(f, "Error at offset {offset}: '{literal}' is not a valid integer literal.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
