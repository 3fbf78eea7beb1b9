/// Lexing errors.
///
/// Defines the error raised while turning source text into tokens, which is
/// an integer literal that cannot be parsed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// misplaced operators, empty subexpressions or division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The user-visible category of a failed evaluation.
///
/// Lexing and evaluation failures are not told apart here; both count as
/// [`ErrorKind::InvalidSyntax`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The expression is malformed.
    InvalidSyntax,
    /// The right operand of `/` is zero.
    DivisionByZero,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSyntax => write!(f, "Invalid syntax"),
            Self::DivisionByZero => write!(f, "Cannot divide by 0"),
        }
    }
}

/// Any error returned by [`crate::evaluate`].
///
/// `Display` prints only the short message of the [`ErrorKind`]. The wrapped
/// error keeps the details and is available through
/// [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be tokenized.
    Parse(ParseError),
    /// The tokens could not be evaluated.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the user-visible category of this error.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{error::ErrorKind, evaluate};
    ///
    /// assert_eq!(evaluate("1/0").unwrap_err().kind(), ErrorKind::DivisionByZero);
    /// assert_eq!(evaluate("1+").unwrap_err().kind(), ErrorKind::InvalidSyntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Parse(_) | Self::Runtime(_) => ErrorKind::InvalidSyntax,
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
