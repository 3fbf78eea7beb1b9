/// Represents the result of evaluating an expression.
///
/// Integer operands stay integers under `+`, `-`, `*` and non-negative integer
/// powers. Division, negative or real exponents and integer overflow produce
/// a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// An integer value (64 bit integer).
    Integer(i64),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl Value {
    /// Returns the value as an `f64`.
    ///
    /// Integers beyond `2^53` lose precision, which is the same trade-off real
    /// arithmetic makes everywhere else.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(&self) -> f64 {
        match self {
            Self::Real(r) => *r,
            Self::Integer(n) => *n as f64,
        }
    }

    /// Returns `true` for integer `0` and for real `0.0` or `-0.0`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Real(r) => *r == 0.0,
            Self::Integer(n) => *n == 0,
        }
    }

    /// Returns `true` if the value is a real `NaN`.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::Real(r) if r.is_nan())
    }
}

impl std::fmt::Display for Value {
    /// Integers print as-is. Reals use the shortest representation that
    /// round-trips, so `2.0` prints as `2` and `2.5` as `2.5`. Infinities
    /// print as `Infinity` and `-Infinity`.
    ///
    /// # Example
    /// ```
    /// use infixcalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(-7).to_string(), "-7");
    /// assert_eq!(Value::Real(2.0).to_string(), "2");
    /// assert_eq!(Value::Real(2.5).to_string(), "2.5");
    /// assert_eq!(Value::Real(f64::NEG_INFINITY).to_string(), "-Infinity");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) if r.is_infinite() => {
                write!(f, "{}Infinity", if r.is_sign_negative() { "-" } else { "" })
            },
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}
