// ============================================================================
// Decimal Errors
// Error types for decimal construction and arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal construction or arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeciError {
    /// Input string is blank or does not match the decimal literal grammar
    InvalidLiteral {
        /// The offending input, as received from the caller
        literal: String,
    },
    /// Attempted division or modulo with a zero divisor
    DivisionByZero,
    /// Negative scale argument passed to `set_scale` or `divide`
    InvalidScale(i64),
    /// Zero multiple passed to `round_to_nearest`
    InvalidMultiple,
    /// Non-positive significant digit count
    InvalidDigitCount(i64),
    /// Square root of a negative value
    NegativeRadicand,
    /// Power with an exponent that is not an exact integer
    NonIntegerExponent,
    /// Exponent magnitude exceeds the supported integer range
    ExponentOutOfRange,
}

impl fmt::Display for DeciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeciError::InvalidLiteral { literal } => {
                write!(f, "invalid decimal literal: '{}'", literal)
            },
            DeciError::DivisionByZero => write!(f, "division by zero"),
            DeciError::InvalidScale(scale) => {
                write!(f, "scale must be non-negative (was {})", scale)
            },
            DeciError::InvalidMultiple => {
                write!(f, "cannot round to nearest multiple of zero")
            },
            DeciError::InvalidDigitCount(digits) => {
                write!(f, "significant digit count must be positive (was {})", digits)
            },
            DeciError::NegativeRadicand => {
                write!(f, "cannot calculate square root of a negative value")
            },
            DeciError::NonIntegerExponent => {
                write!(f, "exponent must be an exact integer")
            },
            DeciError::ExponentOutOfRange => {
                write!(f, "exponent magnitude exceeds the supported integer range")
            },
        }
    }
}

impl std::error::Error for DeciError {}

/// Result type alias for decimal operations
pub type DeciResult<T> = Result<T, DeciError>;
