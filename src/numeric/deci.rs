// ============================================================================
// Deci
// Immutable arbitrary-precision decimal value with canonical equality
// ============================================================================

use crate::numeric::engine::{self, Magnitude};
use crate::numeric::{division_policy, DeciError, DeciResult, RoundingMode};
use crate::parser;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Immutable arbitrary-precision decimal value.
///
/// A `Deci` is constructed from a normalized literal or produced by an
/// arithmetic operation, and never mutated afterwards. Equality, ordering,
/// and hashing are defined on the numeric magnitude alone, so `"2.00"`,
/// `"2.0"`, and `"2"` construct equal values that hash identically.
///
/// Construction from a string accepts both `.` and `,` as decimal or
/// grouping separator; the rightmost separator wins as the decimal point.
///
/// # Example
/// ```
/// use candec::prelude::*;
///
/// let price: Deci = "1.234,56".parse()?;
/// assert_eq!(price.to_string(), "1234.56");
///
/// let total = &price * &Deci::from(3);
/// assert_eq!(total.to_string(), "3703.68");
/// # Ok::<(), DeciError>(())
/// ```
#[derive(Clone)]
pub struct Deci {
    magnitude: Magnitude,
}

impl Deci {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value 0.
    pub fn zero() -> Deci {
        Deci {
            magnitude: engine::zero(),
        }
    }

    /// The value 1.
    pub fn one() -> Deci {
        Deci::from(1i64)
    }

    /// The value 10.
    pub fn ten() -> Deci {
        Deci::from(10i64)
    }

    /// Wrap an engine result, stripping insignificant trailing zeros so the
    /// equality invariant holds transitively across chained operations.
    pub(crate) fn from_magnitude(magnitude: Magnitude) -> Deci {
        Deci {
            magnitude: engine::strip_trailing_zeros(&magnitude),
        }
    }

    /// Wrap an engine result verbatim. Only `set_scale` uses this: it is the
    /// one operation whose output keeps its requested trailing zeros.
    fn from_scaled(magnitude: Magnitude) -> Deci {
        Deci { magnitude }
    }

    /// Parse a literal, falling back to zero on failure.
    ///
    /// The fallback is a caller-visible choice, not hidden recovery; use
    /// `str::parse` when failures must surface.
    pub fn parse_or_zero(value: &str) -> Deci {
        Deci::parse_or(value, Deci::zero())
    }

    /// Parse a literal, falling back to `default` on failure.
    pub fn parse_or(value: &str, default: Deci) -> Deci {
        value.parse().unwrap_or(default)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Divide by `divisor` using the process-wide division policy in effect
    /// at call time.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the divisor is zero, independent of
    /// policy.
    pub fn checked_div(&self, divisor: &Deci) -> DeciResult<Deci> {
        let policy = division_policy();
        self.divide(divisor, policy.fractional_digits(), policy.rounding_mode())
    }

    /// Divide by `divisor`, rounding the quotient to exactly `scale`
    /// fractional digits. Ignores the global division policy.
    ///
    /// # Errors
    /// Returns `InvalidScale` when `scale` is negative and `DivisionByZero`
    /// when the divisor is zero.
    pub fn divide(&self, divisor: &Deci, scale: i64, mode: RoundingMode) -> DeciResult<Deci> {
        if scale < 0 {
            return Err(DeciError::InvalidScale(scale));
        }
        if divisor.is_zero() {
            return Err(DeciError::DivisionByZero);
        }
        Ok(Deci::from_magnitude(engine::div_to_scale(
            &self.magnitude,
            &divisor.magnitude,
            scale,
            mode,
        )))
    }

    /// Trim or pad to exactly `scale` fractional digits under `mode`.
    ///
    /// Unlike the arithmetic operations, the result keeps the requested
    /// scale: `set_scale(2)` of `1.2` displays as `"1.20"`.
    ///
    /// # Errors
    /// Returns `InvalidScale` when `scale` is negative.
    pub fn set_scale(&self, scale: i64, mode: RoundingMode) -> DeciResult<Deci> {
        if scale < 0 {
            return Err(DeciError::InvalidScale(scale));
        }
        Ok(Deci::from_scaled(engine::with_scale(
            &self.magnitude,
            scale,
            mode,
        )))
    }

    /// Absolute value.
    pub fn abs(&self) -> Deci {
        Deci::from_magnitude(engine::abs(&self.magnitude))
    }

    /// Additive inverse.
    pub fn negate(&self) -> Deci {
        Deci::from_magnitude(engine::neg(&self.magnitude))
    }

    // ========================================================================
    // Predicates and conversions
    // ========================================================================

    /// Check if the value is zero.
    pub fn is_zero(&self) -> bool {
        engine::signum(&self.magnitude) == 0
    }

    /// Check if the value is strictly positive.
    pub fn is_positive(&self) -> bool {
        engine::signum(&self.magnitude) > 0
    }

    /// Check if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        engine::signum(&self.magnitude) < 0
    }

    /// Nearest double-precision approximation.
    pub fn to_f64(&self) -> f64 {
        engine::to_f64(&self.magnitude)
    }

    /// Truncating conversion to `i64`; `None` when the integer part does not
    /// fit.
    pub fn to_i64(&self) -> Option<i64> {
        engine::to_i64(&self.magnitude)
    }

    /// Number of digits to the right of the decimal separator in the
    /// canonical string form.
    pub fn scale(&self) -> i64 {
        let text = self.to_string();
        match text.find('.') {
            None => 0,
            Some(index) => (text.len() - index - 1) as i64,
        }
    }

    /// Count of digits in the canonical string form, excluding the sign and
    /// the decimal separator.
    pub fn precision(&self) -> usize {
        self.to_string()
            .chars()
            .filter(char::is_ascii_digit)
            .count()
    }

    fn add_raw(&self, other: &Deci) -> Deci {
        Deci::from_magnitude(engine::add(&self.magnitude, &other.magnitude))
    }

    fn sub_raw(&self, other: &Deci) -> Deci {
        Deci::from_magnitude(engine::sub(&self.magnitude, &other.magnitude))
    }

    fn mul_raw(&self, other: &Deci) -> Deci {
        Deci::from_magnitude(engine::mul(&self.magnitude, &other.magnitude))
    }
}

// ============================================================================
// Equality, Ordering, Hashing
// ============================================================================

impl PartialEq for Deci {
    fn eq(&self, other: &Self) -> bool {
        engine::compare(&self.magnitude, &other.magnitude) == Ordering::Equal
    }
}

impl Eq for Deci {}

impl PartialOrd for Deci {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Deci {
    fn cmp(&self, other: &Self) -> Ordering {
        engine::compare(&self.magnitude, &other.magnitude)
    }
}

impl Hash for Deci {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the trailing-zero-free representation so equal magnitudes
        // hash identically regardless of the scale they were produced at.
        let (digits, exponent) = engine::normalized_parts(&self.magnitude);
        digits.hash(state);
        exponent.hash(state);
    }
}

impl Default for Deci {
    fn default() -> Self {
        Deci::zero()
    }
}

// ============================================================================
// Operators
// Infallible operators for ergonomics; division panics on a zero divisor,
// use checked_div / divide in production code.
// ============================================================================

impl Add for Deci {
    type Output = Deci;

    fn add(self, rhs: Deci) -> Deci {
        self.add_raw(&rhs)
    }
}

impl Add<&Deci> for Deci {
    type Output = Deci;

    fn add(self, rhs: &Deci) -> Deci {
        self.add_raw(rhs)
    }
}

impl Add for &Deci {
    type Output = Deci;

    fn add(self, rhs: &Deci) -> Deci {
        self.add_raw(rhs)
    }
}

impl Sub for Deci {
    type Output = Deci;

    fn sub(self, rhs: Deci) -> Deci {
        self.sub_raw(&rhs)
    }
}

impl Sub<&Deci> for Deci {
    type Output = Deci;

    fn sub(self, rhs: &Deci) -> Deci {
        self.sub_raw(rhs)
    }
}

impl Sub for &Deci {
    type Output = Deci;

    fn sub(self, rhs: &Deci) -> Deci {
        self.sub_raw(rhs)
    }
}

impl Mul for Deci {
    type Output = Deci;

    fn mul(self, rhs: Deci) -> Deci {
        self.mul_raw(&rhs)
    }
}

impl Mul<&Deci> for Deci {
    type Output = Deci;

    fn mul(self, rhs: &Deci) -> Deci {
        self.mul_raw(rhs)
    }
}

impl Mul for &Deci {
    type Output = Deci;

    fn mul(self, rhs: &Deci) -> Deci {
        self.mul_raw(rhs)
    }
}

impl Div for Deci {
    type Output = Deci;

    fn div(self, rhs: Deci) -> Deci {
        self.checked_div(&rhs).expect("Deci division by zero")
    }
}

impl Div<&Deci> for Deci {
    type Output = Deci;

    fn div(self, rhs: &Deci) -> Deci {
        self.checked_div(rhs).expect("Deci division by zero")
    }
}

impl Div for &Deci {
    type Output = Deci;

    fn div(self, rhs: &Deci) -> Deci {
        self.checked_div(rhs).expect("Deci division by zero")
    }
}

impl Neg for Deci {
    type Output = Deci;

    fn neg(self) -> Deci {
        self.negate()
    }
}

impl Neg for &Deci {
    type Output = Deci;

    fn neg(self) -> Deci {
        self.negate()
    }
}

impl Sum for Deci {
    fn sum<I: Iterator<Item = Deci>>(iter: I) -> Deci {
        iter.fold(Deci::zero(), |accumulated, value| accumulated + value)
    }
}

impl<'a> Sum<&'a Deci> for Deci {
    fn sum<I: Iterator<Item = &'a Deci>>(iter: I) -> Deci {
        iter.fold(Deci::zero(), |accumulated, value| accumulated + value)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for Deci {
    type Err = DeciError;

    /// Parse a decimal literal.
    ///
    /// The literal is validated against the grammar, normalized to canonical
    /// dot-decimal form, and handed to the engine; insignificant trailing
    /// zeros are stripped from the stored magnitude.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = parser::normalize_literal(s)?;
        let magnitude = engine::parse(&normalized).map_err(|_| DeciError::InvalidLiteral {
            literal: s.to_string(),
        })?;
        Ok(Deci::from_magnitude(magnitude))
    }
}

impl From<i32> for Deci {
    fn from(value: i32) -> Deci {
        Deci::from(value as i64)
    }
}

impl From<i64> for Deci {
    fn from(value: i64) -> Deci {
        Deci::from_magnitude(engine::from_i64(value))
    }
}

impl From<u32> for Deci {
    fn from(value: u32) -> Deci {
        Deci::from(value as u64)
    }
}

impl From<u64> for Deci {
    fn from(value: u64) -> Deci {
        Deci::from_magnitude(engine::from_u64(value))
    }
}

impl From<usize> for Deci {
    fn from(value: usize) -> Deci {
        Deci::from(value as u64)
    }
}

impl TryFrom<f64> for Deci {
    type Error = DeciError;

    /// Convert through the float's default string representation, not its
    /// raw binary bits, so `0.1f64` becomes exactly `0.1`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DeciError::InvalidLiteral {
                literal: value.to_string(),
            });
        }
        value.to_string().parse()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Deci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", engine::to_plain_string(&self.magnitude))
    }
}

impl fmt::Debug for Deci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deci({})", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
