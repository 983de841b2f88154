// ============================================================================
// Arithmetic Engine Adapter
// Single seam between the decimal core and the bigdecimal backend
// ============================================================================
//
// Every bigdecimal touch point lives here. The rest of the crate speaks in
// terms of `Magnitude` and the functions below, so swapping the backend means
// rewriting this file only:
// - parse / strip_trailing_zeros: canonical representation maintenance
// - add / sub / mul: exact arithmetic
// - div_to_scale: exact quotient rounded to a target scale (bigdecimal has no
//   divide-to-scale primitive, so the quotient is computed from the integer
//   remainder instead of rounding a truncated high-precision division)
// - with_scale: rescaling, delegated to bigdecimal's rounding primitive
// - compare / to_plain_string / to_f64 / to_i64: the query surface

use crate::numeric::RoundingMode;
use bigdecimal::rounding::RoundingMode as EngineRounding;
use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::str::FromStr;

/// The engine's native representation of a decimal magnitude.
pub(crate) type Magnitude = BigDecimal;

/// Parse a canonical dot-decimal string produced by the literal normalizer.
///
/// The normalizer keeps fractional digits verbatim, so `"5."` is a legal
/// input here; the dangling point carries no digits and is dropped.
pub(crate) fn parse(normalized: &str) -> Result<Magnitude, ParseBigDecimalError> {
    let text = normalized.strip_suffix('.').unwrap_or(normalized);
    BigDecimal::from_str(text)
}

/// Remove insignificant trailing zeros from the stored representation.
///
/// Zero collapses to scale 0 so that `0`, `0.0`, and `-0` share one
/// representation.
pub(crate) fn strip_trailing_zeros(value: &Magnitude) -> Magnitude {
    let (mut digits, mut exponent) = value.as_bigint_and_exponent();
    if digits.is_zero() {
        return BigDecimal::zero();
    }
    let ten = BigInt::from(10);
    while exponent > 0 && (&digits % &ten).is_zero() {
        digits /= &ten;
        exponent -= 1;
    }
    BigDecimal::new(digits, exponent)
}

pub(crate) fn zero() -> Magnitude {
    BigDecimal::zero()
}

pub(crate) fn from_i64(value: i64) -> Magnitude {
    BigDecimal::from(value)
}

pub(crate) fn from_u64(value: u64) -> Magnitude {
    BigDecimal::from(value)
}

pub(crate) fn neg(value: &Magnitude) -> Magnitude {
    -value
}

pub(crate) fn abs(value: &Magnitude) -> Magnitude {
    value.abs()
}

/// Trailing-zero-free digits and exponent, for magnitude-based hashing.
pub(crate) fn normalized_parts(value: &Magnitude) -> (BigInt, i64) {
    strip_trailing_zeros(value).as_bigint_and_exponent()
}

pub(crate) fn add(a: &Magnitude, b: &Magnitude) -> Magnitude {
    a + b
}

pub(crate) fn sub(a: &Magnitude, b: &Magnitude) -> Magnitude {
    a - b
}

pub(crate) fn mul(a: &Magnitude, b: &Magnitude) -> Magnitude {
    a * b
}

pub(crate) fn compare(a: &Magnitude, b: &Magnitude) -> Ordering {
    a.cmp(b)
}

/// Sign of the magnitude: -1, 0, or +1.
pub(crate) fn signum(value: &Magnitude) -> i32 {
    match value.sign() {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

/// Canonical plain decimal string. `Display` falls back to exponential
/// notation for small magnitudes, which the literal grammar cannot read
/// back, so this must stay on the plain-string path.
pub(crate) fn to_plain_string(value: &Magnitude) -> String {
    value.to_plain_string()
}

/// Nearest double-precision approximation.
pub(crate) fn to_f64(value: &Magnitude) -> f64 {
    bigdecimal::ToPrimitive::to_f64(value).unwrap_or(f64::NAN)
}

/// Truncating conversion to i64; `None` when the integer part does not fit.
pub(crate) fn to_i64(value: &Magnitude) -> Option<i64> {
    bigdecimal::ToPrimitive::to_i64(value)
}

/// Rescale to exactly `scale` fractional digits using the engine's rounding
/// primitive. Callers validate that `scale` is non-negative.
pub(crate) fn with_scale(value: &Magnitude, scale: i64, mode: RoundingMode) -> Magnitude {
    value.with_scale_round(scale, engine_rounding(mode))
}

/// Divide `dividend` by `divisor`, rounding the quotient to exactly `scale`
/// fractional digits.
///
/// Callers validate that `scale` is non-negative and `divisor` nonzero.
/// Working from the exact integer quotient and remainder avoids the
/// mis-rounding a truncated high-precision division would introduce on ties
/// beyond the truncation point.
pub(crate) fn div_to_scale(
    dividend: &Magnitude,
    divisor: &Magnitude,
    scale: i64,
    mode: RoundingMode,
) -> Magnitude {
    let (dividend_digits, dividend_exp) = dividend.as_bigint_and_exponent();
    let (divisor_digits, divisor_exp) = divisor.as_bigint_and_exponent();

    // dividend / divisor = dividend_digits * 10^(divisor_exp - dividend_exp)
    //                      / divisor_digits
    // and the result is quotient * 10^-scale, so the integer quotient to
    // round is dividend_digits * 10^shift / divisor_digits.
    let shift = scale + divisor_exp - dividend_exp;
    let (numerator, denominator) = if shift >= 0 {
        (dividend_digits * power_of_ten(shift as u64), divisor_digits)
    } else {
        (dividend_digits, divisor_digits * power_of_ten(-shift as u64))
    };

    BigDecimal::new(round_quotient(&numerator, &denominator, mode), scale)
}

/// 10^exponent as a BigInt.
pub(crate) fn power_of_ten(exponent: u64) -> BigInt {
    num_traits::pow(BigInt::from(10), exponent as usize)
}

/// Integer division of `numerator / denominator`, rounded per `mode`.
///
/// This is where the seven rounding modes are mapped onto the exact
/// remainder: `2 * remainder` against the divisor decides nearest/tie cases,
/// and the quotient parity breaks HalfEven ties.
fn round_quotient(numerator: &BigInt, denominator: &BigInt, mode: RoundingMode) -> BigInt {
    let negative = (numerator.sign() == Sign::Minus) != (denominator.sign() == Sign::Minus);
    let numerator_abs = numerator.abs();
    let denominator_abs = denominator.abs();

    let quotient = &numerator_abs / &denominator_abs;
    let remainder = numerator_abs - &quotient * &denominator_abs;

    if remainder.is_zero() {
        return if negative { -quotient } else { quotient };
    }

    let twice_remainder = &remainder * BigInt::from(2);
    let round_away = match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp => twice_remainder >= denominator_abs,
        RoundingMode::HalfDown => twice_remainder > denominator_abs,
        RoundingMode::HalfEven => match twice_remainder.cmp(&denominator_abs) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => !(&quotient % BigInt::from(2)).is_zero(),
        },
    };

    let rounded = if round_away {
        quotient + BigInt::from(1)
    } else {
        quotient
    };
    if negative {
        -rounded
    } else {
        rounded
    }
}

/// Map a core rounding mode onto the engine's equivalent.
fn engine_rounding(mode: RoundingMode) -> EngineRounding {
    match mode {
        RoundingMode::Up => EngineRounding::Up,
        RoundingMode::Down => EngineRounding::Down,
        RoundingMode::Ceiling => EngineRounding::Ceiling,
        RoundingMode::Floor => EngineRounding::Floor,
        RoundingMode::HalfUp => EngineRounding::HalfUp,
        RoundingMode::HalfDown => EngineRounding::HalfDown,
        RoundingMode::HalfEven => EngineRounding::HalfEven,
    }
}
