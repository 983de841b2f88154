// ============================================================================
// Math Module
// Derived algorithms built on the decimal core
// ============================================================================
//
// This module provides:
// - sqrt: Newton-Raphson square root at a caller-chosen precision
// - pow: integer exponentiation by squaring, negative exponents via reciprocal
// - modulo / remainder: truncated and rounded quotient residues
// - round_to_nearest / round_to_significant_digits

use crate::numeric::{consts, Deci, DeciError, DeciResult, RoundingMode};

/// Fractional digits used when a square root is taken without an explicit
/// precision, e.g. by the standard deviation aggregate.
pub const DEFAULT_SQRT_PRECISION: i64 = 10;

/// Iteration cap for Newton-Raphson; convergence normally breaks out long
/// before this.
const SQRT_MAX_ITERATIONS: usize = 50;

impl Deci {
    /// Square root to `precision` fractional digits, via Newton-Raphson.
    ///
    /// Iteration steps divide under the active division policy; the result is
    /// rescaled to exactly `precision` digits with half-up rounding. The loop
    /// terminates as soon as two successive guesses agree to two digits
    /// beyond the requested precision.
    ///
    /// # Errors
    /// Returns `NegativeRadicand` for negative values and `InvalidScale` for
    /// a negative precision.
    pub fn sqrt(&self, precision: i64) -> DeciResult<Deci> {
        if self.is_negative() {
            return Err(DeciError::NegativeRadicand);
        }
        if precision < 0 {
            return Err(DeciError::InvalidScale(precision));
        }
        if self.is_zero() {
            return Ok(Deci::zero());
        }
        if *self == Deci::one() {
            return Ok(Deci::one());
        }

        let two = &*consts::TWO;
        let seed = self.checked_div(two)?;
        // A subunit radicand can halve to zero under a coarse policy; the
        // value itself is always a usable positive seed.
        let mut guess = if seed.is_zero() { self.clone() } else { seed };

        for _ in 0..SQRT_MAX_ITERATIONS {
            let next = (&guess + &self.checked_div(&guess)?).checked_div(two)?;
            let delta = (&next - &guess)
                .abs()
                .set_scale(precision + 2, RoundingMode::HalfUp)?;
            guess = next;
            if delta.is_zero() {
                break;
            }
        }

        guess.set_scale(precision, RoundingMode::HalfUp)
    }

    /// Raise to an integer power.
    ///
    /// The exponent must carry no fractional part; negative exponents produce
    /// the reciprocal of the positive power under the active division policy.
    ///
    /// # Errors
    /// Returns `NonIntegerExponent` when the exponent has a fractional part,
    /// `ExponentOutOfRange` when its integer value does not fit in an `i64`,
    /// and `DivisionByZero` for a negative power of zero.
    pub fn pow(&self, exponent: &Deci) -> DeciResult<Deci> {
        if exponent.is_zero() {
            return Ok(Deci::one());
        }
        if *exponent == Deci::one() {
            return Ok(self.clone());
        }

        let truncated = exponent.set_scale(0, RoundingMode::Down)?;
        if truncated != *exponent {
            return Err(DeciError::NonIntegerExponent);
        }
        let magnitude = truncated.to_i64().ok_or(DeciError::ExponentOutOfRange)?;

        if magnitude >= 0 {
            Ok(self.pow_unsigned(magnitude as u64))
        } else {
            let positive = self.pow_unsigned(magnitude.unsigned_abs());
            Deci::one().checked_div(&positive)
        }
    }

    /// Exponentiation by squaring for non-negative integer exponents.
    pub(crate) fn pow_unsigned(&self, mut exponent: u64) -> Deci {
        let mut base = self.clone();
        let mut result = Deci::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = &result * &base;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Residue after removing the truncated quotient: `self - trunc(self /
    /// divisor) * divisor`. The result carries the sign of `self`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the divisor is zero.
    pub fn modulo(&self, divisor: &Deci) -> DeciResult<Deci> {
        if divisor.is_zero() {
            return Err(DeciError::DivisionByZero);
        }
        let quotient = self.checked_div(divisor)?.set_scale(0, RoundingMode::Down)?;
        Ok(self - &(&quotient * divisor))
    }

    /// Residue after removing the half-up-rounded quotient. Unlike
    /// [`Deci::modulo`] the quotient rounds to the nearest integer, so the
    /// result may take either sign and never exceeds half the divisor in
    /// magnitude.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the divisor is zero.
    pub fn remainder(&self, divisor: &Deci) -> DeciResult<Deci> {
        if divisor.is_zero() {
            return Err(DeciError::DivisionByZero);
        }
        let quotient = self
            .checked_div(divisor)?
            .set_scale(0, RoundingMode::HalfUp)?;
        Ok(self - &(&quotient * divisor))
    }

    /// Round to the nearest multiple of `multiple`, ties away from zero.
    /// The sign of the multiple does not matter: the reachable values of a
    /// step and its negation are the same.
    ///
    /// # Errors
    /// Returns `InvalidMultiple` when `multiple` is zero.
    pub fn round_to_nearest(&self, multiple: &Deci) -> DeciResult<Deci> {
        if multiple.is_zero() {
            return Err(DeciError::InvalidMultiple);
        }
        let steps = self.divide(multiple, 0, RoundingMode::HalfUp)?;
        Ok(&steps * multiple)
    }

    /// Keep only the leading `digits` significant digits, rounding half-up.
    ///
    /// When the value has more integer digits than requested, the surplus
    /// positions are zeroed by dividing out and re-applying the matching
    /// power of ten, so `245` at two significant digits becomes `250`.
    ///
    /// # Errors
    /// Returns `InvalidDigitCount` unless `digits` is strictly positive.
    pub fn round_to_significant_digits(&self, digits: i64) -> DeciResult<Deci> {
        if digits <= 0 {
            return Err(DeciError::InvalidDigitCount(digits));
        }
        if self.is_zero() {
            return Ok(Deci::zero());
        }

        let text = self.abs().to_string();
        let point = text.find('.');
        let first_significant = text
            .find(|c: char| c != '0' && c != '.')
            .unwrap_or_default();

        match point {
            // Subunit magnitude like 0.001234: leading fractional zeros do
            // not count as significant.
            Some(point) if first_significant > point => {
                let leading_zeros = (first_significant - point - 1) as i64;
                self.set_scale(digits + leading_zeros, RoundingMode::HalfUp)
            },
            _ => {
                let integer_digits = (point.unwrap_or(text.len()) - first_significant) as i64;
                let target_scale = digits - integer_digits;
                if target_scale >= 0 {
                    self.set_scale(target_scale, RoundingMode::HalfUp)
                } else {
                    let factor = Deci::ten().pow_unsigned((-target_scale) as u64);
                    let shifted = self.divide(&factor, 0, RoundingMode::HalfUp)?;
                    Ok(&shifted * &factor)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::reset_division_policy;
    use serial_test::serial;

    fn deci(text: &str) -> Deci {
        text.parse().unwrap()
    }

    #[test]
    #[serial(division_policy)]
    fn test_sqrt_basic() {
        reset_division_policy();
        assert_eq!(deci("2").sqrt(3).unwrap().to_string(), "1.414");
        assert_eq!(deci("4").sqrt(DEFAULT_SQRT_PRECISION).unwrap(), deci("2"));
        assert_eq!(deci("4").sqrt(0).unwrap().to_string(), "2");
        assert_eq!(deci("9").sqrt(5).unwrap(), deci("3"));
        assert_eq!(deci("0.25").sqrt(2).unwrap(), deci("0.5"));
    }

    #[test]
    #[serial(division_policy)]
    fn test_sqrt_ten_digit_precision() {
        reset_division_policy();
        // sqrt(2) = 1.41421356237309504880...
        assert_eq!(deci("2").sqrt(10).unwrap().to_string(), "1.4142135624");
    }

    #[test]
    fn test_sqrt_trivial_values() {
        assert_eq!(Deci::zero().sqrt(5).unwrap(), Deci::zero());
        assert_eq!(Deci::one().sqrt(5).unwrap(), Deci::one());
    }

    #[test]
    fn test_sqrt_errors() {
        assert_eq!(deci("-1").sqrt(3), Err(DeciError::NegativeRadicand));
        assert_eq!(deci("2").sqrt(-1), Err(DeciError::InvalidScale(-1)));
    }

    #[test]
    fn test_pow_positive_exponents() {
        assert_eq!(deci("2").pow(&deci("10")).unwrap(), deci("1024"));
        assert_eq!(deci("2").pow(&deci("0")).unwrap(), Deci::one());
        assert_eq!(deci("2").pow(&deci("1")).unwrap(), deci("2"));
        assert_eq!(deci("-2").pow(&deci("3")).unwrap(), deci("-8"));
        assert_eq!(deci("1.5").pow(&deci("2")).unwrap(), deci("2.25"));
    }

    #[test]
    fn test_pow_integer_valued_exponent_with_scale() {
        // 3.0 carries a fractional part of zero, which still counts as
        // integral.
        assert_eq!(deci("2").pow(&deci("3.0")).unwrap(), deci("8"));
    }

    #[test]
    #[serial(division_policy)]
    fn test_pow_negative_exponents() {
        reset_division_policy();
        assert_eq!(deci("2").pow(&deci("-2")).unwrap(), deci("0.25"));
        assert_eq!(deci("10").pow(&deci("-1")).unwrap(), deci("0.1"));
        assert_eq!(
            deci("0").pow(&deci("-1")),
            Err(DeciError::DivisionByZero)
        );
    }

    #[test]
    fn test_pow_rejects_fractional_exponent() {
        assert_eq!(
            deci("2").pow(&deci("0.5")),
            Err(DeciError::NonIntegerExponent)
        );
        assert_eq!(
            deci("2").pow(&deci("-1.5")),
            Err(DeciError::NonIntegerExponent)
        );
    }

    #[test]
    fn test_pow_rejects_oversized_exponent() {
        assert_eq!(
            deci("2").pow(&deci("99999999999999999999")),
            Err(DeciError::ExponentOutOfRange)
        );
    }

    #[test]
    #[serial(division_policy)]
    fn test_modulo_truncates_quotient() {
        reset_division_policy();
        assert_eq!(deci("10").modulo(&deci("3")).unwrap(), deci("1"));
        assert_eq!(deci("10").modulo(&deci("5")).unwrap(), Deci::zero());
        assert_eq!(deci("-10").modulo(&deci("3")).unwrap(), deci("-1"));
        assert_eq!(deci("7.5").modulo(&deci("2")).unwrap(), deci("1.5"));
        assert_eq!(
            deci("10").modulo(&Deci::zero()),
            Err(DeciError::DivisionByZero)
        );
    }

    #[test]
    #[serial(division_policy)]
    fn test_remainder_rounds_quotient() {
        reset_division_policy();
        // 11 / 3 rounds to 4, so the residue crosses zero.
        assert_eq!(deci("11").remainder(&deci("3")).unwrap(), deci("-1"));
        assert_eq!(deci("10").remainder(&deci("3")).unwrap(), deci("1"));
        assert_eq!(deci("10").remainder(&deci("5")).unwrap(), Deci::zero());
        assert_eq!(
            deci("10").remainder(&Deci::zero()),
            Err(DeciError::DivisionByZero)
        );
    }

    #[test]
    fn test_round_to_nearest() {
        assert_eq!(deci("4.7").round_to_nearest(&deci("5")).unwrap(), deci("5"));
        assert_eq!(
            deci("0.37").round_to_nearest(&deci("0.5")).unwrap(),
            deci("0.5")
        );
        assert_eq!(deci("12").round_to_nearest(&deci("10")).unwrap(), deci("10"));
        assert_eq!(
            deci("-4.7").round_to_nearest(&deci("5")).unwrap(),
            deci("-5")
        );
        assert_eq!(
            deci("2.5").round_to_nearest(&Deci::one()).unwrap(),
            deci("3")
        );
    }

    #[test]
    fn test_round_to_nearest_rejects_zero_multiple() {
        assert_eq!(
            deci("5").round_to_nearest(&Deci::zero()),
            Err(DeciError::InvalidMultiple)
        );
    }

    #[test]
    fn test_round_to_nearest_negative_multiple_matches_positive() {
        assert_eq!(
            deci("4.7").round_to_nearest(&deci("-5")).unwrap(),
            deci("5")
        );
        assert_eq!(
            deci("-4.7").round_to_nearest(&deci("-5")).unwrap(),
            deci("-5")
        );
        assert_eq!(
            deci("0.37").round_to_nearest(&deci("-0.5")).unwrap(),
            deci("0.5")
        );
    }

    #[test]
    fn test_round_to_significant_digits() {
        assert_eq!(
            deci("123.456").round_to_significant_digits(3).unwrap(),
            deci("123")
        );
        assert_eq!(
            deci("123.456").round_to_significant_digits(4).unwrap(),
            deci("123.5")
        );
        assert_eq!(
            deci("0.001234").round_to_significant_digits(3).unwrap(),
            deci("0.00123")
        );
        assert_eq!(
            deci("-123.456").round_to_significant_digits(3).unwrap(),
            deci("-123")
        );
        assert_eq!(
            Deci::zero().round_to_significant_digits(5).unwrap(),
            Deci::zero()
        );
    }

    #[test]
    fn test_round_to_significant_digits_zeroes_surplus_positions() {
        assert_eq!(
            deci("245").round_to_significant_digits(2).unwrap(),
            deci("250")
        );
        assert_eq!(
            deci("987654").round_to_significant_digits(3).unwrap(),
            deci("988000")
        );
        assert_eq!(
            deci("-245").round_to_significant_digits(2).unwrap(),
            deci("-250")
        );
    }

    #[test]
    fn test_round_to_significant_digits_rejects_non_positive_count() {
        assert_eq!(
            deci("1.23").round_to_significant_digits(0),
            Err(DeciError::InvalidDigitCount(0))
        );
        assert_eq!(
            deci("1.23").round_to_significant_digits(-2),
            Err(DeciError::InvalidDigitCount(-2))
        );
    }
}
