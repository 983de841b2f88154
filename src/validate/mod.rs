// ============================================================================
// Validate Module
// Value predicates and guarded arithmetic
// ============================================================================

use crate::numeric::Deci;

pub use crate::parser::is_valid_literal;

impl Deci {
    /// Check membership in the inclusive `[low, high]` range.
    pub fn is_in_range(&self, low: &Deci, high: &Deci) -> bool {
        self >= low && self <= high
    }

    /// Check whether the value carries no fractional part. Trailing zeros do
    /// not count: `2.00` is whole.
    pub fn is_whole(&self) -> bool {
        let text = self.to_string();
        match text.find('.') {
            None => true,
            Some(index) => text[index + 1..].chars().all(|c| c == '0'),
        }
    }

    /// Even test for whole values; `None` when the value has a fractional
    /// part or its integer part does not fit in an `i64`.
    pub fn is_even(&self) -> Option<bool> {
        if !self.is_whole() {
            return None;
        }
        let value = self.to_i64()?;
        Some(value % 2 == 0)
    }

    /// Odd test for whole values; `None` under the same conditions as
    /// [`Deci::is_even`].
    pub fn is_odd(&self) -> Option<bool> {
        self.is_even().map(|even| !even)
    }

    /// Check whether the canonical form uses at most `limit` fractional
    /// digits.
    pub fn has_decimal_places(&self, limit: i64) -> bool {
        self.scale() <= limit
    }

    /// Check equality within an absolute tolerance (inclusive).
    pub fn approx_eq(&self, other: &Deci, tolerance: &Deci) -> bool {
        (self - other).abs() <= *tolerance
    }

    /// Divide under the active division policy, substituting `default` for a
    /// zero divisor.
    pub fn safe_divide(&self, divisor: &Deci, default: &Deci) -> Deci {
        self.checked_div(divisor)
            .unwrap_or_else(|_| default.clone())
    }
}
