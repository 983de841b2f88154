// ============================================================================
// Division Policy
// Process-wide default scale and rounding for the unscaled division operator
// ============================================================================

use crate::numeric::{DeciError, DeciResult, RoundingMode};
use parking_lot::RwLock;

/// Default scale and rounding strategy applied by the unscaled division
/// operator.
///
/// Exactly one policy is active process-wide at any time; it is swapped as a
/// whole, so readers never observe the fractional digits of one policy paired
/// with the rounding mode of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionPolicy {
    fractional_digits: i64,
    rounding_mode: RoundingMode,
}

impl DivisionPolicy {
    /// The library default: 20 fractional digits, rounded half-up.
    pub const DEFAULT: DivisionPolicy = DivisionPolicy {
        fractional_digits: 20,
        rounding_mode: RoundingMode::HalfUp,
    };

    /// Create a policy.
    ///
    /// # Errors
    /// Returns `InvalidScale` when `fractional_digits` is negative.
    pub fn new(fractional_digits: i64, rounding_mode: RoundingMode) -> DeciResult<Self> {
        if fractional_digits < 0 {
            return Err(DeciError::InvalidScale(fractional_digits));
        }
        Ok(DivisionPolicy {
            fractional_digits,
            rounding_mode,
        })
    }

    /// Number of digits kept to the right of the decimal separator.
    pub fn fractional_digits(&self) -> i64 {
        self.fractional_digits
    }

    /// Rounding mode used when trimming to the fractional digit count.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }
}

impl Default for DivisionPolicy {
    fn default() -> Self {
        DivisionPolicy::DEFAULT
    }
}

static DIVISION_POLICY: RwLock<DivisionPolicy> = RwLock::new(DivisionPolicy::DEFAULT);

/// The currently active division policy.
pub fn division_policy() -> DivisionPolicy {
    *DIVISION_POLICY.read()
}

/// Replace the process-wide division policy.
///
/// Takes effect immediately for all subsequent unscaled divisions on every
/// thread.
pub fn set_division_policy(policy: DivisionPolicy) {
    tracing::debug!(
        fractional_digits = policy.fractional_digits(),
        rounding_mode = ?policy.rounding_mode(),
        "division policy updated"
    );
    *DIVISION_POLICY.write() = policy;
}

/// Restore the division policy to its library default.
pub fn reset_division_policy() {
    set_division_policy(DivisionPolicy::DEFAULT);
}
