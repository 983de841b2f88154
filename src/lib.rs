// ============================================================================
// Candec Library
// Canonical arbitrary-precision decimals for financial calculation
// ============================================================================

//! # Candec
//!
//! An arbitrary-precision decimal value type with canonical equality,
//! built for financial calculation.
//!
//! ## Features
//!
//! - **Forgiving literals**: `.` and `,` both accepted as decimal or grouping
//!   separator, resolved by position (`"1.234,56"` and `"1,234.56"` are the
//!   same value)
//! - **Scale-independent equality and hashing**: `2`, `2.0`, and `2.00`
//!   compare and hash as one value
//! - **Process-wide division policy** controlling the scale and rounding of
//!   the `/` operator
//! - **Seven rounding modes**, plus derived algorithms (sqrt, pow, modulo,
//!   round-to-nearest, significant digits)
//! - **Aggregates and bulk transforms** over decimal slices
//!
//! ## Example
//!
//! ```rust
//! use candec::prelude::*;
//!
//! let price: Deci = "1.234,56".parse()?;
//! let quantity = Deci::from(3);
//! let total = &price * &quantity;
//! assert_eq!(total.to_string(), "3703.68");
//!
//! // The division operator follows the process-wide policy.
//! let unit = total.checked_div(&quantity)?;
//! assert_eq!(unit, price);
//!
//! // Explicit scale and rounding when the policy should not apply.
//! let rounded = price.divide(&Deci::from(7), 2, RoundingMode::HalfUp)?;
//! assert_eq!(rounded.to_string(), "176.37");
//! # Ok::<(), DeciError>(())
//! ```

pub mod bulk;
pub mod format;
pub mod math;
pub mod numeric;
pub mod parser;
pub mod stats;
pub mod validate;

// Re-exports for convenience
pub mod prelude {
    pub use crate::math::DEFAULT_SQRT_PRECISION;
    pub use crate::numeric::consts;
    pub use crate::numeric::{
        division_policy, reset_division_policy, set_division_policy, Deci, DeciError, DeciResult,
        DivisionPolicy, RoundingMode,
    };
    pub use crate::stats::VarianceKind;
    pub use crate::validate::is_valid_literal;
}
