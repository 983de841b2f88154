// ============================================================================
// Numeric Module
// Decimal value type, rounding, errors, and the division policy
// ============================================================================
//
// This module provides:
// - Deci: immutable arbitrary-precision decimal with canonical equality
// - RoundingMode: the seven supported rounding strategies
// - DivisionPolicy: process-wide default scale and rounding for `/`
// - DeciError / DeciResult: the crate's error surface
// - consts: lazily parsed well-known values (PI, E, HALF, ...)

mod deci;
mod engine;
mod errors;
mod policy;
mod rounding;

pub mod consts;

pub use deci::Deci;
pub use errors::{DeciError, DeciResult};
pub use policy::{division_policy, reset_division_policy, set_division_policy, DivisionPolicy};
pub use rounding::RoundingMode;
