// ============================================================================
// Parser Module
// Decimal literal validation and normalization
// ============================================================================
//
// This module provides:
// - The accepted decimal literal grammar (`.`/`,` as decimal or grouping
//   separator, resolved by position)
// - normalize_decimal_string: the bare string transformation
// - normalize_literal: validation plus normalization, as used by the Deci
//   constructors

mod normalizer;

pub use normalizer::{is_valid_literal, normalize_decimal_string, normalize_literal};
