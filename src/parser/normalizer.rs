// ============================================================================
// Literal Normalizer
// Turns user-supplied decimal literals into canonical dot-decimal strings
// ============================================================================

use crate::numeric::{DeciError, DeciResult};
use regex::Regex;
use std::sync::LazyLock;

/// Grammar for accepted decimal literals.
///
/// Accepts an optional leading sign, then either grouped integer digits in
/// runs of 1-3 separated by `.` or `,` (optionally followed by a fractional
/// separator and digits), a plain digit run with an optional single separator,
/// or a leading separator followed by digits (e.g. `.5`).
static DECIMAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:\d{1,3}(?:[.,]\d{3})*(?:[.,]\d*)?|\d+[.,]\d*|\d+|[.,]\d+)$")
        .expect("decimal literal pattern is valid")
});

/// Check whether a string is an acceptable decimal literal.
///
/// Leading/trailing whitespace is ignored; blank input is invalid.
pub fn is_valid_literal(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && DECIMAL_REGEX.is_match(trimmed)
}

/// Validate a raw literal against the grammar and normalize it to canonical
/// dot-decimal form.
///
/// # Errors
/// Returns `InvalidLiteral` when the trimmed input is blank or does not match
/// the accepted grammar.
pub fn normalize_literal(raw: &str) -> DeciResult<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        tracing::debug!(literal = raw, "rejected blank decimal literal");
        return Err(DeciError::InvalidLiteral {
            literal: raw.to_string(),
        });
    }

    if !DECIMAL_REGEX.is_match(trimmed) {
        tracing::debug!(literal = raw, "literal does not match decimal grammar");
        return Err(DeciError::InvalidLiteral {
            literal: raw.to_string(),
        });
    }

    let normalized = normalize_decimal_string(raw);
    if normalized != trimmed {
        tracing::debug!(literal = raw, normalized = %normalized, "normalized decimal literal");
    }

    Ok(normalized)
}

/// Normalize a decimal string without validating it.
///
/// The rightmost `.` or `,` is treated as the decimal point; every other
/// separator is grouping and removed. An empty integer part becomes `"0"`,
/// and a sign-only input collapses to `"0"`/`"-0"`. The fractional digits are
/// kept verbatim. This is a pure string transformation: it never checks the
/// grammar and never touches the arithmetic engine, so garbage input produces
/// garbage output (callers wanting validation use [`normalize_literal`]).
pub fn normalize_decimal_string(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let trimmed = raw.trim();
    let negative = trimmed.starts_with('-');
    let unsigned = if negative || trimmed.starts_with('+') {
        &trimmed[1..]
    } else {
        trimmed
    };

    if unsigned.is_empty() {
        return if negative { "-0".to_string() } else { "0".to_string() };
    }

    let body = match unsigned.rfind(['.', ',']) {
        None => unsigned.to_string(),
        Some(index) => {
            let integer: String = unsigned[..index]
                .chars()
                .filter(|c| *c != '.' && *c != ',')
                .collect();
            let fraction = &unsigned[index + 1..];
            if integer.is_empty() {
                format!("0.{}", fraction)
            } else {
                format!("{}.{}", integer, fraction)
            }
        },
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize_decimal_string(""), "");
        assert_eq!(normalize_decimal_string("   "), "0");
    }

    #[test]
    fn test_normalize_sign_only() {
        assert_eq!(normalize_decimal_string("-"), "-0");
        assert_eq!(normalize_decimal_string("-   "), "-0");
        assert_eq!(normalize_decimal_string("+"), "0");
        assert_eq!(normalize_decimal_string("   +   "), "0");
    }

    #[test]
    fn test_normalize_plain_integers() {
        assert_eq!(normalize_decimal_string("0"), "0");
        assert_eq!(normalize_decimal_string("000"), "000");
        assert_eq!(normalize_decimal_string("12"), "12");
        assert_eq!(normalize_decimal_string("-12"), "-12");
        assert_eq!(normalize_decimal_string("+12"), "12");
    }

    #[test]
    fn test_normalize_single_separator_is_decimal_point() {
        assert_eq!(normalize_decimal_string("1,234"), "1.234");
        assert_eq!(normalize_decimal_string("1.234"), "1.234");
    }

    #[test]
    fn test_normalize_mixed_separators() {
        assert_eq!(normalize_decimal_string("1,234.56"), "1234.56");
        assert_eq!(normalize_decimal_string("1.234,56"), "1234.56");
        assert_eq!(normalize_decimal_string("-1.234,56"), "-1234.56");
        assert_eq!(normalize_decimal_string("+1.234,56"), "1234.56");
    }

    #[test]
    fn test_normalize_missing_integer_part() {
        assert_eq!(normalize_decimal_string(".5"), "0.5");
        assert_eq!(normalize_decimal_string(",5"), "0.5");
        assert_eq!(normalize_decimal_string("-.5"), "-0.5");
        assert_eq!(normalize_decimal_string("-,5"), "-0.5");
        assert_eq!(normalize_decimal_string("+.5"), "0.5");
    }

    #[test]
    fn test_normalize_multiple_separators_keep_only_last() {
        assert_eq!(normalize_decimal_string("1,2,3"), "12.3");
        assert_eq!(normalize_decimal_string("1.2.3"), "12.3");
        assert_eq!(normalize_decimal_string("1,2.3"), "12.3");
        assert_eq!(normalize_decimal_string("1.2,3"), "12.3");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_decimal_string("  1,234.56  "), "1234.56");
    }

    #[test]
    fn test_valid_literals_match_grammar() {
        let valid = [
            "-.5",
            "0",
            "1.",
            ".1",
            ",0",
            "123",
            "-456",
            "0.1",
            "123.456",
            "-0.789",
            "1.000",
            "-123.00",
            "0.0001",
            "9999999999.9999",
            "1,230.98",
            "1.230,98",
            "1,234,567.89",
            "1.234.567,89",
            "1,000",
            "1,000.5",
            "1.000,5",
        ];
        for input in valid {
            assert!(is_valid_literal(input), "expected '{}' to be valid", input);
        }
    }

    #[test]
    fn test_invalid_literals_rejected() {
        let invalid = ["", "   ", ".", ",", "abc", "--1", "1.2.3", "1e5"];
        for input in invalid {
            assert!(!is_valid_literal(input), "expected '{}' to be invalid", input);
        }
    }

    #[test]
    fn test_normalize_literal_validates_first() {
        assert_eq!(normalize_literal("1.234,56").unwrap(), "1234.56");
        assert_eq!(normalize_literal("  42  ").unwrap(), "42");
        assert!(matches!(
            normalize_literal(""),
            Err(DeciError::InvalidLiteral { .. })
        ));
        assert!(matches!(
            normalize_literal("1.2.3"),
            Err(DeciError::InvalidLiteral { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_normalization_is_idempotent(input in r"[-+]?[0-9]{0,4}([.,][0-9]{0,4}){0,3}") {
            let once = normalize_decimal_string(&input);
            let twice = normalize_decimal_string(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_valid_literals_normalize_to_dot_decimal(input in r"[-+]?[0-9]{1,3}([.,][0-9]{3}){0,2}([.,][0-9]{1,4})?") {
            prop_assume!(is_valid_literal(&input));
            let normalized = normalize_decimal_string(&input);
            // At most one separator survives, and it is always a dot.
            prop_assert!(!normalized.contains(','));
            prop_assert!(normalized.matches('.').count() <= 1);
        }
    }
}
