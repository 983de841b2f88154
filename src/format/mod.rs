// ============================================================================
// Format Module
// Human-facing renderings of decimal values
// ============================================================================
//
// This module provides:
// - format_with_separator / format_currency / format_percent
// - to_scientific_notation: normalized d.ddd E notation
// - to_words: English cardinal words for the integer part
// - pad: fixed-width alignment

use crate::numeric::{consts, Deci, DeciResult, RoundingMode};

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Indexed by thousand-group position, low to high; i64 tops out in the
// quintillions.
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

impl Deci {
    /// Render with `separator` between thousands groups of the integer part.
    /// Sign and fractional digits pass through untouched.
    pub fn format_with_separator(&self, separator: char) -> String {
        let text = self.to_string();
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        let (integer, fraction) = match unsigned.find('.') {
            Some(index) => (&unsigned[..index], Some(&unsigned[index + 1..])),
            None => (unsigned, None),
        };

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (position, digit) in integer.chars().enumerate() {
            if position > 0 && (integer.len() - position) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }

        match fraction {
            Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// Render as an amount of money: half-up rounded to `scale` digits,
    /// comma-grouped, with `symbol` between the sign and the digits
    /// (`-$1,234.50`).
    ///
    /// # Errors
    /// Returns `InvalidScale` when `scale` is negative.
    pub fn format_currency(&self, symbol: &str, scale: i64) -> DeciResult<String> {
        let formatted = self
            .set_scale(scale, RoundingMode::HalfUp)?
            .format_with_separator(',');
        Ok(match formatted.strip_prefix('-') {
            Some(rest) => format!("-{}{}", symbol, rest),
            None => format!("{}{}", symbol, formatted),
        })
    }

    /// Render as a percentage: the value times 100, half-up rounded to
    /// `scale` digits, with a trailing `%`.
    ///
    /// # Errors
    /// Returns `InvalidScale` when `scale` is negative.
    pub fn format_percent(&self, scale: i64) -> DeciResult<String> {
        let scaled = (self * &*consts::HUNDRED).set_scale(scale, RoundingMode::HalfUp)?;
        Ok(format!("{}%", scaled))
    }

    /// Render in normalized scientific notation with `precision` fractional
    /// mantissa digits, e.g. `1.23E+4` or `-5.0E-3`. Zero renders as
    /// `0.0E+0`.
    ///
    /// # Errors
    /// Returns `InvalidScale` when `precision` is negative.
    pub fn to_scientific_notation(&self, precision: i64) -> DeciResult<String> {
        if self.is_zero() {
            return Ok("0.0E+0".to_string());
        }

        let text = self.abs().to_string();
        let point = text.find('.').unwrap_or(text.len());
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        // Nonzero values always carry a nonzero digit.
        let first_significant = digits.find(|c: char| c != '0').unwrap_or_default();
        let mut exponent = point as i64 - first_significant as i64 - 1;

        let significant = &digits[first_significant..];
        let mantissa_text = if significant.len() > 1 {
            format!("{}.{}", &significant[..1], &significant[1..])
        } else {
            format!("{}.0", significant)
        };
        let mantissa: Deci = mantissa_text.parse()?;
        let mut rounded = mantissa.set_scale(precision, RoundingMode::HalfUp)?;

        // Rounding can carry the mantissa up to exactly 10; renormalize.
        let ten = Deci::ten();
        if rounded >= ten {
            rounded = rounded
                .divide(&ten, precision, RoundingMode::HalfUp)?
                .set_scale(precision, RoundingMode::HalfUp)?;
            exponent += 1;
        }

        let sign = if self.is_negative() { "-" } else { "" };
        if exponent >= 0 {
            Ok(format!("{}{}E+{}", sign, rounded, exponent))
        } else {
            Ok(format!("{}{}E{}", sign, rounded, exponent))
        }
    }

    /// English cardinal words for the integer part, e.g. `"one thousand two
    /// hundred thirty four"`. Fractional digits are ignored; integer parts
    /// beyond the `i64` range render as `"number too large"`.
    pub fn to_words(&self) -> String {
        let text = self.to_string();
        let integer_text = text.split('.').next().unwrap_or("0");
        let value: i64 = match integer_text.parse() {
            Ok(parsed) => parsed,
            Err(_) => return "number too large".to_string(),
        };

        if value == 0 {
            return "zero".to_string();
        }

        let negative = value < 0;
        let mut magnitude = value.unsigned_abs();
        let mut groups: Vec<String> = Vec::new();
        let mut scale_index = 0;
        while magnitude > 0 {
            let group = (magnitude % 1000) as usize;
            if group != 0 {
                let mut words = triple_to_words(group);
                if !SCALES[scale_index].is_empty() {
                    words.push(' ');
                    words.push_str(SCALES[scale_index]);
                }
                groups.push(words);
            }
            magnitude /= 1000;
            scale_index += 1;
        }

        groups.reverse();
        let body = groups.join(" ");
        if negative {
            format!("negative {}", body)
        } else {
            body
        }
    }

    /// Fixed-width rendering, filled with `pad_char` on the left
    /// (`left = true`) or the right. Values already at least `width` wide
    /// are returned unchanged.
    pub fn pad(&self, width: usize, pad_char: char, left: bool) -> String {
        let text = self.to_string();
        if text.len() >= width {
            return text;
        }
        let fill: String = std::iter::repeat(pad_char)
            .take(width - text.len())
            .collect();
        if left {
            format!("{}{}", fill, text)
        } else {
            format!("{}{}", text, fill)
        }
    }
}

/// Words for a 1..=999 group, without a scale suffix.
fn triple_to_words(group: usize) -> String {
    let mut parts: Vec<String> = Vec::new();
    let hundreds = group / 100;
    let rest = group % 100;

    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds]));
    }
    if rest >= 20 {
        if rest % 10 > 0 {
            parts.push(format!("{} {}", TENS[rest / 10], ONES[rest % 10]));
        } else {
            parts.push(TENS[rest / 10].to_string());
        }
    } else if rest > 0 {
        parts.push(ONES[rest].to_string());
    }

    parts.join(" ")
}
