// ============================================================================
// Bulk Module
// Element-wise and windowed transforms over decimal slices
// ============================================================================
//
// Transforms allocate a fresh Vec and never mutate their input. Divisions run
// under the active division policy; the only fallible operations are the ones
// a caller-supplied divisor, sum, or scale can invalidate.

use crate::numeric::{consts, Deci, DeciError, DeciResult, RoundingMode};

/// Product of all values; 1 for an empty slice.
pub fn product(values: &[Deci]) -> Deci {
    values
        .iter()
        .fold(Deci::one(), |accumulated, value| &accumulated * value)
}

/// Add `addend` to every value.
pub fn add_to_all(values: &[Deci], addend: &Deci) -> Vec<Deci> {
    values.iter().map(|value| value + addend).collect()
}

/// Subtract `subtrahend` from every value.
pub fn subtract_from_all(values: &[Deci], subtrahend: &Deci) -> Vec<Deci> {
    values.iter().map(|value| value - subtrahend).collect()
}

/// Multiply every value by `factor`.
pub fn multiply_all_by(values: &[Deci], factor: &Deci) -> Vec<Deci> {
    values.iter().map(|value| value * factor).collect()
}

/// Divide every value by `divisor` under the active division policy.
///
/// # Errors
/// Returns `DivisionByZero` when the divisor is zero.
pub fn divide_all_by(values: &[Deci], divisor: &Deci) -> DeciResult<Vec<Deci>> {
    values
        .iter()
        .map(|value| value.checked_div(divisor))
        .collect()
}

/// Apply a percentage change to every value: `value * (1 + percent / 100)`.
pub fn apply_percentage_change(values: &[Deci], percent: &Deci) -> Vec<Deci> {
    let factor = Deci::one() + percent / &*consts::HUNDRED;
    multiply_all_by(values, &factor)
}

/// Rescale values linearly into `[0, 1]` over the observed range.
///
/// A constant slice has no spread to normalize over and is returned as is.
pub fn normalize(values: &[Deci]) -> Vec<Deci> {
    let (Some(low), Some(high)) = (crate::stats::min(values), crate::stats::max(values)) else {
        return Vec::new();
    };
    let spread = &high - &low;
    if spread.is_zero() {
        return values.to_vec();
    }
    values
        .iter()
        .map(|value| &(value - &low) / &spread)
        .collect()
}

/// Rescale values proportionally so they sum to `target`.
///
/// # Errors
/// Returns `DivisionByZero` when the current sum is zero.
pub fn scale_to_sum(values: &[Deci], target: &Deci) -> DeciResult<Vec<Deci>> {
    let current: Deci = values.iter().sum();
    if current.is_zero() {
        return Err(DeciError::DivisionByZero);
    }
    values
        .iter()
        .map(|value| (value * target).checked_div(&current))
        .collect()
}

/// Round every value to `scale` fractional digits under `mode`.
///
/// # Errors
/// Returns `InvalidScale` when `scale` is negative.
pub fn round_all(values: &[Deci], scale: i64, mode: RoundingMode) -> DeciResult<Vec<Deci>> {
    values
        .iter()
        .map(|value| value.set_scale(scale, mode))
        .collect()
}

/// Keep the values inside the inclusive `[low, high]` range.
pub fn filter_in_range(values: &[Deci], low: &Deci, high: &Deci) -> Vec<Deci> {
    values
        .iter()
        .filter(|value| *value >= low && *value <= high)
        .cloned()
        .collect()
}

/// Drop values outside `multiplier` interquartile ranges of the quartiles.
///
/// The result is sorted. Fewer than four values cannot establish quartiles,
/// so the slice is returned sorted but unfiltered.
pub fn filter_outliers(values: &[Deci], multiplier: &Deci) -> Vec<Deci> {
    let mut sorted = values.to_vec();
    sorted.sort();
    if sorted.len() < 4 {
        return sorted;
    }

    let q1 = sorted[sorted.len() / 4].clone();
    let q3 = sorted[sorted.len() * 3 / 4].clone();
    let iqr = &q3 - &q1;
    let margin = &iqr * multiplier;
    let low = &q1 - &margin;
    let high = &q3 + &margin;

    sorted
        .into_iter()
        .filter(|value| *value >= low && *value <= high)
        .collect()
}

/// Running totals: element `i` is the sum of the first `i + 1` values.
pub fn cumulative_sum(values: &[Deci]) -> Vec<Deci> {
    let mut running = Deci::zero();
    values
        .iter()
        .map(|value| {
            running = &running + value;
            running.clone()
        })
        .collect()
}

/// Mean of each sliding window of `window` consecutive values.
///
/// A window of zero, or one longer than the slice, yields no averages.
pub fn moving_average(values: &[Deci], window: usize) -> Vec<Deci> {
    if window == 0 || window > values.len() {
        return Vec::new();
    }
    let size = Deci::from(window);
    values
        .windows(window)
        .map(|chunk| {
            let total: Deci = chunk.iter().sum();
            &total / &size
        })
        .collect()
}

/// Split into runs of consecutive values, breaking a run whenever a value
/// differs from its predecessor by more than `tolerance` in magnitude.
pub fn group_consecutive_similar(values: &[Deci], tolerance: &Deci) -> Vec<Vec<Deci>> {
    let mut groups: Vec<Vec<Deci>> = Vec::new();
    for value in values {
        match groups.last_mut() {
            Some(group)
                if group
                    .last()
                    .is_some_and(|previous| (value - previous).abs() <= *tolerance) =>
            {
                group.push(value.clone());
            },
            _ => groups.push(vec![value.clone()]),
        }
    }
    groups
}

/// Consecutive differences: element `i` is `values[i + 1] - values[i]`.
pub fn differences(values: &[Deci]) -> Vec<Deci> {
    values
        .windows(2)
        .map(|pair| &pair[1] - &pair[0])
        .collect()
}

/// The `n` largest values, in descending order.
pub fn top_n(values: &[Deci], n: usize) -> Vec<Deci> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));
    sorted.truncate(n);
    sorted
}

/// The `n` smallest values, in ascending order.
pub fn bottom_n(values: &[Deci], n: usize) -> Vec<Deci> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted.truncate(n);
    sorted
}
