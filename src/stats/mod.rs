// ============================================================================
// Statistics Module
// Aggregate calculations over decimal slices
// ============================================================================
//
// Every aggregate returns `Option`: `None` means the input cannot support the
// statistic (empty slice, too few samples, mismatched weights) rather than an
// arithmetic failure. Divisions run under the active division policy.

use crate::math::DEFAULT_SQRT_PRECISION;
use crate::numeric::Deci;

/// Divisor convention for variance and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceKind {
    /// Divide by `n`; the slice is the whole population.
    Population,
    /// Divide by `n - 1`; the slice is a sample, needs at least two values.
    Sample,
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[Deci]) -> Option<Deci> {
    if values.is_empty() {
        return None;
    }
    let total: Deci = values.iter().sum();
    total.checked_div(&Deci::from(values.len())).ok()
}

/// Middle value of the sorted slice; the mean of the two middle values when
/// the length is even. `None` for an empty slice.
pub fn median(values: &[Deci]) -> Option<Deci> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort();

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[middle].clone())
    } else {
        let pair_sum = &sorted[middle - 1] + &sorted[middle];
        pair_sum.checked_div(&Deci::from(2)).ok()
    }
}

/// Smallest value, `None` for an empty slice.
pub fn min(values: &[Deci]) -> Option<Deci> {
    values.iter().min().cloned()
}

/// Largest value, `None` for an empty slice.
pub fn max(values: &[Deci]) -> Option<Deci> {
    values.iter().max().cloned()
}

/// `max - min`, `None` for an empty slice.
pub fn range(values: &[Deci]) -> Option<Deci> {
    Some(max(values)? - min(values)?)
}

/// Sum of squared deviations from the mean.
pub fn sum_of_squares(values: &[Deci]) -> Option<Deci> {
    let center = mean(values)?;
    let total = values
        .iter()
        .map(|value| {
            let deviation = value - &center;
            &deviation * &deviation
        })
        .sum();
    Some(total)
}

/// Variance under the given divisor convention.
///
/// `Sample` needs at least two values; `Population` needs one.
pub fn variance(values: &[Deci], kind: VarianceKind) -> Option<Deci> {
    let divisor = match kind {
        VarianceKind::Population => values.len(),
        VarianceKind::Sample => {
            if values.len() < 2 {
                return None;
            }
            values.len() - 1
        },
    };
    sum_of_squares(values)?
        .checked_div(&Deci::from(divisor))
        .ok()
}

/// Standard deviation: the square root of [`variance`] at the default square
/// root precision.
pub fn std_deviation(values: &[Deci], kind: VarianceKind) -> Option<Deci> {
    variance(values, kind)?.sqrt(DEFAULT_SQRT_PRECISION).ok()
}

/// Weighted arithmetic mean.
///
/// `None` when the slices are empty, their lengths differ, or the weights
/// sum to zero.
pub fn weighted_average(values: &[Deci], weights: &[Deci]) -> Option<Deci> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }
    let weight_total: Deci = weights.iter().sum();
    if weight_total.is_zero() {
        return None;
    }
    let weighted_total: Deci = values
        .iter()
        .zip(weights)
        .map(|(value, weight)| value * weight)
        .sum();
    weighted_total.checked_div(&weight_total).ok()
}

/// Harmonic mean: `n / sum(1 / value)`.
///
/// Defined only for strictly positive values; `None` otherwise or for an
/// empty slice.
pub fn harmonic_mean(values: &[Deci]) -> Option<Deci> {
    if values.is_empty() || values.iter().any(|value| !value.is_positive()) {
        return None;
    }
    let mut reciprocal_sum = Deci::zero();
    for value in values {
        reciprocal_sum = reciprocal_sum + Deci::one().checked_div(value).ok()?;
    }
    Deci::from(values.len())
        .checked_div(&reciprocal_sum)
        .ok()
}

/// Count the values satisfying `predicate`.
pub fn count_where<F>(values: &[Deci], predicate: F) -> usize
where
    F: Fn(&Deci) -> bool,
{
    values.iter().filter(|value| predicate(value)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::reset_division_policy;
    use serial_test::serial;

    fn slice(texts: &[&str]) -> Vec<Deci> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    #[serial(division_policy)]
    fn test_mean() {
        reset_division_policy();
        assert_eq!(
            mean(&slice(&["1", "2", "3", "4"])),
            Some("2.5".parse().unwrap())
        );
        assert_eq!(mean(&slice(&["5"])), Some(Deci::from(5)));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    #[serial(division_policy)]
    fn test_median() {
        reset_division_policy();
        assert_eq!(
            median(&slice(&["3", "1", "2"])),
            Some(Deci::from(2))
        );
        assert_eq!(
            median(&slice(&["4", "1", "3", "2"])),
            Some("2.5".parse().unwrap())
        );
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_min_max_range() {
        let values = slice(&["3", "-1", "7", "2"]);
        assert_eq!(min(&values), Some("-1".parse().unwrap()));
        assert_eq!(max(&values), Some(Deci::from(7)));
        assert_eq!(range(&values), Some(Deci::from(8)));
        assert_eq!(range(&[]), None);
    }

    #[test]
    #[serial(division_policy)]
    fn test_variance_conventions() {
        reset_division_policy();
        let values = slice(&["2", "4", "4", "4", "5", "5", "7", "9"]);
        assert_eq!(
            variance(&values, VarianceKind::Population),
            Some(Deci::from(4))
        );
        assert_eq!(
            variance(&values, VarianceKind::Sample).unwrap().to_string(),
            "4.57142857142857142857"
        );
    }

    #[test]
    fn test_sample_variance_needs_two_values() {
        assert_eq!(variance(&slice(&["5"]), VarianceKind::Sample), None);
        assert_eq!(variance(&[], VarianceKind::Population), None);
    }

    #[test]
    #[serial(division_policy)]
    fn test_std_deviation() {
        reset_division_policy();
        let values = slice(&["2", "4", "4", "4", "5", "5", "7", "9"]);
        assert_eq!(
            std_deviation(&values, VarianceKind::Population),
            Some(Deci::from(2))
        );
        assert_eq!(
            std_deviation(&values, VarianceKind::Sample)
                .unwrap()
                .to_string(),
            "2.1380899353"
        );
    }

    #[test]
    #[serial(division_policy)]
    fn test_weighted_average() {
        reset_division_policy();
        let values = slice(&["70", "80", "90"]);
        let weights = slice(&["0.2", "0.3", "0.5"]);
        assert_eq!(
            weighted_average(&values, &weights),
            Some(Deci::from(83))
        );
    }

    #[test]
    fn test_weighted_average_degenerate_inputs() {
        let values = slice(&["1", "2"]);
        assert_eq!(weighted_average(&values, &slice(&["1"])), None);
        assert_eq!(weighted_average(&[], &[]), None);
        assert_eq!(weighted_average(&values, &slice(&["1", "-1"])), None);
    }

    #[test]
    #[serial(division_policy)]
    fn test_harmonic_mean() {
        reset_division_policy();
        assert_eq!(
            harmonic_mean(&slice(&["1", "2", "4"])).unwrap().to_string(),
            "1.71428571428571428571"
        );
        assert_eq!(harmonic_mean(&slice(&["2", "2", "2"])), Some(Deci::from(2)));
    }

    #[test]
    fn test_harmonic_mean_rejects_non_positive_values() {
        assert_eq!(harmonic_mean(&slice(&["1", "0", "4"])), None);
        assert_eq!(harmonic_mean(&slice(&["1", "-2", "4"])), None);
        assert_eq!(harmonic_mean(&[]), None);
    }

    #[test]
    #[serial(division_policy)]
    fn test_sum_of_squares() {
        reset_division_policy();
        assert_eq!(
            sum_of_squares(&slice(&["1", "2", "3"])),
            Some(Deci::from(2))
        );
        assert_eq!(sum_of_squares(&[]), None);
    }

    #[test]
    fn test_count_where() {
        let values = slice(&["1", "-2", "3", "0"]);
        assert_eq!(count_where(&values, Deci::is_positive), 2);
        assert_eq!(count_where(&values, |v| v.is_zero()), 1);
        assert_eq!(count_where(&[], Deci::is_positive), 0);
    }
}
