//! Utility functions for working with measurement slices

/// Sort data and return a new vector
///
/// Uses `f64::total_cmp`, so the order is total even with NaN present.
///
/// # Examples
///
/// ```rust
/// use vesicle_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use vesicle_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the median of a slice
///
/// An even-length slice yields the average of the two middle values.
/// Returns 0.0 for empty slices.
///
/// ```rust
/// use vesicle_core::utils::median;
///
/// assert_eq!(median(&[4.0, 1.0, 3.0]), 3.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sorted = sorted(data);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Minimum and maximum of a slice, `None` when empty
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[2.0]), Some((2.0, 2.0)));
        assert_eq!(min_max(&[3.0, -1.0, 7.5, 0.0]), Some((-1.0, 7.5)));
    }

    #[test]
    fn test_median_unsorted_input() {
        assert_eq!(median(&[9.0, 2.0, 5.0, 1.0, 7.0]), 5.0);
        assert_relative_eq!(median(&[0.3, 0.1]), 0.2, epsilon = 1e-15);
    }

    proptest! {
        #[test]
        fn prop_mean_and_median_within_range(data in prop::collection::vec(0.01f64..1e4, 1..200)) {
            let (lo, hi) = min_max(&data).unwrap();
            let m = mean(&data);
            let med = median(&data);
            prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
            prop_assert!(med >= lo && med <= hi);
        }
    }
}
