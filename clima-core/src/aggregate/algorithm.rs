//! Single-pass algorithms used by the aggregations.

/// [Welford Online](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm)
/// recurrences for a running mean and variance.
///
/// ```
/// use clima_core::aggregate::algorithm::welford_online;
///
/// let mut mean = 0.0;
/// let mut m = 0.0;
/// for (i, value) in [2.0, 4.0, 6.0].into_iter().enumerate() {
///     let count = (i + 1) as f64;
///     let new_mean = welford_online::calculate_mean(mean, value, count);
///     m = welford_online::calculate_recurrence_relation_m(m, mean, value, new_mean);
///     mean = new_mean;
/// }
/// assert_eq!(mean, 4.0);
/// assert_eq!(welford_online::calculate_sample_variance(m, 3.0), 4.0);
/// ```
pub mod welford_online {
    /// Next mean after observing `next_value` as the `count`-th value.
    #[must_use]
    pub fn calculate_mean(prev_mean: f64, next_value: f64, count: f64) -> f64 {
        prev_mean + (next_value - prev_mean) / count
    }

    /// Next sum of squared deviations `M`.
    ///
    /// `M_k = M_{k-1} + (x_k - mean_{k-1}) * (x_k - mean_k)`
    #[must_use]
    pub fn calculate_recurrence_relation_m(
        prev_m: f64,
        prev_mean: f64,
        new_value: f64,
        new_mean: f64,
    ) -> f64 {
        prev_m + (new_value - prev_mean) * (new_value - new_mean)
    }

    /// Sample variance `M / (n - 1)`; zero for a single observation.
    #[must_use]
    pub fn calculate_sample_variance(recurrence_relation_m: f64, count: f64) -> f64 {
        if count < 2.0 {
            0.0
        } else {
            recurrence_relation_m / (count - 1.0)
        }
    }
}
