use clima_types::{ClimaError, Exceedance, QuantileValue};

/// Value below which a fraction `level` of `values` falls.
///
/// Uses linear interpolation between order statistics: with the sorted
/// values `x` and `h = (n - 1) * level`, the result is
/// `x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.
///
/// ```
/// use clima_core::aggregate::quantile::quantile;
///
/// let v = [0.1, -0.2, 0.4, 0.0];
/// assert!((quantile(&v, 0.5).unwrap() - 0.05).abs() < 1e-12);
/// assert_eq!(quantile(&v, 0.0).unwrap(), -0.2);
/// assert_eq!(quantile(&v, 1.0).unwrap(), 0.4);
/// ```
///
/// # Errors
/// - `ClimaError::InvalidArg` if `level` is outside `[0, 1]` or any value is NaN.
/// - `ClimaError::InsufficientData` if `values` is empty.
pub fn quantile(values: &[f64], level: f64) -> Result<f64, ClimaError> {
    let sorted = sorted_observations(values)?;
    interpolate(&sorted, level)
}

/// Evaluate several quantile levels over the same series.
///
/// # Errors
/// See [`quantile`].
pub fn quantiles(values: &[f64], levels: &[f64]) -> Result<Vec<QuantileValue>, ClimaError> {
    let sorted = sorted_observations(values)?;
    levels
        .iter()
        .map(|&level| {
            interpolate(&sorted, level).map(|value| QuantileValue { level, value })
        })
        .collect()
}

/// Count and share of observations at or above `threshold`.
///
/// # Errors
/// - `ClimaError::InsufficientData` if `values` is empty.
/// - `ClimaError::InvalidArg` if `threshold` is NaN.
pub fn exceedance(values: &[f64], threshold: f64) -> Result<Exceedance, ClimaError> {
    if threshold.is_nan() {
        return Err(ClimaError::InvalidArg("threshold is NaN".into()));
    }
    if values.is_empty() {
        return Err(ClimaError::insufficient(
            "exceedance",
            "no observations in series",
        ));
    }
    let count = values.iter().filter(|v| **v >= threshold).count();
    let total = values.len();
    #[allow(clippy::cast_precision_loss)]
    let percentage = 100.0 * count as f64 / total as f64;
    Ok(Exceedance {
        threshold,
        count,
        total,
        percentage,
    })
}

fn sorted_observations(values: &[f64]) -> Result<Vec<f64>, ClimaError> {
    if values.is_empty() {
        return Err(ClimaError::insufficient(
            "quantile",
            "no observations in series",
        ));
    }
    if values.iter().any(|v| v.is_nan()) {
        return Err(ClimaError::InvalidArg("NaN observation in series".into()));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

fn interpolate(sorted: &[f64], level: f64) -> Result<f64, ClimaError> {
    if !(0.0..=1.0).contains(&level) {
        return Err(ClimaError::InvalidArg(format!(
            "quantile level {level} outside [0, 1]"
        )));
    }
    #[allow(clippy::cast_precision_loss)]
    let h = (sorted.len() - 1) as f64 * level;
    let lo = h.floor();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let i = lo as usize;
    let Some(&next) = sorted.get(i + 1) else {
        return Ok(sorted[sorted.len() - 1]);
    };
    let frac = h - lo;
    // clamped to the segment so rounding never breaks monotonicity in `level`
    Ok((sorted[i] + frac * (next - sorted[i])).clamp(sorted[i], next))
}
