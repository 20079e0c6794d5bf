//! Linear association between paired series.

/// Gamma, incomplete beta and Student's t tail.
pub mod special;

use clima_types::{ClimaError, Correlation, JoinedSeries};

/// Pearson product-moment correlation of `x` and `y` with its two-sided p-value.
///
/// The p-value tests `r = 0` against Student's t with `n - 2` degrees of
/// freedom. With exactly two pairs it is `1.0`; with a perfect fit it is `0.0`.
/// The result does not depend on argument order.
///
/// ```
/// use clima_core::correlate::pearson;
///
/// let c = pearson(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
/// assert!((c.r - 1.0).abs() < 1e-12);
/// assert_eq!(c.n, 4);
/// ```
///
/// # Errors
/// - `ClimaError::InvalidArg` if the lengths differ or a value is NaN.
/// - `ClimaError::InsufficientData` with fewer than two pairs or if either
///   series is constant.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "clima_core::correlate::pearson", skip_all, fields(n = x.len()))
)]
pub fn pearson(x: &[f64], y: &[f64]) -> Result<Correlation, ClimaError> {
    if x.len() != y.len() {
        return Err(ClimaError::InvalidArg(format!(
            "paired series differ in length: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.iter().chain(y).any(|v| v.is_nan()) {
        return Err(ClimaError::InvalidArg("NaN in paired series".into()));
    }
    let n = x.len();
    if n < 2 {
        return Err(ClimaError::insufficient(
            "correlation",
            format!("{n} paired observations, need at least 2"),
        ));
    }

    #[allow(clippy::cast_precision_loss)]
    let nf = n as f64;
    let mean_x = x.iter().sum::<f64>() / nf;
    let mean_y = y.iter().sum::<f64>() / nf;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(ClimaError::insufficient(
            "correlation",
            "constant series has no defined correlation",
        ));
    }

    let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
    Ok(Correlation {
        r,
        p_value: p_value(r, n),
        n,
    })
}

/// [`pearson`] of a joined series' anomaly against its CO₂ trend.
///
/// # Errors
/// See [`pearson`].
pub fn correlate_joined(series: &JoinedSeries) -> Result<Correlation, ClimaError> {
    pearson(&series.anomalies(), &series.trends())
}

fn p_value(r: f64, n: usize) -> f64 {
    if n <= 2 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let df = (n - 2) as f64;
    let unexplained = 1.0 - r * r;
    if unexplained <= 0.0 {
        return 0.0;
    }
    let t = r * (df / unexplained).sqrt();
    special::student_t_two_sided(t, df).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_value_with_one_degree_of_freedom() {
        // closed form: 2/pi * asin(sqrt(1 - r^2))
        for r in [0.1_f64, 0.5, 0.9, -0.7] {
            let expected = 2.0 / std::f64::consts::PI * (1.0 - r * r).sqrt().asin();
            assert!((p_value(r, 3) - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn p_value_with_two_degrees_of_freedom() {
        // closed form: 1 - |r|
        for r in [0.2_f64, 0.6, -0.95] {
            assert!((p_value(r, 4) - (1.0 - f64::abs(r))).abs() < 1e-10);
        }
    }

    #[test]
    fn p_value_matches_t_statistic_tail() {
        // r = 0.6 over 27 pairs gives t = 0.6 * sqrt(25 / 0.64) = 3.75
        let t = 0.6_f64 * (25.0_f64 / 0.64).sqrt();
        assert!((t - 3.75).abs() < 1e-12);
        let tail = special::student_t_two_sided(t, 25.0);
        assert!((p_value(0.6, 27) - tail).abs() < 1e-15);
        assert!((p_value(-0.6, 27) - tail).abs() < 1e-15);
        assert!(tail > 0.0 && tail < 0.001);
    }

    #[test]
    fn p_value_bounds() {
        assert_eq!(p_value(0.3, 2), 1.0);
        assert_eq!(p_value(1.0, 10), 0.0);
        assert_eq!(p_value(-1.0, 10), 0.0);
        assert_eq!(p_value(1.0 + f64::EPSILON, 10), 0.0);
        assert!((p_value(0.0, 10) - 1.0).abs() < 1e-12);
    }
}
