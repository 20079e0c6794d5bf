//! Pure aggregations over cleaned tables.
//!
//! Modules include:
//! - `bins`: fixed-width frequency tables and their comparison
//! - `summary`: grouped mean and sample variance
//! - `quantile`: interpolated quantiles and threshold exceedance
/// Single-pass running statistics.
pub mod algorithm;
/// Frequency tables over fixed-width bins.
pub mod bins;
/// Quantile and threshold queries.
pub mod quantile;
/// Grouped descriptive statistics.
pub mod summary;
