//! Provided implementations of the table and chart output seams.
//!
//! Both writers go through [`atomic::write_atomic`], so an interrupted run
//! never leaves a truncated output file.

/// Temp-file-and-rename writes.
pub mod atomic;
/// JSON chart descriptions for an external plotting tool.
pub mod chart;
/// Booktabs LaTeX tables.
pub mod latex;

pub use chart::ChartSpecWriter;
pub use latex::LatexTableWriter;
