//! Descriptions handed to the external chart and table renderers.

use serde::{Deserialize, Serialize};

/// Presentation of a chart's series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Connected lines over x.
    Line,
    /// Bar histogram; `edges` on the chart hold the bin boundaries.
    Histogram,
    /// Unconnected markers.
    Scatter,
}

/// One labelled series of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label.
    pub label: String,
    /// Color hint understood by the renderer.
    pub color: String,
    /// Index of the panel this series is drawn on (0 for single-panel charts).
    pub panel: usize,
    /// `(x, y)` points; for histograms `x` is the observation and `y` is unused.
    pub points: Vec<(f64, f64)>,
}

/// Horizontal reference line with an annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    /// Y position.
    pub y: f64,
    /// Annotation text.
    pub label: String,
}

/// Renderer-agnostic chart description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// File stem of the output (extension chosen by the renderer).
    pub name: String,
    /// Title shown above the plot.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// How series are drawn.
    pub kind: ChartKind,
    /// Series to draw.
    pub series: Vec<ChartSeries>,
    /// Optional panel titles for multi-panel charts.
    pub panels: Vec<String>,
    /// Bin edges for histogram charts.
    pub edges: Vec<f64>,
    /// Optional horizontal reference line.
    pub reference: Option<ReferenceLine>,
    /// Requested output resolution.
    pub dpi: u32,
}

impl Chart {
    /// Start a chart with no series.
    pub fn new(name: impl Into<String>, title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            kind,
            series: Vec::new(),
            panels: Vec::new(),
            edges: Vec::new(),
            reference: None,
            dpi: 300,
        }
    }

    /// Set both axis labels.
    #[must_use]
    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    /// Append a series.
    #[must_use]
    pub fn with_series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }

    /// Add a horizontal reference line.
    #[must_use]
    pub fn with_reference(mut self, y: f64, label: impl Into<String>) -> Self {
        self.reference = Some(ReferenceLine {
            y,
            label: label.into(),
        });
        self
    }

    /// Set the requested resolution.
    #[must_use]
    pub const fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }
}

/// A column group spanning several leaf columns (e.g. a period over mean and variance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnGroup {
    /// Group heading.
    pub label: String,
    /// Number of leaf columns spanned.
    pub span: usize,
}

/// Renderer-agnostic table with caption and cross-reference label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypesetTable {
    /// File stem of the output.
    pub name: String,
    /// Caption text.
    pub caption: String,
    /// Cross-reference label (e.g. `tab:frequencies`).
    pub label: String,
    /// Heading of the row-index column.
    pub index_header: String,
    /// Optional grouped header row above the leaf columns.
    pub groups: Vec<ColumnGroup>,
    /// Leaf column headings.
    pub columns: Vec<String>,
    /// Rows as `(index, cells)`; each row has `columns.len()` cells.
    pub rows: Vec<(String, Vec<String>)>,
}
