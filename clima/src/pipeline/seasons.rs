use clima_core::{
    ClimaError, ColumnGroup, Season, SummaryTable, TemperatureField, TemperatureTable,
    TypesetTable, round_summary, summarize,
};

use super::Outputs;
use crate::Clima;

const DIGITS: i32 = 3;

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "--".to_string(), |v| format!("{v:.3}"))
}

/// Typeset seasons as rows and each period as a (mean, variance) column group.
#[must_use]
pub fn summary_table(summary: &SummaryTable) -> TypesetTable {
    let rows = summary
        .categories
        .iter()
        .enumerate()
        .map(|(ci, c)| {
            let cells = summary
                .cells
                .iter()
                .flat_map(|row| {
                    let s = row.get(ci);
                    [cell(s.and_then(|s| s.mean)), cell(s.and_then(|s| s.variance))]
                })
                .collect();
            (c.column().to_string(), cells)
        })
        .collect();

    TypesetTable {
        name: "mean_variance".into(),
        caption: "Mean and variance of temperature anomalies by season and period.".into(),
        label: "tab:mean-variance".into(),
        index_header: "Season".into(),
        groups: summary
            .periods
            .iter()
            .map(|p| ColumnGroup {
                label: p.label(),
                span: 2,
            })
            .collect(),
        columns: summary
            .periods
            .iter()
            .flat_map(|_| ["Mean".to_string(), "Variance".to_string()])
            .collect(),
        rows,
    }
}

impl Clima {
    /// Seasonal mean and sample variance per summary period, rounded to three decimals.
    #[must_use]
    pub fn seasonal_statistics(&self, table: &TemperatureTable) -> SummaryTable {
        let seasons: Vec<TemperatureField> =
            Season::ALL.into_iter().map(TemperatureField::Season).collect();
        round_summary(
            &summarize(table, &self.cfg.summary_periods, &seasons),
            DIGITS,
        )
    }

    pub(crate) fn seasonal_summary(
        &self,
        table: &TemperatureTable,
        outputs: &mut Outputs,
    ) -> Result<SummaryTable, ClimaError> {
        let summary = self.seasonal_statistics(table);
        self.emit_table(&summary_table(&summary), outputs)?;
        Ok(summary)
    }
}
