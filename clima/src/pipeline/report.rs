use clima_core::{ClimaError, RunReport};

use super::Outputs;
use crate::Clima;
use crate::export::atomic::write_atomic;

impl Clima {
    /// Record every output path (the summary itself last) and write the
    /// report as pretty-printed JSON.
    pub(crate) fn write_report(
        &self,
        report: &mut RunReport,
        mut outputs: Outputs,
    ) -> Result<(), ClimaError> {
        let path = self.cfg.report_path();
        outputs.push(path.clone());
        report.outputs = outputs.into_inner();
        let mut body = serde_json::to_vec_pretty(report)?;
        body.push(b'\n');
        write_atomic(&path, &body)
    }
}
