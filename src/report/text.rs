use crate::analysis::metrics::DecisionMetrics;
use crate::report::ReportError;
use std::fs;
use std::path::Path;

/// Write the decision metrics report as plain text.
pub fn write_metrics(path: &Path, metrics: &DecisionMetrics) -> Result<(), ReportError> {
    fs::write(path, metrics.report_lines().join("\n")).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote decision metrics to {}", path.display());
    Ok(())
}
