use crate::analysis::table::CostTable;
use crate::report::{to_f64, ReportError};
use std::path::Path;

/// Write the cost table as CSV: header row, then one row per grid point.
///
/// The rate column carries the rounded display rate; cost columns are
/// written as floats.
pub fn write_cost_table(path: &Path, table: &CostTable) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record([
            row.display_rate.to_string(),
            to_f64(row.no_hedge)?.to_string(),
            to_f64(row.forward)?.to_string(),
            to_f64(row.option)?.to_string(),
        ])?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
