//! Terminal, file and chart output of an analysis.
//!
//! Nothing here feeds back into the numbers: every writer consumes a
//! finished [`HedgeAnalysis`].

pub mod chart;
pub mod csv_file;
pub mod json;
pub mod terminal;
pub mod text;

use crate::analysis::HedgeAnalysis;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TABLE_FILE: &str = "payoff_table.csv";
pub const METRICS_FILE: &str = "decision_metrics.txt";
pub const CHART_FILE: &str = "hedging_comparison.svg";

/// Errors arising while writing reports. None of them are retried.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chart rendering failed: {0}")]
    Chart(String),
    #[error("{0} has no floating-point representation")]
    NotRepresentable(Decimal),
}

pub(crate) fn to_f64(value: Decimal) -> Result<f64, ReportError> {
    value.to_f64().ok_or(ReportError::NotRepresentable(value))
}

/// Paths of the files a [`ReportWriter`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub table: PathBuf,
    pub metrics: PathBuf,
    pub chart: Option<PathBuf>,
}

/// Writes the table, metrics and chart of an analysis into one directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
    with_chart: bool,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            with_chart: true,
        }
    }

    /// Skip rendering the chart.
    pub fn without_chart(mut self) -> Self {
        self.with_chart = false;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory if needed and write every artifact.
    pub fn write(&self, analysis: &HedgeAnalysis) -> Result<WrittenReport, ReportError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ReportError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let table = self.output_dir.join(TABLE_FILE);
        csv_file::write_cost_table(&table, analysis.table())?;

        let metrics = self.output_dir.join(METRICS_FILE);
        text::write_metrics(&metrics, analysis.metrics())?;

        let chart = if self.with_chart {
            let path = self.output_dir.join(CHART_FILE);
            chart::render_chart(&path, analysis.table(), analysis.params())?;
            Some(path)
        } else {
            None
        };

        Ok(WrittenReport {
            table,
            metrics,
            chart,
        })
    }
}
