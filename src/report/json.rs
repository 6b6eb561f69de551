use crate::analysis::metrics::DecisionMetrics;
use crate::analysis::table::CostRow;
use crate::analysis::HedgeAnalysis;
use crate::core::scenario::ScenarioParameters;
use crate::report::ReportError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// JSON document for `--format json`.
#[derive(Debug, Serialize)]
pub struct AnalysisOutput<'a> {
    pub generated_at: DateTime<Utc>,
    pub scenario: &'a ScenarioParameters,
    pub premium_domestic: Decimal,
    pub columns: &'a [String; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<&'a [CostRow]>,
    pub metrics: &'a DecisionMetrics,
    pub interpretation: String,
}

impl<'a> AnalysisOutput<'a> {
    /// Full document, table rows included.
    pub fn new(analysis: &'a HedgeAnalysis) -> Self {
        Self {
            rows: Some(analysis.table().rows()),
            ..Self::metrics_only(analysis)
        }
    }

    /// Document without the per-rate rows.
    pub fn metrics_only(analysis: &'a HedgeAnalysis) -> Self {
        Self {
            generated_at: Utc::now(),
            scenario: analysis.params(),
            premium_domestic: analysis.params().premium_domestic(),
            columns: analysis.table().headers(),
            rows: None,
            metrics: analysis.metrics(),
            interpretation: analysis.metrics().interpretation(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scenario::RateGrid;

    fn reference() -> HedgeAnalysis {
        HedgeAnalysis::run(ScenarioParameters::reference(), RateGrid::reference()).unwrap()
    }

    #[test]
    fn test_full_output_fields() {
        let analysis = reference();
        let json = AnalysisOutput::new(&analysis).to_json_pretty().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed.get("generated_at").is_some());
        assert_eq!(parsed["scenario"]["strike"], "0.86");
        assert_eq!(parsed["scenario"]["pair"]["base"], "EUR");
        assert_eq!(parsed["rows"].as_array().unwrap().len(), 16);
        assert_eq!(parsed["columns"][0], "EUR/GBP in 3m");
        assert_eq!(parsed["metrics"]["breakeven"]["kind"], "none");
        assert_eq!(parsed["metrics"]["breakeven"]["value"]["reason"], "above_strike");
    }

    #[test]
    fn test_metrics_only_omits_rows() {
        let analysis = reference();
        let json = AnalysisOutput::metrics_only(&analysis).to_json_pretty().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed.get("rows").is_none());
        assert!(parsed["metrics"].get("locked_forward_cost").is_some());
    }
}
