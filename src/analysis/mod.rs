//! Cost evaluation and decision metrics.

pub mod metrics;
pub mod payoff;
pub mod table;

use crate::core::error::DomainError;
use crate::core::scenario::{RateGrid, ScenarioParameters};
use metrics::DecisionMetrics;
use payoff::PayoffEvaluator;
use table::CostTable;

/// Everything a run produces, computed in full before any output is written.
#[derive(Debug, Clone)]
pub struct HedgeAnalysis {
    params: ScenarioParameters,
    grid: RateGrid,
    table: CostTable,
    metrics: DecisionMetrics,
}

impl HedgeAnalysis {
    pub fn run(params: ScenarioParameters, grid: RateGrid) -> Result<Self, DomainError> {
        let evaluator = PayoffEvaluator::new(&params);
        log::debug!(
            "evaluating {} strategies over {} rates in [{}, {}]",
            payoff::HedgeStrategy::ALL.len(),
            grid.len(),
            grid.min_rate(),
            grid.max_rate()
        );
        let table = CostTable::build(&evaluator, &grid)?;
        let metrics = DecisionMetrics::compute(&params, &grid)?;
        log::debug!("breakeven: {:?}", metrics.breakeven);

        Ok(Self {
            params,
            grid,
            table,
            metrics,
        })
    }

    pub fn params(&self) -> &ScenarioParameters {
        &self.params
    }

    pub fn grid(&self) -> &RateGrid {
        &self.grid
    }

    pub fn table(&self) -> &CostTable {
        &self.table
    }

    pub fn metrics(&self) -> &DecisionMetrics {
        &self.metrics
    }
}
