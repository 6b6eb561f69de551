use crate::analysis::payoff::PayoffEvaluator;
use crate::core::error::DomainError;
use crate::core::scenario::{RateGrid, ScenarioParameters};
use rust_decimal::Decimal;
use serde::Serialize;

/// Decimal places of the rate shown in reports.
pub const DISPLAY_RATE_DP: u32 = 3;

/// Costs of the three strategies at one future rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostRow {
    /// Grid point the costs were evaluated at.
    pub future_rate: Decimal,
    /// `future_rate` rounded for display only.
    pub display_rate: Decimal,
    pub no_hedge: Decimal,
    pub forward: Decimal,
    pub option: Decimal,
}

/// One row per grid point, in grid order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostTable {
    headers: [String; 4],
    rows: Vec<CostRow>,
}

impl CostTable {
    /// Evaluate every strategy at every grid point.
    pub fn build(evaluator: &PayoffEvaluator<'_>, grid: &RateGrid) -> Result<Self, DomainError> {
        let forward = evaluator.cost_forward();
        let rows = grid
            .iter()
            .map(|rate| {
                Ok(CostRow {
                    future_rate: rate,
                    display_rate: rate.round_dp(DISPLAY_RATE_DP).normalize(),
                    no_hedge: evaluator.cost_no_hedge(rate)?,
                    forward,
                    option: evaluator.cost_option(rate)?,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self {
            headers: column_headers(evaluator.params()),
            rows,
        })
    }

    /// Column names: rate, no hedge, forward, option.
    pub fn headers(&self) -> &[String; 4] {
        &self.headers
    }

    pub fn rows(&self) -> &[CostRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// `["EUR/GBP in 3m", "No Hedge (GBP)", "Forward Hedge (GBP)", "Option Hedge (GBP)"]`
/// for the reference scenario.
pub fn column_headers(params: &ScenarioParameters) -> [String; 4] {
    let quote = &params.pair().quote;
    [
        format!("{} in {}", params.pair(), params.tenor()),
        format!("No Hedge ({})", quote),
        format!("Forward Hedge ({})", quote),
        format!("Option Hedge ({})", quote),
    ]
}
