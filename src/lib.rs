//! # hedge-compare
//!
//! Compare the domestic cost of a future foreign-currency payable under
//! three strategies: no hedge, a forward contract, and a currency option.
//!
//! Costs are evaluated over a grid of hypothetical future rates, then
//! summarised into decision metrics (locked forward cost, option worst and
//! best case, option/forward break-even).
//!
//! ## Architecture
//!
//! - **core** — Scenario parameters, rate grid, currencies, configuration
//! - **analysis** — Payoff evaluation, cost table, decision metrics
//! - **report** — Terminal table, CSV, text and chart output

pub mod analysis;
pub mod core;
pub mod report;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::analysis::metrics::{Breakeven, DecisionMetrics, NoBreakeven};
    pub use crate::analysis::payoff::{HedgeStrategy, PayoffEvaluator};
    pub use crate::analysis::table::{CostRow, CostTable};
    pub use crate::analysis::HedgeAnalysis;
    pub use crate::core::config::ScenarioConfig;
    pub use crate::core::currency::{CurrencyCode, CurrencyPair};
    pub use crate::core::error::DomainError;
    pub use crate::core::scenario::{RateGrid, ScenarioParameters};
    pub use crate::report::ReportWriter;
}
