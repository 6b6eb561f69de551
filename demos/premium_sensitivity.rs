//! How the option premium moves the option/forward break-even.
//!
//! Uses a strike above the forward so that cheap premiums give a
//! break-even below the strike, and expensive ones do not.

use hedge_compare::analysis::metrics::{Breakeven, DecisionMetrics, NoBreakeven};
use hedge_compare::core::currency::{CurrencyCode, CurrencyPair};
use hedge_compare::core::scenario::{RateGrid, ScenarioParameters};
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  hedge-compare: Premium Sensitivity          ║");
    println!("╚══════════════════════════════════════════════╝\n");

    let grid = RateGrid::reference();
    let premiums = [
        dec!(0),
        dec!(0.005),
        dec!(0.01),
        dec!(0.02),
        dec!(0.05),
        dec!(1),
    ];

    println!("  Premium   Option max       Breakeven");
    println!("  -------   -------------    ------------------------------");
    for premium_pct in premiums {
        let params = match ScenarioParameters::new(
            CurrencyPair::new(CurrencyCode::new("EUR"), CurrencyCode::new("GBP")),
            "3m",
            dec!(0.85),
            dec!(0.86),
            dec!(0.90),
            premium_pct,
            dec!(1_000_000),
        ) {
            Ok(params) => params,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        let metrics = match DecisionMetrics::compute(&params, &grid) {
            Ok(metrics) => metrics,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        let breakeven = match metrics.breakeven {
            Breakeven::Rate(rate) => format!("{:.4}", rate),
            Breakeven::None(NoBreakeven::AboveStrike { solved_rate }) => {
                format!("none ({:.4} > strike)", solved_rate)
            }
            Breakeven::None(NoBreakeven::PremiumTooLarge) => "none (premium too large)".to_string(),
        };

        println!(
            "  {:>6}%   {:>13}    {}",
            premium_pct * dec!(100),
            params.pair().quote.format_amount(metrics.option_max_cost),
            breakeven
        );
    }
}
