//! Reference hedging comparison.
//!
//! EUR 1,000,000 payable in three months, paid in GBP. Prints the cost
//! table and decision metrics, then shows which of forward and option is
//! cheaper at a few future rates.

use hedge_compare::analysis::HedgeAnalysis;
use hedge_compare::core::scenario::{RateGrid, ScenarioParameters};
use hedge_compare::report::terminal::render_table;
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  hedge-compare: Reference EUR/GBP Scenario   ║");
    println!("╚══════════════════════════════════════════════╝\n");

    let params = ScenarioParameters::reference();
    println!("Spot:         {}", params.spot());
    println!("Forward:      {}", params.forward_rate());
    println!("Strike:       {}", params.strike());
    println!("Premium:      {}% of notional", params.premium_pct() * dec!(100));
    println!(
        "Premium paid: {}\n",
        params.pair().quote.format_amount(params.premium_domestic())
    );

    let analysis = match HedgeAnalysis::run(params, RateGrid::reference()) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}\n", render_table(analysis.table(), analysis.params()));
    println!("{}\n", analysis.metrics());

    println!("━━━ Forward or option? ━━━\n");
    for rate in [dec!(0.80), dec!(0.86), dec!(0.90), dec!(0.95)] {
        match analysis.metrics().cheaper_strategy_at(rate) {
            Ok(strategy) => println!("  {} at {}: {}", analysis.params().pair(), rate, strategy),
            Err(e) => println!("  {}: {}", rate, e),
        }
    }
}
