use hedge_compare::analysis::metrics::{Breakeven, DecisionMetrics, NoBreakeven};
use hedge_compare::analysis::payoff::{HedgeStrategy, PayoffEvaluator};
use hedge_compare::analysis::table::CostTable;
use hedge_compare::analysis::HedgeAnalysis;
use hedge_compare::core::config::{ConfigError, ScenarioConfig};
use hedge_compare::core::error::DomainError;
use hedge_compare::core::scenario::{RateGrid, ScenarioParameters};
use hedge_compare::report::{ReportWriter, CHART_FILE, METRICS_FILE, TABLE_FILE};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;

fn assert_close(actual: Decimal, expected: Decimal) {
    assert!(
        (actual - expected).abs() < dec!(0.01),
        "expected ≈ {}, got {}",
        expected,
        actual
    );
}

/// Full pipeline on the reference scenario: EUR 1m payable in 3 months,
/// costs in GBP, 16 rates from 0.80 to 0.95.
#[test]
fn full_pipeline_reference_scenario() {
    let (params, grid) = ScenarioConfig::default().build().unwrap();
    assert_close(params.premium_domestic(), dec!(23_529.41));

    let analysis = HedgeAnalysis::run(params, grid).unwrap();
    let rows = analysis.table().rows();
    assert_eq!(rows.len(), 16);

    // r = 0.80: option lapses, buyer pays market plus premium
    assert_eq!(rows[0].future_rate, dec!(0.80));
    assert_eq!(rows[0].no_hedge, dec!(1_250_000));
    assert_close(rows[0].option, dec!(1_273_529.41));

    // r = 0.95: option exercised, cost capped at the strike
    assert_eq!(rows[15].future_rate, dec!(0.95));
    assert_close(rows[15].no_hedge, dec!(1_052_631.58));
    assert_close(rows[15].option, dec!(1_186_320.11));

    let metrics = analysis.metrics();
    assert_close(metrics.locked_forward_cost, dec!(1_162_790.70));
    assert_close(metrics.option_max_cost, dec!(1_186_320.11));
    assert_close(metrics.option_min_cost_on_grid, dec!(1_076_160.99));
    assert!(matches!(
        metrics.breakeven,
        Breakeven::None(NoBreakeven::AboveStrike { .. })
    ));
}

/// Rows follow grid order and carry the unrounded rate.
#[test]
fn table_rows_follow_grid() {
    let params = ScenarioParameters::reference();
    let grid = RateGrid::linspace(dec!(0.8), dec!(0.9), 7).unwrap();
    let table = CostTable::build(&PayoffEvaluator::new(&params), &grid).unwrap();

    assert_eq!(table.len(), grid.len());
    for (row, rate) in table.rows().iter().zip(grid.iter()) {
        assert_eq!(row.future_rate, rate);
        assert_eq!(row.display_rate, rate.round_dp(3));
    }
}

/// The evaluator refuses rates that would divide by zero or go negative.
#[test]
fn non_positive_rate_is_a_domain_error() {
    let params = ScenarioParameters::reference();
    let evaluator = PayoffEvaluator::new(&params);

    for strategy in HedgeStrategy::ALL {
        assert_eq!(
            evaluator.cost(strategy, dec!(0)),
            Err(DomainError::NonPositiveRate(dec!(0)))
        );
    }
}

/// A numeric break-even prices the option exactly at the forward.
#[test]
fn breakeven_prices_option_at_forward() {
    let config = ScenarioConfig::from_json(r#"{ "strike": "0.90", "premium_pct": "0.005" }"#).unwrap();
    let (params, grid) = config.build().unwrap();
    let metrics = DecisionMetrics::compute(&params, &grid).unwrap();

    let rate = metrics.breakeven.rate().expect("breakeven below strike");
    assert!(rate <= params.strike());
    let option = PayoffEvaluator::new(&params).cost_option(rate).unwrap();
    assert!((option - metrics.locked_forward_cost).abs() < dec!(0.000001));
    assert!(metrics.to_string().contains("breakeven rate (below strike): EUR/GBP ≈ 0.86"));
}

/// With a premium worth more than the forward per unit, no break-even exists.
#[test]
fn oversized_premium_has_no_breakeven() {
    let config = ScenarioConfig::from_json(r#"{ "premium_pct": "1" }"#).unwrap();
    let (params, grid) = config.build().unwrap();
    let metrics = DecisionMetrics::compute(&params, &grid).unwrap();

    assert_eq!(metrics.breakeven, Breakeven::None(NoBreakeven::PremiumTooLarge));
    assert!(metrics
        .to_string()
        .contains("none (premium too large for breakeven below strike)"));
}

/// Writing the reference run produces all three artifacts.
#[test]
fn report_writer_produces_all_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results");
    let analysis =
        HedgeAnalysis::run(ScenarioParameters::reference(), RateGrid::reference()).unwrap();

    let written = ReportWriter::new(&out).write(&analysis).unwrap();

    assert_eq!(written.table, out.join(TABLE_FILE));
    assert_eq!(written.metrics, out.join(METRICS_FILE));
    assert_eq!(written.chart, Some(out.join(CHART_FILE)));

    let csv = fs::read_to_string(&written.table).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "EUR/GBP in 3m,No Hedge (GBP),Forward Hedge (GBP),Option Hedge (GBP)"
    );
    assert!(lines.next().unwrap().starts_with("0.8,1250000,"));
    assert_eq!(csv.lines().count(), 17);

    let report = fs::read_to_string(&written.metrics).unwrap();
    assert!(report.contains("Option max cost (if EUR > 0.86): £1,186,320"));
    assert!(report.contains("Option min cost in our grid: £1,076,161"));
}

/// Scenario files load, fill in defaults and validate.
#[test]
fn scenario_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.json");
    fs::write(
        &path,
        r#"{
  "base_currency": "USD",
  "quote_currency": "JPY",
  "tenor": "6m",
  "spot": "0.0068",
  "forward_rate": "0.0069",
  "strike": "0.0070",
  "notional": "500000",
  "grid": { "min": "0.0060", "max": "0.0080", "points": 5 }
}"#,
    )
    .unwrap();

    let config = ScenarioConfig::load(&path).unwrap();
    assert_eq!(config.premium_pct, dec!(0.02));

    let (params, grid) = config.build().unwrap();
    assert_eq!(params.pair().to_string(), "USD/JPY");
    assert_eq!(grid.len(), 5);

    let analysis = HedgeAnalysis::run(params, grid).unwrap();
    assert_eq!(analysis.table().headers()[0], "USD/JPY in 6m");
    assert_eq!(analysis.table().headers()[3], "Option Hedge (JPY)");
    assert!(analysis.metrics().to_string().contains("Forward cost (locked): ¥"));
}

/// Invalid scenarios fail before anything is written.
#[test]
fn invalid_scenario_fails_fast() {
    let config = ScenarioConfig::from_json(r#"{ "forward_rate": "0" }"#).unwrap();
    let err = config.build().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Domain(DomainError::NonPositiveParameter { field: "forward rate", .. })
    ));
}

/// Costs too large for a decimal surface as errors rather than panics.
#[test]
fn oversized_costs_are_domain_errors() {
    let config = ScenarioConfig::from_json(
        r#"{
  "notional": "10000000000000000000000000",
  "grid": { "min": "0.0001", "max": "0.95", "points": 16 }
}"#,
    )
    .unwrap();
    let (params, grid) = config.build().unwrap();

    let err = HedgeAnalysis::run(params, grid).unwrap_err();
    assert_eq!(err, DomainError::Overflow("no-hedge cost"));
}

/// JSON output of a run parses back and keeps decimals as strings.
#[test]
fn analysis_output_serializes() {
    use hedge_compare::report::json::AnalysisOutput;

    let analysis =
        HedgeAnalysis::run(ScenarioParameters::reference(), RateGrid::reference()).unwrap();
    let json = AnalysisOutput::new(&analysis).to_json_pretty().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    let no_hedge: Decimal = parsed["rows"][0]["no_hedge"].as_str().unwrap().parse().unwrap();
    assert_eq!(no_hedge, dec!(1_250_000));
    assert!(parsed["interpretation"]
        .as_str()
        .unwrap()
        .starts_with("Interpretation:"));
}
