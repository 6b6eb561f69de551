use crate::analysis::payoff::HedgeStrategy;
use crate::analysis::table::CostTable;
use crate::core::scenario::ScenarioParameters;
use crate::report::{to_f64, ReportError};
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1000, 600);
const TITLE: &str = "FX Hedging Strategies: No Hedge vs Forward vs Option";

/// Points of one strategy's series, `(display rate, cost)`.
fn series(table: &CostTable, strategy: HedgeStrategy) -> Result<Vec<(f64, f64)>, ReportError> {
    table
        .rows()
        .iter()
        .map(|row| {
            let cost = match strategy {
                HedgeStrategy::NoHedge => row.no_hedge,
                HedgeStrategy::Forward => row.forward,
                HedgeStrategy::Option => row.option,
            };
            Ok((to_f64(row.display_rate)?, to_f64(cost)?))
        })
        .collect()
}

/// Axis range padded by 5% of its span on each side.
fn padded_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let pad = ((hi - lo) * 0.05).max(f64::EPSILON.max(hi.abs() * 1e-6));
    (lo - pad)..(hi + pad)
}

/// Render cost against future rate for all three strategies as an SVG line chart.
pub fn render_chart(
    path: &Path,
    table: &CostTable,
    params: &ScenarioParameters,
) -> Result<(), ReportError> {
    if table.is_empty() {
        return Err(ReportError::Chart("cannot chart an empty table".to_string()));
    }
    let no_hedge = series(table, HedgeStrategy::NoHedge)?;
    let forward = series(table, HedgeStrategy::Forward)?;
    let option = series(table, HedgeStrategy::Option)?;

    let x_range = padded_range(no_hedge.iter().map(|(x, _)| *x));
    let y_range = padded_range(
        no_hedge
            .iter()
            .chain(&forward)
            .chain(&option)
            .map(|(_, y)| *y),
    );

    let pair = params.pair();
    let x_label = format!("{} in {}", pair, expand_tenor(params.tenor()));
    let y_label = format!(
        "{} Cost to Buy {}",
        pair.quote,
        pair.base.format_amount(params.notional())
    );

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_range)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_label_formatter(&|x| format!("{:.2}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(LineSeries::new(no_hedge.clone(), &BLUE))
        .map_err(chart_error)?
        .label(HedgeStrategy::NoHedge.label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(no_hedge.iter().map(|&point| Circle::new(point, 4, BLUE.filled())))
        .map_err(chart_error)?;

    chart
        .draw_series(DashedLineSeries::new(forward, 10, 6, ORANGE.stroke_width(2)))
        .map_err(chart_error)?
        .label(HedgeStrategy::Forward.label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &ORANGE));

    chart
        .draw_series(DashedLineSeries::new(option, 2, 4, GREEN.stroke_width(2)))
        .map_err(chart_error)?
        .label(HedgeStrategy::Option.label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    log::info!("rendered chart to {}", path.display());
    Ok(())
}

/// `"3m"` reads as `"3 months"` on the axis; anything else is kept as is.
fn expand_tenor(tenor: &str) -> String {
    let Some((split, _)) = tenor.char_indices().last() else {
        return tenor.to_string();
    };
    let (count, unit) = tenor.split_at(split);
    let unit = match unit {
        "d" => "days",
        "w" => "weeks",
        "m" => "months",
        "y" => "years",
        _ => return tenor.to_string(),
    };
    match count.parse::<u32>() {
        Ok(1) => format!("1 {}", unit.trim_end_matches('s')),
        Ok(n) => format!("{} {}", n, unit),
        Err(_) => tenor.to_string(),
    }
}

fn chart_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> ReportError {
    ReportError::Chart(err.to_string())
}

const ORANGE: RGBColor = RGBColor(255, 127, 14);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::payoff::PayoffEvaluator;
    use crate::core::scenario::RateGrid;

    #[test]
    fn test_expand_tenor() {
        assert_eq!(expand_tenor("3m"), "3 months");
        assert_eq!(expand_tenor("1y"), "1 year");
        assert_eq!(expand_tenor("spot"), "spot");
        assert_eq!(expand_tenor(""), "");
        assert_eq!(expand_tenor("3ヶ月"), "3ヶ月");
    }

    #[test]
    fn test_padded_range_contains_values() {
        let range = padded_range([0.8, 0.95].into_iter());
        assert!(range.start < 0.8 && range.end > 0.95);

        let flat = padded_range([5.0, 5.0].into_iter());
        assert!(flat.start < flat.end);
    }

    #[test]
    fn test_series_follow_table_order() {
        let params = ScenarioParameters::reference();
        let table = CostTable::build(&PayoffEvaluator::new(&params), &RateGrid::reference()).unwrap();
        let points = series(&table, HedgeStrategy::NoHedge).unwrap();

        assert_eq!(points.len(), 16);
        assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(points.windows(2).all(|w| w[0].1 > w[1].1));
    }

    #[test]
    fn test_render_reference_chart() {
        let params = ScenarioParameters::reference();
        let table = CostTable::build(&PayoffEvaluator::new(&params), &RateGrid::reference()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hedging_comparison.svg");

        render_chart(&path, &table, &params).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Option Hedge"));
    }
}
