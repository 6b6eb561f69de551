use crate::analysis::table::{CostTable, DISPLAY_RATE_DP};
use crate::core::currency::group_thousands;
use crate::core::scenario::ScenarioParameters;

/// Title line above the terminal table.
pub fn table_title(params: &ScenarioParameters) -> String {
    format!(
        "--- Payoff Table ({} cost to buy {}) ---",
        params.pair().quote,
        params.pair().base.format_amount(params.notional())
    )
}

/// Plain-text cost table with right-aligned columns.
///
/// Rates keep their display precision; costs are whole units with
/// thousands separators.
pub fn render_table(table: &CostTable, params: &ScenarioParameters) -> String {
    let headers = table.headers();
    let cells: Vec<[String; 4]> = table
        .rows()
        .iter()
        .map(|row| {
            [
                format!("{:.*}", DISPLAY_RATE_DP as usize, row.display_rate),
                group_thousands(row.no_hedge),
                group_thousands(row.forward),
                group_thousands(row.option),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for (col, width) in widths.iter_mut().enumerate() {
        *width = cells
            .iter()
            .map(|row| row[col].chars().count())
            .chain(std::iter::once(headers[col].chars().count()))
            .max()
            .unwrap_or(0);
    }

    let mut out = String::new();
    out.push_str(&table_title(params));
    out.push_str("\n\n");
    out.push_str(&format_line(headers, &widths));
    for row in &cells {
        out.push('\n');
        out.push_str(&format_line(row, &widths));
    }
    out
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}
