use crate::analysis::payoff::{HedgeStrategy, PayoffEvaluator};
use crate::core::currency::CurrencyCode;
use crate::core::error::DomainError;
use crate::core::scenario::{RateGrid, ScenarioParameters};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Why no option/forward break-even exists below the strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NoBreakeven {
    /// `premium / notional >= 1 / forward_rate`: the premium alone costs as
    /// much as the forward, so the option never catches up.
    PremiumTooLarge,
    /// The closed form solves the lapsed-option branch, but its solution
    /// lies above the strike where that branch does not apply.
    AboveStrike { solved_rate: Decimal },
}

/// Rate at which the option (with premium) costs exactly the forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Breakeven {
    Rate(Decimal),
    None(NoBreakeven),
}

impl Breakeven {
    pub fn rate(&self) -> Option<Decimal> {
        match self {
            Breakeven::Rate(rate) => Some(*rate),
            Breakeven::None(_) => None,
        }
    }
}

/// Scalar summaries for choosing between the forward and the option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMetrics {
    pub locked_forward_cost: Decimal,
    /// Worst case for the option holder: exercised above the strike.
    pub option_max_cost: Decimal,
    /// `notional / max(grid) + premium`. Bounded by the sampled grid; the
    /// unbounded infimum as the rate grows is the premium alone.
    pub option_min_cost_on_grid: Decimal,
    pub breakeven: Breakeven,
    /// Quoted alongside the metrics; not used by the formulas.
    #[serde(skip)]
    context: ReportContext,
}

#[derive(Debug, Clone, PartialEq)]
struct ReportContext {
    pair: String,
    base: String,
    quote: CurrencyCode,
    strike: Decimal,
}

impl DecisionMetrics {
    /// Derive the metrics from the scenario and the grid's upper bound.
    pub fn compute(params: &ScenarioParameters, grid: &RateGrid) -> Result<Self, DomainError> {
        let evaluator = PayoffEvaluator::new(params);
        let premium = evaluator.premium_domestic();
        let notional = params.notional();
        let strike = params.strike();

        let locked_forward_cost = evaluator.cost_forward();
        // Exercised at or above the strike the option settles at the strike.
        let option_max_cost = evaluator.cost_option(strike)?;
        let option_min_cost_on_grid = evaluator
            .cost_no_hedge(grid.max_rate())?
            .checked_add(premium)
            .ok_or(DomainError::Overflow("option grid minimum"))?;

        let den = Decimal::ONE
            .checked_div(params.forward_rate())
            .zip(premium.checked_div(notional))
            .and_then(|(per_unit, premium_per_unit)| per_unit.checked_sub(premium_per_unit))
            .ok_or(DomainError::Overflow("breakeven denominator"))?;
        let breakeven = if den <= Decimal::ZERO {
            Breakeven::None(NoBreakeven::PremiumTooLarge)
        } else {
            // A vanishing denominator puts the solution beyond any strike.
            let solved_rate = Decimal::ONE.checked_div(den).unwrap_or(Decimal::MAX);
            if solved_rate > strike {
                Breakeven::None(NoBreakeven::AboveStrike { solved_rate })
            } else {
                Breakeven::Rate(solved_rate)
            }
        };
        if let Breakeven::None(reason) = breakeven {
            log::info!("no option/forward breakeven below strike {}: {:?}", strike, reason);
        }

        Ok(Self {
            locked_forward_cost,
            option_max_cost,
            option_min_cost_on_grid,
            breakeven,
            context: ReportContext {
                pair: params.pair().to_string(),
                base: params.pair().base.to_string(),
                quote: params.pair().quote.clone(),
                strike,
            },
        })
    }

    /// Which of forward and option is cheaper if the rate settles at `rate`.
    ///
    /// The option wins strictly above the break-even; at or below it, or
    /// when there is no break-even, the forward costs less or the same.
    pub fn cheaper_strategy_at(&self, rate: Decimal) -> Result<HedgeStrategy, DomainError> {
        if rate <= Decimal::ZERO {
            return Err(DomainError::NonPositiveRate(rate));
        }
        Ok(match self.breakeven {
            Breakeven::Rate(breakeven) if rate > breakeven => HedgeStrategy::Option,
            _ => HedgeStrategy::Forward,
        })
    }

    /// Fixed sentence explaining how to read the break-even, followed by a
    /// note when no break-even exists below the strike.
    pub fn interpretation(&self) -> String {
        let rule = format!(
            "Interpretation: If future {} rises above the breakeven, \
             the option (with premium) beats the forward; otherwise the forward is cheaper.",
            self.context.pair
        );
        match self.breakeven {
            Breakeven::Rate(_) => rule,
            Breakeven::None(_) => format!(
                "{} No breakeven lies below the strike here, so the forward is cheaper at every rate.",
                rule
            ),
        }
    }

    /// The decision metrics report, one entry per line.
    pub fn report_lines(&self) -> Vec<String> {
        let ctx = &self.context;
        let money = |amount: Decimal| ctx.quote.format_amount(amount);
        let breakeven_line = match self.breakeven {
            Breakeven::Rate(rate) => format!(
                "Option vs Forward breakeven rate (below strike): {} ≈ {:.4}",
                ctx.pair, rate
            ),
            Breakeven::None(NoBreakeven::PremiumTooLarge) => {
                "Option vs Forward breakeven: none (premium too large for breakeven below strike)."
                    .to_string()
            }
            Breakeven::None(NoBreakeven::AboveStrike { solved_rate }) => format!(
                "Option vs Forward breakeven: none below strike ({} ≈ {:.4} lies above strike {}).",
                ctx.pair, solved_rate, ctx.strike
            ),
        };

        vec![
            "--- Decision Metrics ---".to_string(),
            format!("Forward cost (locked): {}", money(self.locked_forward_cost)),
            format!(
                "Option max cost (if {} > {}): {}",
                ctx.base,
                ctx.strike,
                money(self.option_max_cost)
            ),
            format!(
                "Option min cost in our grid: {}",
                money(self.option_min_cost_on_grid)
            ),
            breakeven_line,
            self.interpretation(),
        ]
    }
}

impl fmt::Display for DecisionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report_lines().join("\n"))
    }
}
