use crate::core::error::DomainError;
use crate::core::scenario::ScenarioParameters;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three ways of covering the payable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HedgeStrategy {
    /// Buy the foreign currency at whatever the market rate turns out to be.
    NoHedge,
    /// Lock the forward rate today.
    Forward,
    /// Buy a call on the foreign currency struck at the scenario strike.
    Option,
}

impl HedgeStrategy {
    pub const ALL: [HedgeStrategy; 3] = [Self::NoHedge, Self::Forward, Self::Option];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoHedge => "No Hedge",
            Self::Forward => "Forward Hedge",
            Self::Option => "Option Hedge",
        }
    }
}

impl fmt::Display for HedgeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Domestic cost of acquiring the notional under each strategy.
///
/// # Examples
///
/// ```
/// use hedge_compare::analysis::payoff::PayoffEvaluator;
/// use hedge_compare::core::scenario::ScenarioParameters;
/// use rust_decimal_macros::dec;
///
/// let params = ScenarioParameters::reference();
/// let evaluator = PayoffEvaluator::new(&params);
///
/// assert_eq!(evaluator.cost_no_hedge(dec!(0.80)).unwrap(), dec!(1_250_000));
/// assert!(evaluator.cost_no_hedge(dec!(0)).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PayoffEvaluator<'a> {
    params: &'a ScenarioParameters,
}

impl<'a> PayoffEvaluator<'a> {
    pub fn new(params: &'a ScenarioParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScenarioParameters {
        self.params
    }

    /// Upfront option premium, converted at today's spot.
    pub fn premium_domestic(&self) -> Decimal {
        self.params.premium_domestic()
    }

    /// Unhedged cost: `notional / r`.
    pub fn cost_no_hedge(&self, rate: Decimal) -> Result<Decimal, DomainError> {
        let rate = positive_rate(rate)?;
        self.params
            .notional()
            .checked_div(rate)
            .ok_or(DomainError::Overflow("no-hedge cost"))
    }

    /// Forward cost: `notional / forward_rate`, independent of the future rate.
    pub fn cost_forward(&self) -> Decimal {
        self.params.forward_cost()
    }

    /// Option cost including premium.
    ///
    /// Exercised strictly above the strike, where the cost is capped at
    /// `notional / strike`. At or below the strike the option lapses and
    /// the notional is bought at the market rate. Both branches agree at
    /// `r == strike`.
    pub fn cost_option(&self, rate: Decimal) -> Result<Decimal, DomainError> {
        let rate = positive_rate(rate)?;
        let settle_at = rate.min(self.params.strike());
        self.params
            .notional()
            .checked_div(settle_at)
            .and_then(|core| core.checked_add(self.premium_domestic()))
            .ok_or(DomainError::Overflow("option cost"))
    }

    /// Cost for `strategy` at `rate`.
    pub fn cost(&self, strategy: HedgeStrategy, rate: Decimal) -> Result<Decimal, DomainError> {
        match strategy {
            HedgeStrategy::NoHedge => self.cost_no_hedge(rate),
            HedgeStrategy::Forward => {
                positive_rate(rate)?;
                Ok(self.cost_forward())
            }
            HedgeStrategy::Option => self.cost_option(rate),
        }
    }
}

fn positive_rate(rate: Decimal) -> Result<Decimal, DomainError> {
    if rate <= Decimal::ZERO {
        return Err(DomainError::NonPositiveRate(rate));
    }
    Ok(rate)
}
