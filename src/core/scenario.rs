use crate::core::currency::{CurrencyCode, CurrencyPair};
use crate::core::error::{ensure_positive, DomainError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Fixed inputs of a hedging comparison.
///
/// A payer owes `notional` units of the pair's base currency at the end
/// of `tenor` and pays for it in the quote currency. Rates are quoted as
/// base/quote, and every cost formula divides the notional by a rate.
///
/// Values are validated once in [`ScenarioParameters::new`] and are never
/// mutated afterwards.
///
/// # Examples
///
/// ```
/// use hedge_compare::core::scenario::ScenarioParameters;
/// use rust_decimal_macros::dec;
///
/// let params = ScenarioParameters::reference();
/// assert_eq!(params.strike(), dec!(0.86));
/// assert_eq!(params.pair().to_string(), "EUR/GBP");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioParameters {
    pair: CurrencyPair,
    tenor: String,
    spot: Decimal,
    forward_rate: Decimal,
    strike: Decimal,
    premium_pct: Decimal,
    notional: Decimal,
    #[serde(skip)]
    premium_domestic: Decimal,
    #[serde(skip)]
    forward_cost: Decimal,
}

impl ScenarioParameters {
    /// Create a validated scenario.
    ///
    /// `spot`, `forward_rate`, `strike` and `notional` must be positive;
    /// `premium_pct` must lie in `[0, 1]`. The premium, the forward cost and
    /// the capped option cost must fit in a `Decimal`, otherwise
    /// [`DomainError::Overflow`] is returned.
    pub fn new(
        pair: CurrencyPair,
        tenor: impl Into<String>,
        spot: Decimal,
        forward_rate: Decimal,
        strike: Decimal,
        premium_pct: Decimal,
        notional: Decimal,
    ) -> Result<Self, DomainError> {
        if premium_pct < Decimal::ZERO || premium_pct > Decimal::ONE {
            return Err(DomainError::PremiumOutOfRange(premium_pct));
        }
        let spot = ensure_positive("spot", spot)?;
        let forward_rate = ensure_positive("forward rate", forward_rate)?;
        let strike = ensure_positive("strike", strike)?;
        let notional = ensure_positive("notional", notional)?;

        let premium_domestic = premium_pct
            .checked_mul(notional)
            .and_then(|amount| amount.checked_div(spot))
            .ok_or(DomainError::Overflow("option premium"))?;
        let forward_cost = notional
            .checked_div(forward_rate)
            .ok_or(DomainError::Overflow("forward cost"))?;
        notional
            .checked_div(strike)
            .and_then(|capped| capped.checked_add(premium_domestic))
            .ok_or(DomainError::Overflow("capped option cost"))?;

        Ok(Self {
            pair,
            tenor: tenor.into(),
            spot,
            forward_rate,
            strike,
            premium_pct,
            notional,
            premium_domestic,
            forward_cost,
        })
    }

    /// EUR 1,000,000 payable in three months, hedged in GBP.
    pub fn reference() -> Self {
        Self {
            pair: CurrencyPair::new(CurrencyCode::new("EUR"), CurrencyCode::new("GBP")),
            tenor: "3m".to_string(),
            spot: dec!(0.85),
            forward_rate: dec!(0.86),
            strike: dec!(0.86),
            premium_pct: dec!(0.02),
            notional: dec!(1_000_000),
            premium_domestic: dec!(0.02) * dec!(1_000_000) / dec!(0.85),
            forward_cost: dec!(1_000_000) / dec!(0.86),
        }
    }

    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    pub fn tenor(&self) -> &str {
        &self.tenor
    }

    pub fn spot(&self) -> Decimal {
        self.spot
    }

    pub fn forward_rate(&self) -> Decimal {
        self.forward_rate
    }

    pub fn strike(&self) -> Decimal {
        self.strike
    }

    pub fn premium_pct(&self) -> Decimal {
        self.premium_pct
    }

    pub fn notional(&self) -> Decimal {
        self.notional
    }

    /// Option premium in the quote currency, paid today at the spot rate:
    /// `premium_pct * notional / spot`.
    pub fn premium_domestic(&self) -> Decimal {
        self.premium_domestic
    }

    /// Quote-currency cost of the notional at the forward rate.
    pub fn forward_cost(&self) -> Decimal {
        self.forward_cost
    }
}

/// Strictly increasing, positive sequence of hypothetical future rates.
///
/// The upper bound is kept as an explicit field so that grid-bounded
/// metrics do not have to rescan the points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateGrid {
    rates: Vec<Decimal>,
    max_rate: Decimal,
}

impl RateGrid {
    /// Evenly spaced grid over `[min, max]` with `points` entries.
    ///
    /// The first point is exactly `min` and the last exactly `max`.
    ///
    /// ```
    /// use hedge_compare::core::scenario::RateGrid;
    /// use rust_decimal_macros::dec;
    ///
    /// let grid = RateGrid::linspace(dec!(0.80), dec!(0.95), 16).unwrap();
    /// assert_eq!(grid.len(), 16);
    /// assert_eq!(grid.rates()[1], dec!(0.81));
    /// assert_eq!(grid.max_rate(), dec!(0.95));
    /// ```
    pub fn linspace(min: Decimal, max: Decimal, points: usize) -> Result<Self, DomainError> {
        if points < 2 {
            return Err(DomainError::TooFewGridPoints(points));
        }
        if min <= Decimal::ZERO || max <= min {
            return Err(DomainError::InvalidGridBounds { min, max });
        }
        let step = (max - min) / Decimal::from(points - 1);
        let mut rates = (0..points - 1)
            .map(|i| {
                step.checked_mul(Decimal::from(i))
                    .and_then(|offset| min.checked_add(offset))
                    .ok_or(DomainError::Overflow("rate grid point"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        // Pin the endpoint instead of accumulating the step into it.
        rates.push(max);
        // A step below decimal precision collapses neighbouring points.
        Self::from_rates(rates)
    }

    /// Grid from explicit points; they must be positive and strictly increasing.
    pub fn from_rates(rates: Vec<Decimal>) -> Result<Self, DomainError> {
        let max_rate = *rates.last().ok_or(DomainError::EmptyGrid)?;
        for &rate in &rates {
            if rate <= Decimal::ZERO {
                return Err(DomainError::NonPositiveRate(rate));
            }
        }
        for pair in rates.windows(2) {
            if pair[1] <= pair[0] {
                return Err(DomainError::NonIncreasingGrid {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self { rates, max_rate })
    }

    /// Sixteen points from 0.80 to 0.95.
    pub fn reference() -> Self {
        let rates = (0..16u32)
            .map(|i| dec!(0.80) + dec!(0.01) * Decimal::from(i))
            .collect();
        Self {
            rates,
            max_rate: dec!(0.95),
        }
    }

    pub fn rates(&self) -> &[Decimal] {
        &self.rates
    }

    pub fn min_rate(&self) -> Decimal {
        self.rates[0]
    }

    pub fn max_rate(&self) -> Decimal {
        self.max_rate
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.rates.iter().copied()
    }
}
