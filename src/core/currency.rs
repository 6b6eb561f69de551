use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217-style currency code.
///
/// # Examples
///
/// ```
/// use hedge_compare::core::currency::CurrencyCode;
///
/// let eur = CurrencyCode::new("EUR");
/// let gbp = CurrencyCode::new("GBP");
/// assert_ne!(eur, gbp);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix used when printing amounts in this currency.
    ///
    /// Well-known codes get their symbol; anything else falls back to
    /// the code followed by a space, e.g. `"CHF "`.
    pub fn symbol(&self) -> String {
        match self.0.as_str() {
            "GBP" => "£".to_string(),
            "EUR" => "€".to_string(),
            "USD" => "$".to_string(),
            "JPY" => "¥".to_string(),
            other => format!("{} ", other),
        }
    }

    /// Whole-unit amount with thousands separators, e.g. `£1,162,791`.
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{}{}", self.symbol(), group_thousands(amount))
    }
}

/// Round half away from zero to whole units and insert `,` separators.
pub fn group_thousands(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A quoted currency pair.
///
/// `base` is the foreign currency the payable is denominated in and
/// `quote` is the domestic currency the costs are paid in. Rates are
/// quoted the way the market quotes the pair, e.g. `EUR/GBP`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: CurrencyCode,
    pub quote: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(base: CurrencyCode, quote: CurrencyCode) -> Self {
        Self { base, quote }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
