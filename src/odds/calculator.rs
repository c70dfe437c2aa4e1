//! Vig removal and expected value calculations.

use rust_decimal::Decimal;
use serde::Serialize;

use super::american::AmericanOdds;
use crate::error::OddsError;

/// No-vig probabilities for a two-outcome over/under proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FairProbabilities {
    /// Fair probability of the over.
    pub over: Decimal,
    /// Fair probability of the under.
    pub under: Decimal,
    /// Sum of the raw implied probabilities (> 1 when the book charges vig).
    pub total_implied: Decimal,
}

impl FairProbabilities {
    /// Share of the book's overround, e.g. 0.0696 for -112/-118.
    ///
    /// Negative for arbitrage lines whose implied total is below 1.
    pub fn overround(&self) -> Decimal {
        self.total_implied - Decimal::ONE
    }
}

/// Remove the vig from an over/under pair by proportional normalization.
///
/// `over + under` equals one up to decimal rounding, including for lines whose
/// implied total is at or below one.
pub fn remove_vig(over_odds: i32, under_odds: i32) -> Result<FairProbabilities, OddsError> {
    let over = AmericanOdds::new(over_odds)?;
    let under = AmericanOdds::new(under_odds)?;
    Ok(remove_vig_validated(over, under))
}

/// Infallible variant of [`remove_vig`] for already-validated quotes.
pub fn remove_vig_validated(over: AmericanOdds, under: AmericanOdds) -> FairProbabilities {
    let over_implied = over.implied_probability();
    let under_implied = under.implied_probability();
    let total_implied = over_implied + under_implied;

    FairProbabilities {
        over: over_implied / total_implied,
        under: under_implied / total_implied,
        total_implied,
    }
}

/// Expected value of a unit stake on an even-money leg: `2p - 1`.
pub fn expected_value(fair_probability: Decimal) -> Decimal {
    Decimal::TWO * fair_probability - Decimal::ONE
}
