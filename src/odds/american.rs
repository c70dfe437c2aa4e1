//! American odds encoding and implied probability conversions.
//!
//! A negative quote `-N` means a stake of `N` wins 100; a positive quote `+N`
//! means a stake of 100 wins `N`. Quotes strictly between -100 and +100 are
//! not part of the encoding and are rejected.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::OddsError;

/// A validated American odds quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    /// Validate a raw quote.
    pub fn new(odds: i32) -> Result<Self, OddsError> {
        if odds > -100 && odds < 100 {
            return Err(OddsError::InvalidOdds(odds));
        }
        Ok(Self(odds))
    }

    /// Raw quote value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Implied probability, strictly within (0, 1).
    pub fn implied_probability(self) -> Decimal {
        let odds = Decimal::from(self.0);
        if self.0 > 0 {
            Decimal::ONE_HUNDRED / (odds + Decimal::ONE_HUNDRED)
        } else {
            let stake = -odds;
            stake / (stake + Decimal::ONE_HUNDRED)
        }
    }
}

impl TryFrom<i32> for AmericanOdds {
    type Error = OddsError;

    fn try_from(odds: i32) -> Result<Self, Self::Error> {
        Self::new(odds)
    }
}

impl From<AmericanOdds> for i32 {
    fn from(odds: AmericanOdds) -> Self {
        odds.0
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// Convert a raw American quote to its implied probability.
///
/// Fails with [`OddsError::InvalidOdds`] for quotes in (-100, 100), zero included.
pub fn american_to_implied_probability(odds: i32) -> Result<Decimal, OddsError> {
    Ok(AmericanOdds::new(odds)?.implied_probability())
}

/// Convert a probability back to an American quote, truncating toward zero.
///
/// Returns `None` outside the open interval (0, 1) or when the quote does
/// not fit in a `Decimal` or an `i32`.
pub fn implied_probability_to_american(probability: Decimal) -> Option<i32> {
    if probability <= Decimal::ZERO || probability >= Decimal::ONE {
        return None;
    }

    let complement = Decimal::ONE - probability;
    let quote = if probability >= dec!(0.5) {
        -Decimal::ONE_HUNDRED
            .checked_mul(probability)?
            .checked_div(complement)?
    } else {
        Decimal::ONE_HUNDRED
            .checked_mul(complement)?
            .checked_div(probability)?
    };

    quote.trunc().to_i32()
}
