//! PrizePicks slip types and their per-leg break-even probabilities.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::OddsError;

/// Standard break-even table, built once from [`SlipType::break_even`].
pub static BREAK_EVEN_TABLE: Lazy<SlipThresholdTable> = Lazy::new(SlipThresholdTable::standard);

/// A PrizePicks slip product.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum SlipType {
    /// 2-pick power play.
    #[serde(rename = "2_power")]
    #[strum(serialize = "2_power")]
    Power2,
    /// 3-pick power play.
    #[serde(rename = "3_power")]
    #[strum(serialize = "3_power")]
    Power3,
    /// 3-pick flex play.
    #[serde(rename = "3_flex")]
    #[strum(serialize = "3_flex")]
    Flex3,
    /// 4-pick power play.
    #[serde(rename = "4_power")]
    #[strum(serialize = "4_power")]
    Power4,
    /// 4-pick flex play.
    #[serde(rename = "4_flex")]
    #[strum(serialize = "4_flex")]
    Flex4,
    /// 5-pick flex play. Best long-term return.
    #[serde(rename = "5_flex")]
    #[strum(serialize = "5_flex")]
    Flex5,
    /// 6-pick flex play. Best long-term return.
    #[serde(rename = "6_flex")]
    #[strum(serialize = "6_flex")]
    Flex6,
}

impl SlipType {
    /// Table key, e.g. `"5_flex"`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Human-readable name, e.g. `"5 Flex"`.
    pub fn display_name(self) -> &'static str {
        match self {
            SlipType::Power2 => "2 Power",
            SlipType::Power3 => "3 Power",
            SlipType::Flex3 => "3 Flex",
            SlipType::Power4 => "4 Power",
            SlipType::Flex4 => "4 Flex",
            SlipType::Flex5 => "5 Flex",
            SlipType::Flex6 => "6 Flex",
        }
    }

    /// Minimum per-leg win probability for a non-negative EV slip.
    pub fn break_even(self) -> Decimal {
        match self {
            SlipType::Power2 => Decimal::new(5774, 4),
            SlipType::Power3 => Decimal::new(5848, 4),
            SlipType::Flex3 => Decimal::new(5980, 4),
            SlipType::Power4 => Decimal::new(5623, 4),
            SlipType::Flex4 => Decimal::new(5689, 4),
            SlipType::Flex5 => Decimal::new(5434, 4),
            SlipType::Flex6 => Decimal::new(5434, 4),
        }
    }

    /// Top payout multiplier when every leg hits.
    pub fn payout_multiplier(self) -> Decimal {
        match self {
            SlipType::Power2 => Decimal::new(2, 0),
            SlipType::Power3 => Decimal::new(3, 0),
            SlipType::Flex3 => Decimal::new(225, 2),
            SlipType::Power4 => Decimal::new(5, 0),
            SlipType::Flex4 => Decimal::new(3, 0),
            SlipType::Flex5 => Decimal::new(5, 0),
            SlipType::Flex6 => Decimal::new(10, 0),
        }
    }

    /// Number of picks on the slip.
    pub fn legs(self) -> u8 {
        match self {
            SlipType::Power2 => 2,
            SlipType::Power3 | SlipType::Flex3 => 3,
            SlipType::Power4 | SlipType::Flex4 => 4,
            SlipType::Flex5 => 5,
            SlipType::Flex6 => 6,
        }
    }
}

/// Immutable mapping from slip type to break-even probability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlipThresholdTable {
    thresholds: BTreeMap<SlipType, Decimal>,
}

impl SlipThresholdTable {
    /// Build a table, rejecting break-evens outside (0, 1).
    pub fn new(
        entries: impl IntoIterator<Item = (SlipType, Decimal)>,
    ) -> Result<Self, OddsError> {
        let mut thresholds = BTreeMap::new();
        for (slip, value) in entries {
            if value <= Decimal::ZERO || value >= Decimal::ONE {
                return Err(OddsError::InvalidBreakEven { slip, value });
            }
            thresholds.insert(slip, value);
        }
        Ok(Self { thresholds })
    }

    /// The standard PrizePicks table.
    pub fn standard() -> Self {
        Self {
            thresholds: SlipType::iter().map(|s| (s, s.break_even())).collect(),
        }
    }

    /// Break-even for a slip, if present.
    pub fn get(&self, slip: SlipType) -> Option<Decimal> {
        self.thresholds.get(&slip).copied()
    }

    /// Iterate entries in slip declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SlipType, Decimal)> + '_ {
        self.thresholds.iter().map(|(s, v)| (*s, *v))
    }

    /// Entries ordered by ascending break-even (easiest slip first).
    pub fn by_threshold(&self) -> Vec<(SlipType, Decimal)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(_, v)| *v);
        entries
    }

    /// Number of slip types in the table.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Slip types whose break-even is met by `fair_probability` (non-strict).
    pub fn classify(&self, fair_probability: Decimal) -> BTreeSet<SlipType> {
        self.thresholds
            .iter()
            .filter(|(_, break_even)| fair_probability >= **break_even)
            .map(|(slip, _)| *slip)
            .collect()
    }
}

impl Default for SlipThresholdTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Slip types that are +EV at `fair_probability`. Empty when below every threshold.
pub fn classify_slips(fair_probability: Decimal, table: &SlipThresholdTable) -> BTreeSet<SlipType> {
    table.classify(fair_probability)
}
