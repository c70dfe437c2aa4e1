//! Favored-side classification of an over/under proposition.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;
use strum::{Display, EnumString};

use super::american::AmericanOdds;
use super::calculator::{expected_value, remove_vig_validated, FairProbabilities};
use super::thresholds::{SlipThresholdTable, SlipType};
use crate::error::OddsError;

/// Side of an over/under proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    /// Over the line.
    Over,
    /// Under the line.
    Under,
}

impl Direction {
    /// Get the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Over => Direction::Under,
            Direction::Under => Direction::Over,
        }
    }

    /// Upper-case label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Over => "OVER",
            Direction::Under => "UNDER",
        }
    }
}

/// Outcome of evaluating one proposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvClassification {
    /// Fair probabilities for both sides.
    pub fair: FairProbabilities,
    /// The more probable side.
    pub direction: Direction,
    /// Fair probability of the favored side.
    pub fair_probability: Decimal,
    /// EV of a unit even-money stake on the favored side, in [-1, 1].
    pub expected_value: Decimal,
    /// Slip types the favored side qualifies for.
    pub qualifying_slips: BTreeSet<SlipType>,
}

impl EvClassification {
    /// EV as a percentage.
    pub fn ev_percent(&self) -> Decimal {
        self.expected_value * Decimal::ONE_HUNDRED
    }

    /// Whether any slip type qualifies.
    pub fn is_playable(&self) -> bool {
        !self.qualifying_slips.is_empty()
    }

    /// Whether a given slip qualifies.
    pub fn qualifies(&self, slip: SlipType) -> bool {
        self.qualifying_slips.contains(&slip)
    }
}

/// Classify an already de-vigged pair.
///
/// Over wins an exact tie. Only the favored side is checked against the table.
pub fn classify_fair(fair: FairProbabilities, table: &SlipThresholdTable) -> EvClassification {
    let (direction, fair_probability) = if fair.over >= fair.under {
        (Direction::Over, fair.over)
    } else {
        (Direction::Under, fair.under)
    };

    EvClassification {
        fair,
        direction,
        fair_probability,
        expected_value: expected_value(fair_probability),
        qualifying_slips: table.classify(fair_probability),
    }
}

/// De-vig an over/under pair and classify its favored side.
pub fn evaluate_proposition(
    over_odds: i32,
    under_odds: i32,
    table: &SlipThresholdTable,
) -> Result<EvClassification, OddsError> {
    let over = AmericanOdds::new(over_odds)?;
    let under = AmericanOdds::new(under_odds)?;
    Ok(classify_fair(remove_vig_validated(over, under), table))
}

/// Full breakdown for a manually entered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropositionReport {
    /// Over quote.
    pub over_odds: AmericanOdds,
    /// Under quote.
    pub under_odds: AmericanOdds,
    /// EV of the over at its fair probability.
    pub over_ev: Decimal,
    /// EV of the under at its fair probability.
    pub under_ev: Decimal,
    /// Favored-side classification.
    pub classification: EvClassification,
}

impl PropositionReport {
    /// Book overround as a percentage.
    pub fn vig_percent(&self) -> Decimal {
        self.classification.fair.overround() * Decimal::ONE_HUNDRED
    }

    /// EV of the given side.
    pub fn ev_for(&self, direction: Direction) -> Decimal {
        match direction {
            Direction::Over => self.over_ev,
            Direction::Under => self.under_ev,
        }
    }
}

/// Evaluate a pair and report EV for both sides.
pub fn manual_check(
    over_odds: i32,
    under_odds: i32,
    table: &SlipThresholdTable,
) -> Result<PropositionReport, OddsError> {
    let over = AmericanOdds::new(over_odds)?;
    let under = AmericanOdds::new(under_odds)?;
    let classification = classify_fair(remove_vig_validated(over, under), table);

    Ok(PropositionReport {
        over_odds: over,
        under_odds: under,
        over_ev: expected_value(classification.fair.over),
        under_ev: expected_value(classification.fair.under),
        classification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::BREAK_EVEN_TABLE;
    use rust_decimal_macros::dec;

    #[test]
    fn under_favored_below_thresholds() {
        let result = evaluate_proposition(-112, -118, &BREAK_EVEN_TABLE).unwrap();

        assert_eq!(result.direction, Direction::Under);
        assert_eq!(result.fair_probability.round_dp(4), dec!(0.5061));
        assert_eq!(result.expected_value.round_dp(4), dec!(0.0121));
        assert!(!result.is_playable());
    }

    #[test]
    fn under_favored_qualifies_for_flex() {
        let result = evaluate_proposition(110, -140, &BREAK_EVEN_TABLE).unwrap();

        assert_eq!(result.direction, Direction::Under);
        assert_eq!(result.fair_probability.round_dp(4), dec!(0.5506));
        assert_eq!(
            result.qualifying_slips,
            BTreeSet::from([SlipType::Flex5, SlipType::Flex6])
        );
    }

    #[test]
    fn over_favored_qualifies_for_most_slips() {
        let result = evaluate_proposition(-160, 130, &BREAK_EVEN_TABLE).unwrap();

        assert_eq!(result.direction, Direction::Over);
        assert_eq!(result.fair_probability.round_dp(4), dec!(0.5860));
        assert!(result.qualifies(SlipType::Power3));
        assert!(!result.qualifies(SlipType::Flex3));
        assert_eq!(result.qualifying_slips.len(), 6);
    }

    #[test]
    fn favorite_at_minus_130_has_no_slip() {
        let result = evaluate_proposition(-130, 100, &BREAK_EVEN_TABLE).unwrap();

        assert_eq!(result.direction, Direction::Over);
        assert!(result.fair.over > result.fair.under);
        // 0.5306 is short of the 0.5434 flex break-even.
        assert!(result.qualifying_slips.is_empty());
    }

    #[test]
    fn exact_tie_favors_over() {
        let result = evaluate_proposition(-110, -110, &BREAK_EVEN_TABLE).unwrap();

        assert_eq!(result.fair.over, result.fair.under);
        assert_eq!(result.direction, Direction::Over);
    }

    #[test]
    fn only_favored_side_is_classified() {
        // Under is 0.5506; the over at 0.4494 is never checked even against a low table.
        let table = SlipThresholdTable::new([(SlipType::Flex5, dec!(0.4))]).unwrap();
        let result = evaluate_proposition(110, -140, &table).unwrap();

        assert_eq!(result.direction, Direction::Under);
        assert_eq!(result.qualifying_slips, BTreeSet::from([SlipType::Flex5]));
    }

    #[test]
    fn zero_odds_propagates_invalid_odds() {
        assert_eq!(
            evaluate_proposition(0, -110, &BREAK_EVEN_TABLE),
            Err(OddsError::InvalidOdds(0))
        );
        assert_eq!(
            evaluate_proposition(-110, 0, &BREAK_EVEN_TABLE),
            Err(OddsError::InvalidOdds(0))
        );
    }

    #[test]
    fn manual_check_reports_both_sides() {
        let report = manual_check(-112, -118, &BREAK_EVEN_TABLE).unwrap();

        assert_eq!(report.vig_percent().round_dp(1), dec!(7.0));
        assert_eq!(report.over_ev.round_dp(4), dec!(-0.0121));
        assert_eq!(report.under_ev.round_dp(4), dec!(0.0121));
        assert_eq!(report.ev_for(report.classification.direction), report.under_ev);
    }

    #[test]
    fn direction_parses_case_insensitively() {
        use std::str::FromStr;
        assert_eq!(Direction::from_str("Over").unwrap(), Direction::Over);
        assert_eq!(Direction::from_str("under").unwrap(), Direction::Under);
        assert_eq!(Direction::Over.opposite(), Direction::Under);
    }
}
