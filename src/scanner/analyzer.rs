//! +EV play detection over a batch of props.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::error::OddsError;
use crate::market::PropBet;
use crate::metrics;
use crate::odds::{evaluate_proposition, Direction, SlipThresholdTable, SlipType, BREAK_EVEN_TABLE};

/// A prop worth playing on PrizePicks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvPlay {
    /// Player name.
    pub player_name: String,
    /// Team.
    pub team: String,
    /// Opponent.
    pub opponent: String,
    /// Sport key.
    pub sport: String,
    /// Market label.
    pub market: String,
    /// Prop line.
    pub line: Decimal,
    /// Favored side.
    pub direction: Direction,
    /// Fair probability of the favored side.
    pub fair_probability: Decimal,
    /// Even-money EV of the favored side.
    pub expected_value: Decimal,
    /// Slip types that are +EV.
    pub recommended_slips: BTreeSet<SlipType>,
    /// Scheduled start.
    #[serde(with = "time::serde::rfc3339")]
    pub game_time: OffsetDateTime,
    /// Hours until start at analysis time.
    pub hours_until_game: f64,
}

impl EvPlay {
    /// EV as a percentage.
    pub fn ev_percent(&self) -> Decimal {
        self.expected_value * Decimal::ONE_HUNDRED
    }

    /// Fair probability as a percentage.
    pub fn fair_percent(&self) -> Decimal {
        self.fair_probability * Decimal::ONE_HUNDRED
    }

    /// Whether a slip type is recommended.
    pub fn recommends(&self, slip: SlipType) -> bool {
        self.recommended_slips.contains(&slip)
    }
}

/// Evaluates props against the break-even table and a minimum EV.
#[derive(Debug, Clone)]
pub struct EvAnalyzer {
    min_ev: Decimal,
    table: SlipThresholdTable,
}

impl EvAnalyzer {
    /// Create an analyzer with an explicit table.
    pub fn new(min_ev: Decimal, table: SlipThresholdTable) -> Self {
        Self { min_ev, table }
    }

    /// Create an analyzer from config using the standard table.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.min_ev, BREAK_EVEN_TABLE.clone())
    }

    /// Minimum EV a play must reach.
    pub fn min_ev(&self) -> Decimal {
        self.min_ev
    }

    /// Analyze one prop. `Ok(None)` when the favored side is below `min_ev`.
    pub fn analyze_prop(
        &self,
        prop: &PropBet,
        now: OffsetDateTime,
    ) -> Result<Option<EvPlay>, OddsError> {
        let result = evaluate_proposition(prop.over_odds, prop.under_odds, &self.table)?;

        if result.expected_value < self.min_ev {
            return Ok(None);
        }

        Ok(Some(EvPlay {
            player_name: prop.player_name.clone(),
            team: prop.team.clone(),
            opponent: prop.opponent.clone(),
            sport: prop.sport.clone(),
            market: prop.market.clone(),
            line: prop.line,
            direction: result.direction,
            fair_probability: result.fair_probability,
            expected_value: result.expected_value,
            recommended_slips: result.qualifying_slips,
            game_time: prop.game_time,
            hours_until_game: prop.hours_until(now),
        }))
    }

    /// Find plays clearing `min_ev` with at least one qualifying slip.
    ///
    /// Props with invalid odds are logged and skipped. Results are sorted by
    /// hours until start, then by EV descending.
    #[instrument(skip_all, fields(props = props.len()))]
    pub fn find_ev_plays(&self, props: &[PropBet], now: OffsetDateTime) -> Vec<EvPlay> {
        let mut plays = Vec::new();

        for prop in props {
            metrics::inc_props_analyzed();
            match self.analyze_prop(prop, now) {
                Ok(Some(play)) if !play.recommended_slips.is_empty() => {
                    debug!(
                        player = %play.player_name,
                        direction = %play.direction,
                        fair = %play.fair_probability.round_dp(4),
                        "Play qualifies"
                    );
                    plays.push(play);
                }
                Ok(_) => {}
                Err(e) => {
                    metrics::inc_invalid_odds();
                    warn!(
                        player = %prop.player_name,
                        market = %prop.market,
                        error = %e,
                        "Skipping prop"
                    );
                }
            }
        }

        plays.sort_by(rank_plays);
        metrics::inc_plays_found(plays.len() as u64);
        info!(found = plays.len(), "EV analysis complete");

        plays
    }
}

impl Default for EvAnalyzer {
    fn default() -> Self {
        Self::new(Decimal::new(2, 2), SlipThresholdTable::standard())
    }
}

/// Soonest game first, then highest EV.
fn rank_plays(a: &EvPlay, b: &EvPlay) -> Ordering {
    a.hours_until_game
        .total_cmp(&b.hours_until_game)
        .then_with(|| b.expected_value.cmp(&a.expected_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use time::macros::datetime;
    use time::Duration;

    const NOW: OffsetDateTime = datetime!(2026-10-19 12:00 UTC);

    fn test_prop(player: &str, over_odds: i32, under_odds: i32, starts_in_hours: i64) -> PropBet {
        PropBet {
            player_name: player.to_string(),
            team: "Home".to_string(),
            opponent: "Away".to_string(),
            sport: "basketball_nba".to_string(),
            market: "points".to_string(),
            line: dec!(20.5),
            over_odds,
            under_odds,
            game_time: NOW + Duration::hours(starts_in_hours),
            sportsbook: "fanduel".to_string(),
        }
    }

    #[test]
    fn analyze_prop_builds_play() {
        let analyzer = EvAnalyzer::default();
        let play = analyzer
            .analyze_prop(&test_prop("Jokic", 110, -140, 2), NOW)
            .unwrap()
            .unwrap();

        assert_eq!(play.direction, Direction::Under);
        assert_eq!(play.fair_probability.round_dp(4), dec!(0.5506));
        assert_eq!(play.ev_percent().round_dp(1), dec!(10.1));
        assert_eq!(play.hours_until_game, 2.0);
        assert!(play.recommends(SlipType::Flex5));
    }

    #[test]
    fn analyze_prop_drops_below_min_ev() {
        // Favored EV is 1.21%, below the 2% default.
        let analyzer = EvAnalyzer::default();
        assert!(analyzer
            .analyze_prop(&test_prop("Curry", -112, -118, 1), NOW)
            .unwrap()
            .is_none());
    }

    #[test]
    fn analyze_prop_propagates_invalid_odds() {
        let analyzer = EvAnalyzer::default();
        assert_eq!(
            analyzer.analyze_prop(&test_prop("Bad", 0, -110, 1), NOW),
            Err(OddsError::InvalidOdds(0))
        );
    }

    #[test]
    fn find_ev_plays_requires_a_slip() {
        // -130/+100 clears 2% EV (6.1%) but no slip threshold.
        let analyzer = EvAnalyzer::default();
        let plays = analyzer.find_ev_plays(&[test_prop("LeBron", -130, 100, 1)], NOW);
        assert!(plays.is_empty());
    }

    #[test]
    fn find_ev_plays_skips_invalid_and_keeps_going() {
        let analyzer = EvAnalyzer::default();
        let props = vec![
            test_prop("Bad", 0, -110, 1),
            test_prop("Jokic", 110, -140, 2),
        ];

        let plays = analyzer.find_ev_plays(&props, NOW);

        assert_eq!(plays.len(), 1);
        assert_eq!(plays[0].player_name, "Jokic");
    }

    #[test]
    fn find_ev_plays_sorts_by_start_then_ev() {
        let analyzer = EvAnalyzer::default();
        let props = vec![
            test_prop("Later", -200, 150, 5),
            test_prop("SoonLowEv", 110, -140, 1),
            test_prop("SoonHighEv", -160, 130, 1),
        ];

        let names: Vec<_> = analyzer
            .find_ev_plays(&props, NOW)
            .into_iter()
            .map(|p| p.player_name)
            .collect();

        assert_eq!(names, vec!["SoonHighEv", "SoonLowEv", "Later"]);
    }

    #[test]
    fn custom_min_ev_and_table() {
        let table = SlipThresholdTable::new([(SlipType::Power2, dec!(0.50))]).unwrap();
        let analyzer = EvAnalyzer::new(Decimal::ZERO, table);

        let plays = analyzer.find_ev_plays(&[test_prop("Even", -112, -118, 1)], NOW);

        assert_eq!(plays.len(), 1);
        assert_eq!(
            plays[0].recommended_slips,
            BTreeSet::from([SlipType::Power2])
        );
    }
}
