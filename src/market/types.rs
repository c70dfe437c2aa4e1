//! Odds feed types and player-prop extraction.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::odds::Direction;

/// Game event from the odds API, optionally carrying bookmaker odds.
#[derive(Debug, Clone, Deserialize)]
pub struct GameEvent {
    /// Event ID used for per-event odds requests.
    pub id: String,
    /// Sport key (e.g., "basketball_nba").
    pub sport_key: String,
    /// Sport title (e.g., "NBA").
    #[serde(default)]
    pub sport_title: Option<String>,
    /// Scheduled start.
    #[serde(with = "time::serde::rfc3339")]
    pub commence_time: OffsetDateTime,
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Bookmaker odds, empty on the event listing.
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

/// Odds from a single bookmaker.
#[derive(Debug, Clone, Deserialize)]
pub struct Bookmaker {
    /// Bookmaker key (e.g., "fanduel").
    pub key: String,
    /// Bookmaker display title.
    #[serde(default)]
    pub title: String,
    /// Markets quoted by this bookmaker.
    #[serde(default)]
    pub markets: Vec<MarketOdds>,
}

/// One market (e.g., "player_points") and its outcomes.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketOdds {
    /// Market key.
    pub key: String,
    /// Quoted outcomes.
    #[serde(default)]
    pub outcomes: Vec<OutcomePrice>,
}

/// A single quoted outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct OutcomePrice {
    /// "Over" or "Under" for props.
    pub name: String,
    /// Player name for props.
    #[serde(default)]
    pub description: Option<String>,
    /// American price.
    pub price: f64,
    /// Prop line.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub point: Option<Decimal>,
}

impl OutcomePrice {
    /// Price as an integer American quote.
    pub fn american(&self) -> i32 {
        self.price.round() as i32
    }

    /// Side of the line, if this is an over/under outcome.
    pub fn direction(&self) -> Option<Direction> {
        self.name.parse().ok()
    }
}

/// A two-sided player prop from a single sportsbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropBet {
    /// Player name.
    pub player_name: String,
    /// Team (home team of the event).
    pub team: String,
    /// Opponent (away team of the event).
    pub opponent: String,
    /// Sport key.
    pub sport: String,
    /// Market label (e.g., "points").
    pub market: String,
    /// Prop line (e.g., 25.5).
    pub line: Decimal,
    /// American odds for the over.
    pub over_odds: i32,
    /// American odds for the under.
    pub under_odds: i32,
    /// Scheduled start.
    #[serde(with = "time::serde::rfc3339")]
    pub game_time: OffsetDateTime,
    /// Sportsbook the odds come from.
    pub sportsbook: String,
}

impl PropBet {
    /// Hours from `now` until the game starts (negative once started).
    pub fn hours_until(&self, now: OffsetDateTime) -> f64 {
        hours_until(self.game_time, now)
    }
}

/// Hours between `now` and `start`.
pub fn hours_until(start: OffsetDateTime, now: OffsetDateTime) -> f64 {
    (start - now).as_seconds_f64() / 3600.0
}

/// Whether a game starts within the next `max_hours` and has not started yet.
pub fn within_window(start: OffsetDateTime, now: OffsetDateTime, max_hours: i64) -> bool {
    let hours = hours_until(start, now);
    (0.0..=max_hours as f64).contains(&hours)
}

/// Human label for a market key: "player_points_rebounds" -> "points rebounds".
pub fn market_label(market_key: &str) -> String {
    market_key
        .strip_prefix("player_")
        .unwrap_or(market_key)
        .replace('_', " ")
}

#[derive(Default)]
struct TwoSidedLine {
    over: Option<i32>,
    under: Option<i32>,
}

/// Pair over/under outcomes of one bookmaker into props.
///
/// Outcomes are grouped by player and line; a group missing either side is dropped.
pub fn extract_props(event: &GameEvent, sport: &str, bookmaker: &str) -> Vec<PropBet> {
    let mut props = Vec::new();

    for book in event.bookmakers.iter().filter(|b| b.key == bookmaker) {
        for market in &book.markets {
            let mut lines: BTreeMap<(String, Decimal), TwoSidedLine> = BTreeMap::new();

            for outcome in &market.outcomes {
                let Some(direction) = outcome.direction() else {
                    continue;
                };
                let player = outcome.description.clone().unwrap_or_default();
                let line = outcome.point.unwrap_or_default();
                let entry = lines.entry((player, line)).or_default();
                match direction {
                    Direction::Over => entry.over = Some(outcome.american()),
                    Direction::Under => entry.under = Some(outcome.american()),
                }
            }

            for ((player_name, line), sides) in lines {
                if let (Some(over_odds), Some(under_odds)) = (sides.over, sides.under) {
                    props.push(PropBet {
                        player_name,
                        team: event.home_team.clone(),
                        opponent: event.away_team.clone(),
                        sport: sport.to_string(),
                        market: market_label(&market.key),
                        line,
                        over_odds,
                        under_odds,
                        game_time: event.commence_time,
                        sportsbook: book.key.clone(),
                    });
                }
            }
        }
    }

    props
}
