//! Built-in demonstration props for running without an API key.

use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};

use super::types::PropBet;

struct DemoLine {
    player: &'static str,
    market: &'static str,
    line: Decimal,
    over_odds: i32,
    under_odds: i32,
    team: &'static str,
    opponent: &'static str,
    sport: &'static str,
    starts_in_minutes: i64,
}

fn demo_lines() -> [DemoLine; 7] {
    [
        DemoLine {
            player: "LeBron James",
            market: "points",
            line: Decimal::new(255, 1),
            over_odds: -130,
            under_odds: 100,
            team: "Lakers",
            opponent: "Celtics",
            sport: "basketball_nba",
            starts_in_minutes: 90,
        },
        DemoLine {
            player: "Stephen Curry",
            market: "threes",
            line: Decimal::new(45, 1),
            over_odds: -105,
            under_odds: -125,
            team: "Warriors",
            opponent: "Suns",
            sport: "basketball_nba",
            starts_in_minutes: 180,
        },
        DemoLine {
            player: "Nikola Jokic",
            market: "rebounds",
            line: Decimal::new(125, 1),
            over_odds: 110,
            under_odds: -140,
            team: "Nuggets",
            opponent: "Thunder",
            sport: "basketball_nba",
            starts_in_minutes: 120,
        },
        DemoLine {
            player: "Luka Doncic",
            market: "assists",
            line: Decimal::new(85, 1),
            over_odds: -160,
            under_odds: 130,
            team: "Mavericks",
            opponent: "Spurs",
            sport: "basketball_nba",
            starts_in_minutes: 270,
        },
        DemoLine {
            player: "Tyreek Hill",
            market: "receiving yards",
            line: Decimal::new(725, 1),
            over_odds: -118,
            under_odds: -110,
            team: "Dolphins",
            opponent: "Bills",
            sport: "americanfootball_nfl",
            starts_in_minutes: 300,
        },
        DemoLine {
            player: "Patrick Mahomes",
            market: "passing yards",
            line: Decimal::new(2755, 1),
            over_odds: -105,
            under_odds: -125,
            team: "Chiefs",
            opponent: "Ravens",
            sport: "americanfootball_nfl",
            starts_in_minutes: 480,
        },
        DemoLine {
            player: "Connor McDavid",
            market: "shots on goal",
            line: Decimal::new(35, 1),
            over_odds: -150,
            under_odds: 120,
            team: "Oilers",
            opponent: "Flames",
            sport: "icehockey_nhl",
            starts_in_minutes: 420,
        },
    ]
}

/// Demo props with start times relative to `now`.
pub fn demo_props(now: OffsetDateTime) -> Vec<PropBet> {
    demo_lines()
        .into_iter()
        .map(|d| PropBet {
            player_name: d.player.to_string(),
            team: d.team.to_string(),
            opponent: d.opponent.to_string(),
            sport: d.sport.to_string(),
            market: d.market.to_string(),
            line: d.line,
            over_odds: d.over_odds,
            under_odds: d.under_odds,
            game_time: now + Duration::minutes(d.starts_in_minutes),
            sportsbook: "fanduel".to_string(),
        })
        .collect()
}

/// Demo props for a single sport key.
pub fn demo_props_for(sport: &str, now: OffsetDateTime) -> Vec<PropBet> {
    demo_props(now)
        .into_iter()
        .filter(|p| p.sport == sport)
        .collect()
}
