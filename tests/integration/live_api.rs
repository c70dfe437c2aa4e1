//! Live Odds API checks. These spend request quota.

use time::OffsetDateTime;

use prizepicks_ev::config::Config;
use prizepicks_ev::market::OddsApiClient;
use prizepicks_ev::scanner::EvAnalyzer;

/// Config with a real API key, or `None` to skip.
fn live_config() -> Option<Config> {
    dotenvy::dotenv().ok();

    let key = std::env::var("ODDS_API_KEY").ok()?;
    if key.trim().is_empty() {
        return None;
    }

    Some(Config {
        odds_api_key: Some(key),
        markets: vec!["player_points".to_string()],
        ..Config::default()
    })
}

#[tokio::test]
#[ignore]
async fn lists_nba_events() {
    let Some(config) = live_config() else {
        eprintln!("Skipping: ODDS_API_KEY not set");
        return;
    };
    let client = OddsApiClient::new(&config).unwrap();

    let events = client.get_events("basketball_nba").await.unwrap();

    println!("Events: {}", events.len());
    assert!(client.requests_remaining().is_some());
}

#[tokio::test]
#[ignore]
async fn player_props_are_two_sided_and_analyzable() {
    let Some(config) = live_config() else {
        eprintln!("Skipping: ODDS_API_KEY not set");
        return;
    };
    let client = OddsApiClient::new(&config).unwrap();
    let now = OffsetDateTime::now_utc();

    let props = client
        .get_player_props("basketball_nba", &config.markets, config.max_hours_until_game, now)
        .await
        .unwrap();

    for prop in &props {
        assert!(prop.over_odds.abs() >= 100, "{prop:?}");
        assert!(prop.under_odds.abs() >= 100, "{prop:?}");
        assert_eq!(prop.sportsbook, config.bookmaker);
    }

    let plays = EvAnalyzer::from_config(&config).find_ev_plays(&props, now);
    println!("Props: {} | Plays: {}", props.len(), plays.len());
    assert!(plays.len() <= props.len());
}
