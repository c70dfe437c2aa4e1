//! Demo scan end to end: source, analyzer, report.

use pretty_assertions::assert_eq;
use time::macros::datetime;
use time::OffsetDateTime;

use prizepicks_ev::config::Config;
use prizepicks_ev::notify::format::{COLOR_OPTIMAL, EMBED_DESCRIPTION_LIMIT};
use prizepicks_ev::notify::{format_console, format_report, ReportOptions};
use prizepicks_ev::odds::{Direction, SlipType};
use prizepicks_ev::scanner::{scan_sports, EvAnalyzer, PropSource};

const NOW: OffsetDateTime = datetime!(2026-10-19 18:00 UTC);

#[tokio::test]
async fn demo_scan_finds_expected_plays() {
    let config = Config::default();
    let source = PropSource::from_config(&config, true).unwrap();

    let props = scan_sports(&source, &config.sports, &config, NOW).await;
    let plays = EvAnalyzer::from_config(&config).find_ev_plays(&props, NOW);

    let summary: Vec<_> = plays
        .iter()
        .map(|p| (p.player_name.as_str(), p.direction, p.hours_until_game))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Nikola Jokic", Direction::Under, 2.0),
            ("Luka Doncic", Direction::Over, 4.5),
            ("Connor McDavid", Direction::Over, 7.0),
        ]
    );
    assert!(plays[1].recommends(SlipType::Power2));
    assert!(plays[2].recommends(SlipType::Flex4));
    assert!(!plays[2].recommends(SlipType::Power2));
}

#[tokio::test]
async fn demo_scan_report_has_both_sections() {
    let config = Config::default();
    let props = scan_sports(&PropSource::Demo, &config.sports, &config, NOW).await;
    let plays = EvAnalyzer::from_config(&config).find_ev_plays(&props, NOW);

    let message = format_report(&plays, NOW, &ReportOptions::from_config(&config));
    let embed = &message.embeds[0];

    assert_eq!(embed.color, COLOR_OPTIMAL);
    assert!(embed.description.contains("Found **3** +EV plays"));
    assert!(embed.description.contains("🔥 PLAY NOW"));
    assert!(embed.description.contains("⏰ UPCOMING"));
    assert!(embed.description.contains("**Connor McDavid** OVER 3.5 shots on goal"));
    assert!(embed.description.chars().count() <= EMBED_DESCRIPTION_LIMIT);

    let json = serde_json::to_string(&message).unwrap();
    assert!(json.contains("\"embeds\""));
}

#[tokio::test]
async fn single_sport_scan_prints_to_console() {
    let config = Config::default();
    let sports = vec!["icehockey_nhl".to_string()];

    let props = scan_sports(&PropSource::Demo, &sports, &config, NOW).await;
    let plays = EvAnalyzer::from_config(&config).find_ev_plays(&props, NOW);
    let out = format_console(&plays);

    assert_eq!(plays.len(), 1);
    assert!(out.contains("🏒 **Connor McDavid**"));
    assert!(out.contains("📅 Starts in 7.0h"));
}
