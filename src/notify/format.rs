//! Rendering plays as a webhook embed or console text.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

use crate::config::Config;
use crate::odds::{PropositionReport, SlipThresholdTable, SlipType};
use crate::scanner::EvPlay;

/// Embed title.
pub const REPORT_TITLE: &str = "🎯 PrizePicks +EV Scanner";
/// Grey: nothing found.
pub const COLOR_EMPTY: u32 = 0x808080;
/// Green: at least one play in the optimal window.
pub const COLOR_OPTIMAL: u32 = 0x00FF00;
/// Yellow: only upcoming plays.
pub const COLOR_UPCOMING: u32 = 0xFFFF00;
/// Discord's limit on embed descriptions, in characters.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━";

/// Webhook message body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    /// Message embeds.
    pub embeds: Vec<Embed>,
}

/// A single rich embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    /// Title line.
    pub title: String,
    /// Markdown body.
    pub description: String,
    /// Sidebar color.
    pub color: u32,
    /// When the report was generated.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Footer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

/// Embed footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    /// Footer text.
    pub text: String,
}

/// Which slip products to suggest for a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlipRecommendation {
    /// 5- or 6-pick flex qualifies.
    FiveSixFlex,
    /// 4-pick flex qualifies.
    FourPlusFlex,
    /// Only the 2-pick power play qualifies.
    TwoManPowerOnly,
    /// Nothing from the list above qualifies.
    BelowThreshold,
}

impl SlipRecommendation {
    /// Pick the recommendation for a set of qualifying slips.
    pub fn for_slips(slips: &BTreeSet<SlipType>) -> Self {
        if slips.contains(&SlipType::Flex5) || slips.contains(&SlipType::Flex6) {
            SlipRecommendation::FiveSixFlex
        } else if slips.contains(&SlipType::Flex4) {
            SlipRecommendation::FourPlusFlex
        } else if slips.contains(&SlipType::Power2) {
            SlipRecommendation::TwoManPowerOnly
        } else {
            SlipRecommendation::BelowThreshold
        }
    }

    /// Label with status emoji.
    pub fn label(&self) -> &'static str {
        match self {
            SlipRecommendation::FiveSixFlex => "✅ 5/6 Flex",
            SlipRecommendation::FourPlusFlex => "✅ 4+ Flex",
            SlipRecommendation::TwoManPowerOnly => "⚠️ 2-Man Power only",
            SlipRecommendation::BelowThreshold => "❌ Below threshold",
        }
    }
}

/// Layout knobs for a report.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Plays starting within this many hours go in the optimal section.
    pub optimal_hours: i64,
    /// Maximum plays per section.
    pub max_per_section: usize,
}

impl ReportOptions {
    /// Options from config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            optimal_hours: config.optimal_hours,
            max_per_section: config.max_plays_per_section,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            optimal_hours: 2,
            max_per_section: 10,
        }
    }
}

/// Emoji for a sport key.
pub fn sport_emoji(sport: &str) -> &'static str {
    let family = sport.split('_').next().unwrap_or_default();
    match family {
        "basketball" => "🏀",
        "americanfootball" => "🏈",
        "baseball" => "⚾",
        "icehockey" => "🏒",
        "soccer" => "⚽",
        "tennis" => "🎾",
        _ => "🎯",
    }
}

/// Urgency marker for time until start.
pub fn time_emoji(hours_until_game: f64) -> &'static str {
    if hours_until_game <= 2.0 {
        "🔥"
    } else if hours_until_game <= 6.0 {
        "⏰"
    } else {
        "📅"
    }
}

fn pct(value: Decimal) -> String {
    format!("{:.1}", (value * Decimal::ONE_HUNDRED).round_dp(1))
}

fn signed_pct(value: Decimal) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        format!("{}%", pct(value))
    } else {
        format!("+{}%", pct(value))
    }
}

/// Render one play.
pub fn format_play(play: &EvPlay) -> String {
    format!(
        "{} **{}** {} {} {}\n   {} vs {}\n   📊 Fair Odds: **{}%** | EV: **{}**\n   {}\n   {} Starts in {:.1}h",
        sport_emoji(&play.sport),
        play.player_name,
        play.direction.label(),
        play.line,
        play.market,
        play.team,
        play.opponent,
        pct(play.fair_probability),
        signed_pct(play.expected_value),
        SlipRecommendation::for_slips(&play.recommended_slips).label(),
        time_emoji(play.hours_until_game),
        play.hours_until_game,
    )
}

/// Build the webhook message for a scan.
pub fn format_report(plays: &[EvPlay], now: OffsetDateTime, options: &ReportOptions) -> WebhookMessage {
    if plays.is_empty() {
        return WebhookMessage {
            embeds: vec![Embed {
                title: REPORT_TITLE.to_string(),
                description: "No +EV plays found at this time.\n\n\
                              Check back closer to game time (1-2 hours before tip-off is optimal)."
                    .to_string(),
                color: COLOR_EMPTY,
                timestamp: now,
                footer: None,
            }],
        };
    }

    let optimal_cutoff = options.optimal_hours as f64;
    let (optimal, upcoming): (Vec<&EvPlay>, Vec<&EvPlay>) = plays
        .iter()
        .partition(|p| p.hours_until_game <= optimal_cutoff);

    let mut parts = vec![format!(
        "Found **{}** +EV plays\n🔥 = Optimal window (1-2h before game)\n{}",
        plays.len(),
        RULE
    )];

    if !optimal.is_empty() {
        parts.push("\n**🔥 PLAY NOW - Optimal Window:**".to_string());
        parts.extend(optimal.iter().take(options.max_per_section).map(|p| format_play(p)));
    }

    if !upcoming.is_empty() {
        parts.push("\n**⏰ UPCOMING:**".to_string());
        parts.extend(upcoming.iter().take(options.max_per_section).map(|p| format_play(p)));
    }

    parts.push(format!(
        "\n{}\n💡 **Strategy:**\n\
         • Use 5/6 Man Flex for best long-term profit\n\
         • Bet 0.25-0.5 units per slip\n\
         • Bet closer to game time for best accuracy",
        RULE
    ));

    WebhookMessage {
        embeds: vec![Embed {
            title: REPORT_TITLE.to_string(),
            description: truncate_description(parts.join("\n")),
            color: if optimal.is_empty() {
                COLOR_UPCOMING
            } else {
                COLOR_OPTIMAL
            },
            timestamp: now,
            footer: Some(EmbedFooter {
                text: "Line Comparison Strategy | Data from FanDuel".to_string(),
            }),
        }],
    }
}

/// Cut a description to the embed limit, marking the cut with an ellipsis.
pub fn truncate_description(description: String) -> String {
    if description.chars().count() <= EMBED_DESCRIPTION_LIMIT {
        return description;
    }
    let mut cut: String = description.chars().take(EMBED_DESCRIPTION_LIMIT - 1).collect();
    cut.push('…');
    cut
}

/// Plain-text rendering for stdout.
pub fn format_console(plays: &[EvPlay]) -> String {
    let rule = "=".repeat(50);
    let mut out = format!("{rule}\nPRIZEPICKS +EV PLAYS\n{rule}\n");

    if plays.is_empty() {
        out.push_str("No +EV plays found at this time.\n");
        return out;
    }

    for play in plays {
        let slips: Vec<&str> = play.recommended_slips.iter().map(|s| s.key()).collect();
        let _ = writeln!(out, "{}", format_play(play));
        let _ = writeln!(out, "   Slips: {}", slips.join(", "));
        let _ = writeln!(out, "{}", "-".repeat(40));
    }

    out
}

/// Render a manual no-vig check.
///
/// Qualifying slips are listed easiest first, with the favored-side EV.
pub fn format_manual_check(report: &PropositionReport, table: &SlipThresholdTable) -> String {
    let rule = "=".repeat(50);
    let c = &report.classification;
    let mut out = String::new();

    let _ = writeln!(out, "\n{rule}\n🎯 NO-VIG CALCULATOR\n{rule}");
    let _ = writeln!(out, "\nInput Odds:");
    let _ = writeln!(out, "  Over:  {}", report.over_odds);
    let _ = writeln!(out, "  Under: {}", report.under_odds);
    let _ = writeln!(out, "  Vig:   {:.1}%", report.vig_percent().round_dp(1));

    let _ = writeln!(out, "\n📊 Fair Probabilities (no vig):");
    let _ = writeln!(out, "  Over:  {}%  (EV: {})", pct(c.fair.over), signed_pct(report.over_ev));
    let _ = writeln!(out, "  Under: {}%  (EV: {})", pct(c.fair.under), signed_pct(report.under_ev));

    let _ = writeln!(
        out,
        "\n⭐ Favored: {} ({}%)",
        c.direction.label(),
        pct(c.fair_probability)
    );

    let _ = writeln!(out, "\n✅ Recommended Slip Types:");
    let qualifying: Vec<_> = table
        .by_threshold()
        .into_iter()
        .filter(|(slip, _)| c.qualifies(*slip))
        .collect();

    if qualifying.is_empty() {
        let _ = writeln!(out, "   ❌ Below all thresholds - SKIP this prop");
    }
    for (slip, break_even) in qualifying {
        let _ = writeln!(
            out,
            "   ✓ {} (min {}%) → EV: {}",
            slip.display_name(),
            pct(break_even),
            signed_pct(c.expected_value)
        );
    }

    let _ = write!(out, "\n{rule}");
    out
}

/// Slip catalogue lines, easiest break-even first.
pub fn format_break_even_table(table: &SlipThresholdTable) -> String {
    let mut out = String::new();
    for (slip, break_even) in table.by_threshold() {
        let _ = writeln!(
            out,
            "    {:<8} {} picks  {:>5}x  min {}%",
            slip.display_name(),
            slip.legs(),
            slip.payout_multiplier().to_string(),
            (break_even * Decimal::ONE_HUNDRED).normalize()
        );
    }
    out
}
