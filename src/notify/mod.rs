//! Report formatting and webhook delivery.

pub mod format;
pub mod webhook;

pub use format::{
    format_break_even_table, format_console, format_manual_check, format_play, format_report,
    ReportOptions, SlipRecommendation, WebhookMessage,
};
pub use webhook::DiscordNotifier;
