//! Unified error types for the +EV scanner.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::odds::SlipType;

/// Unified error type for the scanner.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No-vig / EV calculation error.
    #[error("odds error: {0}")]
    Odds(#[from] OddsError),

    /// Odds feed error.
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// Webhook delivery error.
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the fair-odds engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OddsError {
    /// American odds inside (-100, 100), which have no meaning.
    #[error("invalid American odds {0}: must be <= -100 or >= +100")]
    InvalidOdds(i32),

    /// Break-even probability outside the open interval (0, 1).
    #[error("invalid break-even for {slip}: {value} is not within (0, 1)")]
    InvalidBreakEven {
        /// Slip the threshold was supplied for.
        slip: SlipType,
        /// Offending value.
        value: Decimal,
    },
}

/// Odds feed errors.
#[derive(Error, Debug)]
pub enum FeedError {
    /// No API key configured for live scanning.
    #[error("ODDS_API_KEY is not configured")]
    MissingApiKey,

    /// Request returned a non-success status.
    #[error("failed to fetch {resource}: {reason}")]
    FetchFailed {
        /// What was being fetched (sport or event).
        resource: String,
        /// Reason for failure.
        reason: String,
    },

    /// Response body could not be decoded.
    #[error("failed to parse odds response: {0}")]
    ParseError(String),

    /// HTTP request failed.
    #[error("http request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Webhook delivery errors.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// No webhook URL configured.
    #[error("DISCORD_WEBHOOK_URL is not configured")]
    MissingWebhook,

    /// Webhook answered with a non-success status.
    #[error("webhook rejected message: HTTP {status} - {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// HTTP request failed.
    #[error("http request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
