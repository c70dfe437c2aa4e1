//! The Odds API client.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};

use super::types::{extract_props, within_window, GameEvent, PropBet};
use crate::config::Config;
use crate::error::FeedError;
use crate::metrics;

const QUOTA_UNKNOWN: u32 = u32::MAX;

/// HTTP client for The Odds API (v4).
#[derive(Debug, Clone)]
pub struct OddsApiClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// API base URL.
    base_url: String,
    /// API key.
    api_key: String,
    /// Bookmaker regions (e.g., "us").
    regions: String,
    /// Sharp bookmaker key (e.g., "fanduel").
    bookmaker: String,
    /// Last reported remaining request quota.
    requests_remaining: Arc<AtomicU32>,
    /// Last reported used request quota.
    requests_used: Arc<AtomicU32>,
}

impl OddsApiClient {
    /// Create a client from config. Requires `ODDS_API_KEY`.
    pub fn new(config: &Config) -> Result<Self, FeedError> {
        let api_key = config
            .odds_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(FeedError::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            http,
            base_url: config.odds_api_url.trim_end_matches('/').to_string(),
            api_key,
            regions: config.regions.clone(),
            bookmaker: config.bookmaker.clone(),
            requests_remaining: Arc::new(AtomicU32::new(QUOTA_UNKNOWN)),
            requests_used: Arc::new(AtomicU32::new(QUOTA_UNKNOWN)),
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the bookmaker key odds are taken from.
    pub fn bookmaker(&self) -> &str {
        &self.bookmaker
    }

    /// Remaining request quota from the last response, if reported.
    pub fn requests_remaining(&self) -> Option<u32> {
        match self.requests_remaining.load(Ordering::Relaxed) {
            QUOTA_UNKNOWN => None,
            n => Some(n),
        }
    }

    /// Used request quota from the last response, if reported.
    pub fn requests_used(&self) -> Option<u32> {
        match self.requests_used.load(Ordering::Relaxed) {
            QUOTA_UNKNOWN => None,
            n => Some(n),
        }
    }

    /// List upcoming events for a sport.
    #[instrument(skip(self))]
    pub async fn get_events(&self, sport: &str) -> Result<Vec<GameEvent>, FeedError> {
        let url = format!("{}/sports/{}/odds", self.base_url, sport);
        self.get_json(&url, sport, "h2h").await
    }

    /// Get one market's odds for a single event.
    #[instrument(skip(self))]
    pub async fn get_event_odds(
        &self,
        sport: &str,
        event_id: &str,
        market: &str,
    ) -> Result<GameEvent, FeedError> {
        let url = format!("{}/sports/{}/events/{}/odds", self.base_url, sport, event_id);
        self.get_json(&url, event_id, market).await
    }

    /// Fetch two-sided player props for every event starting within `max_hours`.
    ///
    /// A failing market request is logged and skipped; a failing event listing
    /// fails the whole sport.
    #[instrument(skip(self, markets, now))]
    pub async fn get_player_props(
        &self,
        sport: &str,
        markets: &[String],
        max_hours: i64,
        now: OffsetDateTime,
    ) -> Result<Vec<PropBet>, FeedError> {
        let events = self.get_events(sport).await?;
        let upcoming: Vec<_> = events
            .into_iter()
            .filter(|e| within_window(e.commence_time, now, max_hours))
            .collect();

        debug!(count = upcoming.len(), "Events inside time window");

        let mut props = Vec::new();
        for event in &upcoming {
            for market in markets {
                match self.get_event_odds(sport, &event.id, market).await {
                    Ok(odds) => props.extend(extract_props(&odds, sport, &self.bookmaker)),
                    Err(e) => {
                        warn!(event = %event.id, market = %market, error = %e, "Skipping market");
                    }
                }
            }
        }

        info!(
            sport = %sport,
            events = upcoming.len(),
            props = props.len(),
            remaining = ?self.requests_remaining(),
            "Fetched player props"
        );

        Ok(props)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: &str,
        market: &str,
    ) -> Result<T, FeedError> {
        let start = Instant::now();
        metrics::inc_odds_api_requests();

        let response = self
            .http
            .get(url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("regions", self.regions.as_str()),
                ("markets", market),
                ("oddsFormat", "american"),
                ("bookmakers", self.bookmaker.as_str()),
            ])
            .send()
            .await
            .inspect_err(|_| metrics::inc_odds_api_failures())?;

        metrics::record_odds_api_latency(start);
        self.track_quota(response.headers());

        if !response.status().is_success() {
            metrics::inc_odds_api_failures();
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::FetchFailed {
                resource: resource.to_string(),
                reason: format!("HTTP {} - {}", status, body),
            });
        }

        response.json().await.map_err(|e| {
            metrics::inc_odds_api_failures();
            FeedError::ParseError(format!("{}: {}", resource, e))
        })
    }

    fn track_quota(&self, headers: &reqwest::header::HeaderMap) {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_quota)
        };

        if let Some(remaining) = read("x-requests-remaining") {
            self.requests_remaining.store(remaining, Ordering::Relaxed);
        }
        if let Some(used) = read("x-requests-used") {
            self.requests_used.store(used, Ordering::Relaxed);
        }
    }
}

/// Parse a quota header; the API sometimes reports fractional counts.
fn parse_quota(value: &str) -> Option<u32> {
    let n: f64 = value.trim().parse().ok()?;
    (n >= 0.0 && n < QUOTA_UNKNOWN as f64).then(|| n as u32)
}
