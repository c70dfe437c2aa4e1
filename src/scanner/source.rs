//! Where props come from, and the multi-sport scan loop.

use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::FeedError;
use crate::market::{demo_props_for, OddsApiClient, PropBet};

/// Source of props for a scan.
#[derive(Debug, Clone)]
pub enum PropSource {
    /// Live odds from The Odds API.
    Live(OddsApiClient),
    /// Built-in demo props.
    Demo,
}

impl PropSource {
    /// Pick a source: live when an API key is configured and demo was not requested.
    pub fn from_config(config: &Config, force_demo: bool) -> Result<Self, FeedError> {
        if force_demo || !config.has_api_key() {
            return Ok(PropSource::Demo);
        }
        Ok(PropSource::Live(OddsApiClient::new(config)?))
    }

    /// Whether this is the demo source.
    pub fn is_demo(&self) -> bool {
        matches!(self, PropSource::Demo)
    }

    /// Fetch props for one sport.
    pub async fn fetch_props(
        &self,
        sport: &str,
        config: &Config,
        now: OffsetDateTime,
    ) -> Result<Vec<PropBet>, FeedError> {
        match self {
            PropSource::Live(client) => {
                client
                    .get_player_props(sport, &config.markets, config.max_hours_until_game, now)
                    .await
            }
            PropSource::Demo => Ok(demo_props_for(sport, now)),
        }
    }
}

/// Collect props across sports. A failing sport is logged and skipped.
#[instrument(skip_all, fields(demo = source.is_demo()))]
pub async fn scan_sports(
    source: &PropSource,
    sports: &[String],
    config: &Config,
    now: OffsetDateTime,
) -> Vec<PropBet> {
    let mut props = Vec::new();

    for sport in sports.iter().filter(|s| !s.trim().is_empty()) {
        info!(sport = %sport, "Scanning");
        match source.fetch_props(sport, config, now).await {
            Ok(found) => {
                info!(sport = %sport, count = found.len(), "Found props");
                props.extend(found);
            }
            Err(e) => {
                warn!(sport = %sport, error = %e, "Sport scan failed, continuing");
            }
        }
    }

    props
}
