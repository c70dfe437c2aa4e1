//! Application configuration loaded from environment variables.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Odds Feed ===
    /// The Odds API key. Demo mode runs without one.
    #[serde(default)]
    pub odds_api_key: Option<String>,

    /// The Odds API base URL.
    #[serde(default = "default_odds_api_url")]
    pub odds_api_url: String,

    /// Sport keys to scan (comma-separated).
    #[serde(default = "default_sports")]
    pub sports: Vec<String>,

    /// Prop market keys to fetch per event (comma-separated).
    #[serde(default = "default_markets")]
    pub markets: Vec<String>,

    /// Sharp bookmaker whose lines are de-vigged.
    #[serde(default = "default_bookmaker")]
    pub bookmaker: String,

    /// Bookmaker regions.
    #[serde(default = "default_regions")]
    pub regions: String,

    /// HTTP request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    // === Strategy ===
    /// Minimum favored-side EV to report (0.02 = 2%).
    #[serde(default = "default_min_ev")]
    pub min_ev: Decimal,

    /// Only scan games starting within this many hours.
    #[serde(default = "default_max_hours_until_game")]
    pub max_hours_until_game: i64,

    /// Plays starting within this many hours are in the optimal window.
    #[serde(default = "default_optimal_hours")]
    pub optimal_hours: i64,

    /// Maximum plays listed per report section.
    #[serde(default = "default_max_plays_per_section")]
    pub max_plays_per_section: usize,

    // === Notification ===
    /// Discord webhook URL. Results are printed when unset.
    #[serde(default)]
    pub discord_webhook_url: Option<String>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit JSON log lines.
    #[serde(default)]
    pub log_json: bool,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_odds_api_url() -> String {
    "https://api.the-odds-api.com/v4".to_string()
}

fn default_sports() -> Vec<String> {
    [
        "basketball_nba",
        "basketball_ncaab",
        "americanfootball_nfl",
        "americanfootball_ncaaf",
        "baseball_mlb",
        "icehockey_nhl",
        "soccer_epl",
        "tennis_atp_french_open",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_markets() -> Vec<String> {
    [
        "player_points",
        "player_rebounds",
        "player_assists",
        "player_threes",
        "player_blocks",
        "player_steals",
        "player_points_rebounds_assists",
        "player_points_rebounds",
        "player_points_assists",
        "player_rebounds_assists",
        "pitcher_strikeouts",
        "batter_hits",
        "batter_total_bases",
        "batter_rbis",
        "batter_runs",
        "player_shots_on_goal",
        "player_goals",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_bookmaker() -> String {
    "fanduel".to_string()
}

fn default_regions() -> String {
    "us".to_string()
}

fn default_http_timeout_ms() -> u64 {
    30_000
}

fn default_min_ev() -> Decimal {
    Decimal::new(2, 2) // 0.02
}

fn default_max_hours_until_game() -> i64 {
    12
}

fn default_optimal_hours() -> i64 {
    2
}

fn default_max_plays_per_section() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odds_api_key: None,
            odds_api_url: default_odds_api_url(),
            sports: default_sports(),
            markets: default_markets(),
            bookmaker: default_bookmaker(),
            regions: default_regions(),
            http_timeout_ms: default_http_timeout_ms(),
            min_ev: default_min_ev(),
            max_hours_until_game: default_max_hours_until_game(),
            optimal_hours: default_optimal_hours(),
            max_plays_per_section: default_max_plays_per_section(),
            discord_webhook_url: None,
            rust_log: default_log_level(),
            log_json: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_ev < Decimal::ZERO || self.min_ev >= Decimal::ONE {
            return Err("MIN_EV must be within [0, 1)".to_string());
        }

        if self.max_hours_until_game <= 0 {
            return Err("MAX_HOURS_UNTIL_GAME must be positive".to_string());
        }

        if self.optimal_hours < 0 || self.optimal_hours > self.max_hours_until_game {
            return Err("OPTIMAL_HOURS must be within [0, MAX_HOURS_UNTIL_GAME]".to_string());
        }

        if self.sports.iter().all(|s| s.trim().is_empty()) {
            return Err("SPORTS must list at least one sport key".to_string());
        }

        if self.markets.iter().all(|m| m.trim().is_empty()) {
            return Err("MARKETS must list at least one market key".to_string());
        }

        if let Some(webhook) = &self.discord_webhook_url {
            let url = url::Url::parse(webhook)
                .map_err(|e| format!("DISCORD_WEBHOOK_URL is not a valid URL: {}", e))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err("DISCORD_WEBHOOK_URL must be an http(s) URL".to_string());
            }
        }

        Ok(())
    }

    /// Apply per-run overrides for the API key and webhook URL.
    pub fn with_overrides(mut self, api_key: Option<String>, webhook_url: Option<String>) -> Self {
        if api_key.is_some() {
            self.odds_api_key = api_key;
        }
        if webhook_url.is_some() {
            self.discord_webhook_url = webhook_url;
        }
        self
    }

    /// Tracing filter directive. `verbose` forces crate debug output.
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose || self.verbose {
            "prizepicks_ev=debug,info".to_string()
        } else {
            self.rust_log.clone()
        }
    }

    /// Whether a live feed can be used.
    pub fn has_api_key(&self) -> bool {
        self.odds_api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Whether results can be posted.
    pub fn has_webhook(&self) -> bool {
        self.discord_webhook_url
            .as_deref()
            .is_some_and(|u| !u.trim().is_empty())
    }
}
