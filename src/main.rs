//! PrizePicks +EV scanner entry point.

use std::time::Instant;

use clap::{Parser, Subcommand};
use time::OffsetDateTime;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prizepicks_ev::config::Config;
use prizepicks_ev::metrics;
use prizepicks_ev::notify::{
    format_break_even_table, format_console, format_manual_check, format_report, DiscordNotifier,
    ReportOptions,
};
use prizepicks_ev::odds::{manual_check, BREAK_EVEN_TABLE};
use prizepicks_ev::scanner::{scan_sports, EvAnalyzer, PropSource};

/// No-vig +EV scanner for PrizePicks player props.
#[derive(Parser, Debug)]
#[command(name = "prizepicks-ev")]
#[command(about = "Find +EV PrizePicks props by removing the vig from sharp sportsbook lines")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan upcoming games for +EV props (default).
    Scan {
        /// Use built-in demo props instead of the live feed.
        #[arg(long)]
        demo: bool,

        /// Sport key to scan (repeatable). Defaults to SPORTS.
        #[arg(long = "sport", value_name = "KEY")]
        sports: Vec<String>,

        /// Print results instead of posting to the webhook.
        #[arg(long)]
        print: bool,

        /// The Odds API key for this run.
        #[arg(long, env = "ODDS_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Discord webhook URL for this run.
        #[arg(long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
        webhook: Option<String>,
    },

    /// De-vig one over/under pair and list qualifying slips.
    #[command(allow_negative_numbers = true)]
    Check {
        /// American odds for the over (e.g. -112).
        over: i32,

        /// American odds for the under (e.g. -118).
        under: i32,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let loaded = Config::load();

    // Initialize logging
    let directive = match &loaded {
        Ok(config) => config.log_filter(args.verbose),
        Err(_) => Config::default().log_filter(args.verbose),
    };
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));
    let log_json = loaded.as_ref().is_ok_and(|c| c.log_json);

    tracing_subscriber::registry()
        .with(log_json.then(|| fmt::layer().json()))
        .with((!log_json).then(fmt::layer))
        .with(filter)
        .init();

    metrics::init_metrics();

    match args.command {
        Some(Command::Scan {
            demo,
            sports,
            print,
            api_key,
            webhook,
        }) => {
            let config = loaded?.with_overrides(api_key, webhook);
            cmd_scan(config, demo, sports, print).await
        }
        Some(Command::Check { over, under }) => cmd_check(over, under),
        Some(Command::CheckConfig) => cmd_check_config(loaded),
        None => cmd_scan(loaded?, false, Vec::new(), false).await,
    }
}

/// Scan, analyze and report.
async fn cmd_scan(
    config: Config,
    demo: bool,
    sports: Vec<String>,
    print: bool,
) -> anyhow::Result<()> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;

    let source = PropSource::from_config(&config, demo)?;
    if source.is_demo() && !demo {
        warn!("ODDS_API_KEY not set, using demo data");
    }

    let sports = if sports.is_empty() {
        config.sports.clone()
    } else {
        sports
    };

    let now = OffsetDateTime::now_utc();
    let started = Instant::now();
    info!(
        sports = sports.len(),
        window_hours = config.max_hours_until_game,
        demo = source.is_demo(),
        "Starting scan"
    );

    let props = scan_sports(&source, &sports, &config, now).await;
    info!(props = props.len(), "Props collected");

    if let PropSource::Live(client) = &source {
        if let Some(remaining) = client.requests_remaining() {
            info!(remaining, "Odds API quota");
        }
    }

    let analyzer = EvAnalyzer::from_config(&config);
    let plays = analyzer.find_ev_plays(&props, now);
    info!(
        plays = plays.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Scan complete"
    );

    if print || !config.has_webhook() {
        if !print {
            warn!("DISCORD_WEBHOOK_URL not set, printing results");
        }
        println!("{}", format_console(&plays));
        return Ok(());
    }

    let message = format_report(&plays, now, &ReportOptions::from_config(&config));
    DiscordNotifier::from_config(&config)?.post(&message).await?;
    info!(plays = plays.len(), "Posted to Discord");

    Ok(())
}

/// Manual no-vig check for one pair of odds.
fn cmd_check(over: i32, under: i32) -> anyhow::Result<()> {
    let report = manual_check(over, under, &BREAK_EVEN_TABLE)?;
    println!("{}", format_manual_check(&report, &BREAK_EVEN_TABLE));
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(loaded: Result<Config, envy::Error>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PRIZEPICKS +EV SCANNER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match loaded {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!(
        "  Odds Feed: {}",
        if config.has_api_key() {
            "Live (ODDS_API_KEY set)"
        } else {
            "Demo (ODDS_API_KEY not set)"
        }
    );
    println!("  Odds API URL: {}", config.odds_api_url);
    println!("  Bookmaker: {} ({})", config.bookmaker, config.regions);
    println!("  Sports: {}", config.sports.join(", "));
    println!("  Markets: {}", config.markets.len());
    println!("  Min EV: {}%", config.min_ev * rust_decimal::Decimal::ONE_HUNDRED);
    println!("  Game Window: {}h (optimal <= {}h)", config.max_hours_until_game, config.optimal_hours);
    println!("  Plays per Section: {}", config.max_plays_per_section);
    println!(
        "  Webhook: {}",
        if config.has_webhook() { "Enabled" } else { "Disabled (print only)" }
    );
    println!(
        "  Log Filter: {}{}",
        config.log_filter(false),
        if config.log_json { " (json)" } else { "" }
    );
    println!("  Slip Break-Even Rates:");
    print!("{}", format_break_even_table(&BREAK_EVEN_TABLE));
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
