//! Integration tests for the PrizePicks +EV scanner.
//!
//! Live feed tests require ODDS_API_KEY and are ignored by default.
//! Run with: cargo test --test integration -- --ignored

mod fair_odds;
mod live_api;
mod scan;
