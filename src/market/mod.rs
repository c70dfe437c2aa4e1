//! Market module for sportsbook player props.
//!
//! This module handles:
//! - Odds feed types and prop extraction
//! - The Odds API client
//! - Demo props for running without an API key

pub mod client;
pub mod demo;
pub mod types;

pub use client::OddsApiClient;
pub use demo::{demo_props, demo_props_for};
pub use types::{extract_props, hours_until, within_window, GameEvent, PropBet};
