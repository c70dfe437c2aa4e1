//! PrizePicks +EV scanner.
//!
//! This library removes the vig from a sharp sportsbook's two-way player prop
//! odds and compares the resulting fair probability against the break-even
//! win rate of each PrizePicks slip type.
//!
//! # Strategy
//!
//! PrizePicks lines carry no per-pick price, so the edge comes from picking
//! the side a sharp book prices as more likely:
//!
//! ```text
//! FanDuel OVER  -160  → implied 61.5%
//! FanDuel UNDER +130  → implied 43.5%
//! ──────────────────────────────────
//! Total:  105.0% (5.0% vig)
//! Fair OVER:  58.6% ≥ 54.3% (5/6 Flex break-even) ✅
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`odds`]: No-vig fair odds and slip classification
//! - [`market`]: Odds feed client, prop types and demo data
//! - [`scanner`]: Multi-sport scan and +EV play detection
//! - [`notify`]: Report formatting and webhook delivery
//! - [`metrics`]: Feed and analysis metrics

pub mod config;
pub mod error;
pub mod market;
pub mod metrics;
pub mod notify;
pub mod odds;
pub mod scanner;

pub use config::Config;
pub use error::{AppError, Result};
