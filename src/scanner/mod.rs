//! Scanner module for finding +EV plays.
//!
//! This module handles:
//! - Prop sources (live feed or demo data)
//! - Per-prop evaluation, filtering and ranking

pub mod analyzer;
pub mod source;

pub use analyzer::{EvAnalyzer, EvPlay};
pub use source::{scan_sports, PropSource};
