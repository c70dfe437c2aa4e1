//! Fair-odds engine.
//!
//! This module handles:
//! - American odds validation and implied probability
//! - Vig removal by proportional normalization
//! - Even-money expected value
//! - Slip break-even classification of the favored side

pub mod american;
pub mod calculator;
pub mod evaluator;
pub mod thresholds;

pub use american::{american_to_implied_probability, implied_probability_to_american, AmericanOdds};
pub use calculator::{expected_value, remove_vig, FairProbabilities};
pub use evaluator::{
    classify_fair, evaluate_proposition, manual_check, Direction, EvClassification,
    PropositionReport,
};
pub use thresholds::{classify_slips, SlipThresholdTable, SlipType, BREAK_EVEN_TABLE};
