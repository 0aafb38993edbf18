//! Scoring engine: category scores for a roll and scorecard totals.
//!
//! Stateless. Nothing here touches the session or randomness.

pub mod engine;
pub mod totals;

pub use engine::{dice_sum, face_counts, is_attainable, longest_run, score_for, scores_for};
pub use totals::{grand_total, lower_total, upper_bonus, upper_total};
