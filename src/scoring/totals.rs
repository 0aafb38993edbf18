//! Scorecard totals.
//!
//! Unset categories contribute 0, so totals are meaningful for partial
//! scorecards (an abandoned game is recorded with whatever was scored).

use crate::core::category::Section;
use crate::core::config::rules::{UPPER_BONUS, UPPER_BONUS_THRESHOLD};
use crate::core::player::Scorecard;

/// Sum of set upper-section scores.
#[must_use]
pub fn upper_total(card: &Scorecard) -> u32 {
    card.section_sum(Section::Upper)
}

/// 35 if the upper total reaches 63, else 0.
#[must_use]
pub fn upper_bonus(card: &Scorecard) -> u32 {
    if upper_total(card) >= UPPER_BONUS_THRESHOLD {
        UPPER_BONUS
    } else {
        0
    }
}

/// Sum of set lower-section scores.
#[must_use]
pub fn lower_total(card: &Scorecard) -> u32 {
    card.section_sum(Section::Lower)
}

/// Upper total + bonus + lower total.
#[must_use]
pub fn grand_total(card: &Scorecard) -> u32 {
    upper_total(card) + upper_bonus(card) + lower_total(card)
}
