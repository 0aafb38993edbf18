//! Candidate score for any category given five dice.
//!
//! Pure and deterministic. Used both to commit a score and to preview the
//! open categories during a turn.

use crate::core::category::{Category, NUM_CATEGORIES};
use crate::core::config::rules::{
    FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE, YAHTZEE_SCORE,
};
use crate::core::dice::Dice;

/// Occurrences of each face; index 0 is unused.
#[must_use]
pub fn face_counts(dice: &Dice) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for d in dice {
        counts[d.value() as usize] += 1;
    }
    counts
}

/// Sum of all five dice.
#[must_use]
pub fn dice_sum(dice: &Dice) -> u32 {
    dice.iter().map(|d| u32::from(d.value())).sum()
}

/// True if some face appears at least `n` times.
fn has_count(counts: &[u8; 7], n: u8) -> bool {
    counts[1..].iter().any(|&c| c >= n)
}

/// Longest run of consecutive distinct face values.
#[must_use]
pub fn longest_run(dice: &Dice) -> u8 {
    let counts = face_counts(dice);
    let mut best = 0;
    let mut run = 0;
    for &c in &counts[1..] {
        if c > 0 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// Score `dice` would earn in `category`.
///
/// Full house only checks that some face appears three or more times and
/// some face two or more times, so five of a kind also scores 25.
#[must_use]
pub fn score_for(category: Category, dice: &Dice) -> u32 {
    let counts = face_counts(dice);

    if let Some(face) = category.upper_face() {
        return u32::from(counts[face as usize]) * u32::from(face);
    }

    match category {
        Category::ThreeOfKind if has_count(&counts, 3) => dice_sum(dice),
        Category::FourOfKind if has_count(&counts, 4) => dice_sum(dice),
        Category::FullHouse if has_count(&counts, 3) && has_count(&counts, 2) => FULL_HOUSE_SCORE,
        Category::SmallStraight if longest_run(dice) >= 4 => SMALL_STRAIGHT_SCORE,
        Category::LargeStraight if longest_run(dice) >= 5 => LARGE_STRAIGHT_SCORE,
        Category::Yahtzee if has_count(&counts, 5) => YAHTZEE_SCORE,
        Category::Chance => dice_sum(dice),
        _ => 0,
    }
}

/// Scores for every category, in scorecard order.
#[must_use]
pub fn scores_for(dice: &Dice) -> [u32; NUM_CATEGORIES] {
    let mut out = [0; NUM_CATEGORIES];
    for (slot, cat) in out.iter_mut().zip(Category::ALL) {
        *slot = score_for(cat, dice);
    }
    out
}

/// True if some roll scores exactly `value` in `category`.
#[must_use]
pub fn is_attainable(category: Category, value: u32) -> bool {
    const SUM_RANGE: std::ops::RangeInclusive<u32> = 5..=30;

    if let Some(face) = category.upper_face() {
        let face = u32::from(face);
        return value % face == 0 && value / face <= 5;
    }

    match category {
        Category::ThreeOfKind | Category::FourOfKind => value == 0 || SUM_RANGE.contains(&value),
        Category::Chance => SUM_RANGE.contains(&value),
        Category::FullHouse => value == 0 || value == FULL_HOUSE_SCORE,
        Category::SmallStraight => value == 0 || value == SMALL_STRAIGHT_SCORE,
        Category::LargeStraight => value == 0 || value == LARGE_STRAIGHT_SCORE,
        Category::Yahtzee => value == 0 || value == YAHTZEE_SCORE,
        _ => false,
    }
}
