//! Scoring engine properties.
//!
//! Exhaustive checks over all 7776 ordered rolls where cheap, plus proptest
//! properties for the order-independence and category relationships.

use proptest::prelude::*;
use rust_yahtzee::core::{dice_from_values, Category, Dice, Scorecard};
use rust_yahtzee::scoring::{face_counts, grand_total, is_attainable, lower_total, score_for, scores_for, upper_bonus, upper_total};

fn dice(values: [u8; 5]) -> Dice {
    dice_from_values(values).unwrap()
}

fn all_rolls() -> impl Iterator<Item = Dice> {
    (0..7776u32).map(|mut n| {
        let mut values = [0u8; 5];
        for v in &mut values {
            *v = (n % 6) as u8 + 1;
            n /= 6;
        }
        dice(values)
    })
}

fn arb_dice() -> impl Strategy<Value = Dice> {
    prop::array::uniform5(1u8..=6).prop_map(dice)
}

// =============================================================================
// Documented examples
// =============================================================================

#[test]
fn test_documented_examples() {
    assert_eq!(score_for(Category::Yahtzee, &dice([5, 5, 5, 5, 5])), 50);
    assert_eq!(score_for(Category::Yahtzee, &dice([5, 5, 5, 5, 4])), 0);
    assert_eq!(score_for(Category::FullHouse, &dice([2, 2, 3, 3, 3])), 25);
    assert_eq!(score_for(Category::FullHouse, &dice([2, 2, 2, 2, 2])), 25);
    assert_eq!(score_for(Category::SmallStraight, &dice([1, 2, 3, 4, 6])), 30);
    assert_eq!(score_for(Category::LargeStraight, &dice([1, 2, 3, 4, 5])), 40);
    assert_eq!(score_for(Category::SmallStraight, &dice([1, 1, 2, 2, 6])), 0);
}

#[test]
fn test_grand_total_example() {
    let mut card = Scorecard::new();
    for (cat, v) in [
        (Category::Ones, 3),
        (Category::Twos, 4),
        (Category::Threes, 0),
        (Category::Fours, 0),
        (Category::Fives, 0),
        (Category::Sixes, 0),
        (Category::Yahtzee, 50),
        (Category::Chance, 20),
    ] {
        card.set(cat, v);
    }
    assert_eq!(upper_total(&card), 7);
    assert_eq!(upper_bonus(&card), 0);
    assert_eq!(lower_total(&card), 70);
    assert_eq!(grand_total(&card), 77);
}

// =============================================================================
// Exhaustive
// =============================================================================

#[test]
fn test_upper_is_count_times_face() {
    for d in all_rolls() {
        let counts = face_counts(&d);
        for (face, cat) in (1u32..=6).zip(Category::UPPER) {
            assert_eq!(score_for(cat, &d), counts[face as usize] as u32 * face);
        }
    }
}

#[test]
fn test_chance_is_sum() {
    for d in all_rolls() {
        let sum: u32 = d.iter().map(|f| u32::from(f.value())).sum();
        assert_eq!(score_for(Category::Chance, &d), sum);
    }
}

#[test]
fn test_fixed_value_categories() {
    for d in all_rolls() {
        let s = scores_for(&d);
        assert!([0, 25].contains(&s[Category::FullHouse.index()]));
        assert!([0, 30].contains(&s[Category::SmallStraight.index()]));
        assert!([0, 40].contains(&s[Category::LargeStraight.index()]));
        assert!([0, 50].contains(&s[Category::Yahtzee.index()]));
    }
}

#[test]
fn test_every_score_is_attainable() {
    for d in all_rolls() {
        for (cat, value) in Category::ALL.into_iter().zip(scores_for(&d)) {
            assert!(is_attainable(cat, value), "{cat} = {value}");
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_order_independent(d in arb_dice(), rot in 0usize..5) {
        let mut rotated = d;
        rotated.rotate_left(rot);
        let mut sorted = d;
        sorted.sort();
        prop_assert_eq!(scores_for(&d), scores_for(&rotated));
        prop_assert_eq!(scores_for(&d), scores_for(&sorted));
    }

    #[test]
    fn prop_kind_implications(d in arb_dice()) {
        let s = scores_for(&d);
        let chance = s[Category::Chance.index()];
        // Yahtzee implies four of a kind implies three of a kind
        if s[Category::Yahtzee.index()] > 0 {
            prop_assert_eq!(s[Category::FourOfKind.index()], chance);
            prop_assert_eq!(s[Category::FullHouse.index()], 25);
        }
        if s[Category::FourOfKind.index()] > 0 {
            prop_assert_eq!(s[Category::ThreeOfKind.index()], chance);
        }
        prop_assert!(s[Category::ThreeOfKind.index()] == 0 || s[Category::ThreeOfKind.index()] == chance);
    }

    #[test]
    fn prop_large_implies_small(d in arb_dice()) {
        if score_for(Category::LargeStraight, &d) > 0 {
            prop_assert_eq!(score_for(Category::SmallStraight, &d), 30);
        }
    }

    #[test]
    fn prop_upper_sections_sum_to_chance(d in arb_dice()) {
        let upper: u32 = Category::UPPER.iter().map(|c| score_for(*c, &d)).sum();
        prop_assert_eq!(upper, score_for(Category::Chance, &d));
    }
}
