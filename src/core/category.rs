//! Scoring categories: the thirteen fixed slots on every scorecard.
//!
//! ## Sections
//!
//! - **Upper**: Ones through Sixes, scored as `count(face) * face`.
//! - **Lower**: combinations (kinds, full house, straights, Yahtzee, chance).
//!
//! Category order is fixed and is the order used for scorecard storage,
//! previews and rendering.

use serde::{Deserialize, Serialize};

/// Number of scoring categories.
pub const NUM_CATEGORIES: usize = 13;

/// Scorecard section a category belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Upper,
    Lower,
}

/// A scoring category.
///
/// Serializes as its snake_case id (`"ones"`, `"full_house"`, ...), which is
/// the key used in persisted scorecards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfKind,
    FourOfKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

/// Static descriptor for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Stable key used in snapshots.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short scoring rule shown next to the name.
    pub description: &'static str,
    pub section: Section,
}

const INFOS: [CategoryInfo; NUM_CATEGORIES] = [
    CategoryInfo { id: "ones", name: "Ones", description: "Total of ones", section: Section::Upper },
    CategoryInfo { id: "twos", name: "Twos", description: "Total of twos", section: Section::Upper },
    CategoryInfo { id: "threes", name: "Threes", description: "Total of threes", section: Section::Upper },
    CategoryInfo { id: "fours", name: "Fours", description: "Total of fours", section: Section::Upper },
    CategoryInfo { id: "fives", name: "Fives", description: "Total of fives", section: Section::Upper },
    CategoryInfo { id: "sixes", name: "Sixes", description: "Total of sixes", section: Section::Upper },
    CategoryInfo { id: "three_of_kind", name: "3 of a Kind", description: "Total of all dice", section: Section::Lower },
    CategoryInfo { id: "four_of_kind", name: "4 of a Kind", description: "Total of all dice", section: Section::Lower },
    CategoryInfo { id: "full_house", name: "Full House", description: "25 points", section: Section::Lower },
    CategoryInfo { id: "small_straight", name: "Small Straight", description: "30 points", section: Section::Lower },
    CategoryInfo { id: "large_straight", name: "Large Straight", description: "40 points", section: Section::Lower },
    CategoryInfo { id: "yahtzee", name: "Yahtzee", description: "50 points", section: Section::Lower },
    CategoryInfo { id: "chance", name: "Chance", description: "Total of all dice", section: Section::Lower },
];

impl Category {
    /// All categories in scorecard order.
    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfKind,
        Category::FourOfKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// Upper-section categories (Ones..Sixes).
    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// Lower-section categories.
    pub const LOWER: [Category; 7] = [
        Category::ThreeOfKind,
        Category::FourOfKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// Position in scorecard order (0..13).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a category by scorecard position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Look up a category by its snapshot id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }

    /// Static descriptor for this category.
    #[must_use]
    pub fn info(self) -> &'static CategoryInfo {
        &INFOS[self.index()]
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        self.info().id
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    #[must_use]
    pub fn section(self) -> Section {
        self.info().section
    }

    /// Face value counted by an upper category, `None` for lower ones.
    #[must_use]
    pub fn upper_face(self) -> Option<u8> {
        match self.section() {
            Section::Upper => Some(self.index() as u8 + 1),
            Section::Lower => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_sections() {
        assert_eq!(Category::ALL.len(), NUM_CATEGORIES);
        for (i, cat) in Category::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
            assert_eq!(Category::from_index(i), Some(*cat));
        }
        assert!(Category::UPPER.iter().all(|c| c.section() == Section::Upper));
        assert!(Category::LOWER.iter().all(|c| c.section() == Section::Lower));
        assert_eq!(Category::from_index(13), None);
    }

    #[test]
    fn test_ids_match_serde() {
        for cat in Category::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.id()));
            assert_eq!(Category::from_id(cat.id()), Some(cat));
        }
        assert_eq!(Category::from_id("bonus"), None);
    }

    #[test]
    fn test_upper_face() {
        assert_eq!(Category::Ones.upper_face(), Some(1));
        assert_eq!(Category::Sixes.upper_face(), Some(6));
        assert_eq!(Category::Chance.upper_face(), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::ThreeOfKind.name(), "3 of a Kind");
        assert_eq!(Category::FullHouse.info().description, "25 points");
        assert_eq!(format!("{}", Category::SmallStraight), "small_straight");
    }
}
