//! Players and their scorecards.
//!
//! ## Scorecard
//!
//! One optional score per category. A set score is never overwritten:
//! [`Scorecard::set`] refuses to touch a filled slot.
//!
//! Serialized as a map `{category id -> int | null}`. Decoding fails on a
//! duplicate or unknown key; missing keys decode as unset.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::category::{Category, Section, NUM_CATEGORIES};

/// Per-player scores, indexed by category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scorecard {
    slots: [Option<u32>; NUM_CATEGORIES],
}

impl Scorecard {
    /// Empty scorecard: every category unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score recorded for a category, if any.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<u32> {
        self.slots[category.index()]
    }

    #[must_use]
    pub fn is_set(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Record a score. Returns `false` (and changes nothing) if already set.
    pub fn set(&mut self, category: Category, value: u32) -> bool {
        let slot = &mut self.slots[category.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    /// Categories still open, in scorecard order.
    pub fn unset(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| !self.is_set(*c))
    }

    /// True once all thirteen categories are filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Sum of set scores in a section; unset counts as 0.
    #[must_use]
    pub fn section_sum(&self, section: Section) -> u32 {
        Category::ALL
            .iter()
            .filter(|c| c.section() == section)
            .filter_map(|c| self.get(*c))
            .sum()
    }

    /// Iterate `(category, score)` in scorecard order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Option<u32>)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

impl Serialize for Scorecard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NUM_CATEGORIES))?;
        for (cat, score) in self.iter() {
            map.serialize_entry(&cat, &score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Scorecard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScorecardVisitor;

        impl<'de> Visitor<'de> for ScorecardVisitor {
            type Value = Scorecard;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category id to score or null")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Scorecard, A::Error> {
                let mut card = Scorecard::new();
                let mut seen = [false; NUM_CATEGORIES];
                while let Some(cat) = access.next_key::<Category>()? {
                    if std::mem::replace(&mut seen[cat.index()], true) {
                        return Err(de::Error::custom(format_args!(
                            "duplicate category key `{cat}`"
                        )));
                    }
                    card.slots[cat.index()] = access.next_value::<Option<u32>>()?;
                }
                Ok(card)
            }
        }

        deserializer.deserialize_map(ScorecardVisitor)
    }
}

/// A player: display name plus scorecard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) scores: Scorecard,
}

impl Player {
    /// New player with an empty scorecard.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: Scorecard::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn scores(&self) -> &Scorecard {
        &self.scores
    }
}

/// Default name for the player in 0-based roster slot `index`.
#[must_use]
pub fn default_player_name(index: usize) -> String {
    format!("P{}", index + 1)
}
