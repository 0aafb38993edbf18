//! Finished games and their final totals.
//!
//! ## HistoryEntry
//!
//! One finished game: player name → grand total, in roster order.
//! Serialized as a JSON object `{"P1": 187, "P2": 203}`.
//!
//! ## HistoryLedger
//!
//! Append-only sequence of entries. Backed by `im::Vector` so handing a copy
//! to a renderer or a store is O(1).

use std::fmt;

use im::Vector;
use log::info;
use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::state::GameSession;

/// Final grand totals of one game, keyed by player name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    totals: Vec<(String, u32)>,
}

impl HistoryEntry {
    /// Build from `(name, total)` pairs. A repeated name keeps its first total.
    pub fn new(totals: impl IntoIterator<Item = (String, u32)>) -> Self {
        let mut entry = Self::default();
        for (name, total) in totals {
            if entry.total_for(&name).is_none() {
                entry.totals.push((name, total));
            }
        }
        entry
    }

    /// Entry for a session's current scorecards (unset categories count 0).
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        Self::new(session.grand_totals())
    }

    /// Total recorded for `name`, if that player took part.
    #[must_use]
    pub fn total_for(&self, name: &str) -> Option<u32> {
        self.totals.iter().find(|(n, _)| n == name).map(|(_, t)| *t)
    }

    /// Names holding the top total, when that total is positive.
    #[must_use]
    pub fn winners(&self) -> Vec<&str> {
        let best = self.totals.iter().map(|(_, t)| *t).max().unwrap_or(0);
        if best == 0 {
            return Vec::new();
        }
        self.totals
            .iter()
            .filter(|(_, t)| *t == best)
            .map(|(n, _)| n.as_str())
            .collect()
    }

    /// Iterate `(name, total)` in recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.totals.iter().map(|(n, t)| (n.as_str(), *t))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl Serialize for HistoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.totals.len()))?;
        for (name, total) in &self.totals {
            map.serialize_entry(name, total)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HistoryEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = HistoryEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of player name to total")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<HistoryEntry, A::Error> {
                let mut totals = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, total)) = access.next_entry::<String, u32>()? {
                    totals.push((name, total));
                }
                Ok(HistoryEntry::new(totals))
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}

/// Append-only record of finished games, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    entries: Vector<HistoryEntry>,
}

impl HistoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger holding previously recorded entries.
    pub fn from_entries(entries: impl IntoIterator<Item = HistoryEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Record a finished game. Entries are never modified afterwards.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at position `index` (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Most recently recorded game.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Newest first, paired with the 1-based game number.
    pub fn iter_recent_first(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        let len = self.entries.len();
        self.entries
            .iter()
            .rev()
            .enumerate()
            .map(move |(i, e)| (len - i, e))
    }

    /// Number of games `name` won outright or shared.
    #[must_use]
    pub fn wins_for(&self, name: &str) -> usize {
        self.iter().filter(|e| e.winners().contains(&name)).count()
    }

    /// Sum of every recorded total, per player name.
    #[must_use]
    pub fn lifetime_totals(&self) -> FxHashMap<String, u64> {
        let mut out = FxHashMap::default();
        for entry in self.iter() {
            for (name, total) in entry.iter() {
                *out.entry(name.to_string()).or_insert(0) += u64::from(total);
            }
        }
        out
    }
}

/// Record the session's final totals and replace it with a fresh
/// two-player session.
///
/// Used both when round 13 completes and when a game is abandoned. A
/// pending score that was never committed does not count.
pub fn finish_game(session: &mut GameSession, ledger: &mut HistoryLedger) -> HistoryEntry {
    let entry = HistoryEntry::from_session(session);
    info!(
        "game {} finished in round {}: {:?}",
        ledger.len() + 1,
        session.round().min(crate::core::rules::ROUNDS),
        entry.totals
    );
    ledger.append(entry.clone());
    *session = GameSession::new();
    entry
}
