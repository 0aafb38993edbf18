//! Session snapshot: the persisted form of a [`GameSession`].
//!
//! JSON shape (camelCase keys):
//!
//! ```json
//! {
//!   "players": [{"name": "P1", "scores": {"ones": 3, "twos": null, ...}}],
//!   "currentPlayerIndex": 0,
//!   "dice": [1, 1, 1, 1, 1],
//!   "held": [false, false, false, false, false],
//!   "rollsLeft": 3,
//!   "round": 1,
//!   "canAddPlayers": true,
//!   "isWaitingForNext": false,
//!   "pendingScore": null
//! }
//! ```
//!
//! Decoding only checks the shape. Converting into a `GameSession` checks
//! the game invariants and rejects anything a live session could never be.
//!
//! A finished session (round 14) is never saved: the game is recorded and
//! replaced by a fresh one first. Its snapshot is for rendering only and is
//! rejected on restore.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::category::Category;
use crate::core::config::rules::{DICE_COUNT, MAX_PLAYERS, MIN_PLAYERS, ROLLS_PER_TURN, ROUNDS};
use crate::core::dice::{Dice, RollState};
use crate::core::player::Player;
use crate::core::state::{GameSession, PendingScore};
use crate::scoring;

/// Persisted session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub players: Vec<Player>,
    #[serde(alias = "currentPlayerIdx")]
    pub current_player_index: usize,
    pub dice: Dice,
    pub held: [bool; DICE_COUNT],
    pub rolls_left: u8,
    pub round: u32,
    pub can_add_players: bool,
    pub is_waiting_for_next: bool,
    pub pending_score: Option<PendingScore>,
}

/// Why a snapshot cannot become a live session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("player count {0} is outside 2..=4")]
    PlayerCount(usize),
    #[error("player name `{0}` appears twice")]
    DuplicateName(String),
    #[error("current player index {index} out of range for {count} players")]
    CurrentPlayerOutOfRange { index: usize, count: usize },
    #[error("rolls left {0} exceeds 3")]
    RollsLeftOutOfRange(u8),
    #[error("round {0} is outside 1..=13")]
    RoundOutOfRange(u32),
    #[error("{player} has impossible score {value} in `{category}`")]
    ImpossibleScore {
        player: String,
        category: Category,
        value: u32,
    },
    #[error("add-player window is {open} in round {round}")]
    RosterWindowMismatch { round: u32, open: bool },
    #[error("dice held before the first roll")]
    HeldBeforeRoll,
    #[error("waiting flag disagrees with the pending score")]
    WaitingFlagMismatch,
    #[error("pending score before the first roll")]
    PendingBeforeRoll,
    #[error("pending score targets already scored category `{0}`")]
    PendingOnFilledCategory(Category),
    #[error("pending score {stored} for `{category}` does not match the dice ({expected})")]
    PendingValueMismatch {
        category: Category,
        stored: u32,
        expected: u32,
    },
}

impl GameSession {
    /// Capture the session for persistence or rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            players: self.players.clone(),
            current_player_index: self.current,
            dice: *self.roll.dice(),
            held: *self.roll.held(),
            rolls_left: self.roll.rolls_left(),
            round: self.round,
            can_add_players: self.can_add_players,
            is_waiting_for_next: self.is_waiting_for_next(),
            pending_score: self.pending,
        }
    }
}

impl SessionSnapshot {
    /// Check every session invariant.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let count = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SnapshotError::PlayerCount(count));
        }

        let mut names = FxHashSet::default();
        for p in &self.players {
            if !names.insert(p.name()) {
                return Err(SnapshotError::DuplicateName(p.name().to_string()));
            }
        }

        if self.current_player_index >= count {
            return Err(SnapshotError::CurrentPlayerOutOfRange {
                index: self.current_player_index,
                count,
            });
        }
        if self.rolls_left > ROLLS_PER_TURN {
            return Err(SnapshotError::RollsLeftOutOfRange(self.rolls_left));
        }
        if !(1..=ROUNDS).contains(&self.round) {
            return Err(SnapshotError::RoundOutOfRange(self.round));
        }

        if self.can_add_players != (self.round == 1) {
            return Err(SnapshotError::RosterWindowMismatch {
                round: self.round,
                open: self.can_add_players,
            });
        }

        for p in &self.players {
            for (category, value) in p.scores().iter() {
                match value {
                    Some(value) if !scoring::is_attainable(category, value) => {
                        return Err(SnapshotError::ImpossibleScore {
                            player: p.name().to_string(),
                            category,
                            value,
                        });
                    }
                    _ => {}
                }
            }
        }

        let rolled = self.rolls_left < ROLLS_PER_TURN;
        if !rolled && self.held.iter().any(|&h| h) {
            return Err(SnapshotError::HeldBeforeRoll);
        }
        if self.is_waiting_for_next != self.pending_score.is_some() {
            return Err(SnapshotError::WaitingFlagMismatch);
        }

        if let Some(pending) = self.pending_score {
            if !rolled {
                return Err(SnapshotError::PendingBeforeRoll);
            }
            let category = pending.category_id;
            if self.players[self.current_player_index].scores().is_set(category) {
                return Err(SnapshotError::PendingOnFilledCategory(category));
            }
            let expected = scoring::score_for(category, &self.dice);
            if pending.value != expected {
                return Err(SnapshotError::PendingValueMismatch {
                    category,
                    stored: pending.value,
                    expected,
                });
            }
        }

        Ok(())
    }
}

impl TryFrom<SessionSnapshot> for GameSession {
    type Error = SnapshotError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        snapshot.validate()?;
        Ok(GameSession {
            players: snapshot.players,
            current: snapshot.current_player_index,
            roll: RollState {
                dice: snapshot.dice,
                held: snapshot.held,
                rolls_left: snapshot.rolls_left,
            },
            round: snapshot.round,
            can_add_players: snapshot.can_add_players,
            pending: snapshot.pending_score,
        })
    }
}
