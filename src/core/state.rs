//! The game session aggregate.
//!
//! `GameSession` owns the roster, the roll state and the pending score. Its
//! fields are private: renderers read through accessors, and only the turn
//! controller and roster manager (in `rules`) mutate it.
//!
//! ## Phases
//!
//! The phase is derived from the fields, never stored:
//!
//! | Phase           | Condition                                 |
//! |-----------------|-------------------------------------------|
//! | `GameOver`      | `round > 13`                              |
//! | `AwaitingNext`  | a pending score exists                    |
//! | `RollExhausted` | `rolls_left == 0`, nothing pending        |
//! | `ReadyToRoll`   | `rolls_left > 0`, nothing pending         |

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::config::rules::{DICE_COUNT, MIN_PLAYERS, ROUNDS};
use super::dice::{Dice, RollState};
use super::player::{default_player_name, Player};
use crate::scoring;

/// A tentatively chosen, uncommitted score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingScore {
    #[serde(alias = "catId")]
    pub category_id: Category,
    #[serde(alias = "score")]
    pub value: u32,
}

/// Turn state derived from the session fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    ReadyToRoll,
    RollExhausted,
    AwaitingNext,
    GameOver,
}

/// Per-player totals for the scoreboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub upper: u32,
    pub bonus: u32,
    pub lower: u32,
    pub grand: u32,
}

/// The live game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
    pub(crate) roll: RollState,
    pub(crate) round: u32,
    pub(crate) can_add_players: bool,
    pub(crate) pending: Option<PendingScore>,
}

impl GameSession {
    /// Fresh session with the standard two-player roster (`P1`, `P2`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_players(MIN_PLAYERS)
    }

    /// Fresh session with `count` default-named players.
    ///
    /// # Panics
    ///
    /// Panics if `count` is outside 2..=4.
    #[must_use]
    pub fn with_players(count: usize) -> Self {
        use super::config::rules::MAX_PLAYERS;
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&count),
            "Player count must be 2-4"
        );
        Self {
            players: (0..count).map(|i| Player::new(default_player_name(i))).collect(),
            current: 0,
            roll: RollState::new(),
            round: 1,
            can_add_players: true,
            pending: None,
        }
    }

    // === Read-only accessors ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn roll_state(&self) -> &RollState {
        &self.roll
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        self.roll.dice()
    }

    #[must_use]
    pub fn held(&self) -> &[bool; DICE_COUNT] {
        self.roll.held()
    }

    #[must_use]
    pub fn rolls_left(&self) -> u8 {
        self.roll.rolls_left()
    }

    /// Current round, 1..=13 during play; 14 once the last round completed.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn can_add_players(&self) -> bool {
        self.can_add_players
    }

    /// True iff a pending score exists.
    #[must_use]
    pub fn is_waiting_for_next(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_score(&self) -> Option<PendingScore> {
        self.pending
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.round > ROUNDS {
            TurnPhase::GameOver
        } else if self.pending.is_some() {
            TurnPhase::AwaitingNext
        } else if self.roll.rolls_left() == 0 {
            TurnPhase::RollExhausted
        } else {
            TurnPhase::ReadyToRoll
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase() == TurnPhase::GameOver
    }

    /// Non-binding scores for the current player's open categories.
    ///
    /// Empty until the first roll of the turn.
    #[must_use]
    pub fn previews(&self) -> Vec<(Category, u32)> {
        if !self.roll.has_rolled() || self.is_over() {
            return Vec::new();
        }
        let dice = self.roll.dice();
        self.current_player()
            .scores()
            .unset()
            .map(|cat| (cat, scoring::score_for(cat, dice)))
            .collect()
    }

    /// Scoreboard totals for the player at `index`.
    #[must_use]
    pub fn totals(&self, index: usize) -> Option<Totals> {
        self.players.get(index).map(|p| Totals::for_scorecard(p.scores()))
    }

    /// Grand totals for every player, in roster order.
    #[must_use]
    pub fn grand_totals(&self) -> Vec<(String, u32)> {
        self.players
            .iter()
            .map(|p| (p.name().to_string(), scoring::grand_total(p.scores())))
            .collect()
    }

    /// Reset the roll state and drop any pending score.
    pub(crate) fn reset_turn(&mut self) {
        self.roll.reset();
        self.pending = None;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Totals {
    /// Totals for one scorecard.
    #[must_use]
    pub fn for_scorecard(card: &super::player::Scorecard) -> Self {
        let upper = scoring::upper_total(card);
        let bonus = scoring::upper_bonus(card);
        let lower = scoring::lower_total(card);
        Self {
            upper,
            bonus,
            lower,
            grand: upper + bonus + lower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::dice_from_values;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new();
        assert_eq!(session.player_count(), 2);
        assert_eq!(session.players()[0].name(), "P1");
        assert_eq!(session.players()[1].name(), "P2");
        assert_eq!(session.current_player_index(), 0);
        assert_eq!(session.round(), 1);
        assert_eq!(session.rolls_left(), 3);
        assert!(session.can_add_players());
        assert!(!session.is_waiting_for_next());
        assert_eq!(session.phase(), TurnPhase::ReadyToRoll);
    }

    #[test]
    fn test_phase_derivation() {
        let mut session = GameSession::new();
        session.roll.rolls_left = 0;
        assert_eq!(session.phase(), TurnPhase::RollExhausted);

        session.pending = Some(PendingScore { category_id: Category::Chance, value: 5 });
        assert_eq!(session.phase(), TurnPhase::AwaitingNext);

        session.round = 14;
        assert_eq!(session.phase(), TurnPhase::GameOver);
    }

    #[test]
    fn test_previews_only_after_roll() {
        let mut session = GameSession::new();
        assert!(session.previews().is_empty());

        session.roll.dice = dice_from_values([2, 2, 3, 3, 3]).unwrap();
        session.roll.rolls_left = 2;
        session.players[0].scores.set(Category::Chance, 10);

        let previews = session.previews();
        assert_eq!(previews.len(), 12);
        assert!(previews.contains(&(Category::FullHouse, 25)));
        assert!(previews.contains(&(Category::Threes, 9)));
        assert!(!previews.iter().any(|(c, _)| *c == Category::Chance));
    }

    #[test]
    fn test_totals() {
        let mut session = GameSession::new();
        let card = &mut session.players[1].scores;
        card.set(Category::Sixes, 30);
        card.set(Category::Fives, 25);
        card.set(Category::Fours, 8);
        card.set(Category::Chance, 12);

        let totals = session.totals(1).unwrap();
        assert_eq!(totals, Totals { upper: 63, bonus: 35, lower: 12, grand: 110 });
        assert!(session.totals(2).is_none());
        assert_eq!(session.grand_totals()[1], ("P2".to_string(), 110));
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-4")]
    fn test_too_many_players() {
        let _ = GameSession::with_players(5);
    }
}
