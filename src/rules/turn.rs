//! Turn controller: the per-turn state machine.
//!
//! ```text
//!              roll                 roll (last)
//! ReadyToRoll ─────► ReadyToRoll ─────────────► RollExhausted
//!      │                  │                           │
//!      │ select_score     │ select_score              │ select_score
//!      ▼ (after a roll)   ▼                           ▼
//!  AwaitingNext ◄─────────┴───────────────────────────┘
//!      │ next_turn
//!      ▼
//! ReadyToRoll (next player) ── or ──► GameOver (round > 13)
//! ```
//!
//! Every operation either applies completely or returns a [`GameError`]
//! and leaves the session untouched.

use log::debug;

use crate::core::category::Category;
use crate::core::config::rules::{DICE_COUNT, ROUNDS};
use crate::core::dice::Dice;
use crate::core::error::GameError;
use crate::core::rng::RandomSource;
use crate::core::state::{GameSession, PendingScore, TurnPhase};
use crate::scoring;

/// Where `next_turn` left the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAdvance {
    /// Play continues with `player` in `round`.
    Next { player: usize, round: u32 },
    /// The last round completed; the session must be finished.
    GameOver,
}

impl GameSession {
    fn ensure_not_over(&self) -> Result<(), GameError> {
        if self.phase() == TurnPhase::GameOver {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    /// Roll every unheld die and spend one roll.
    ///
    /// Draws one face per unheld die, in index order. With every die held
    /// the roll is still spent and the dice stay as they are.
    pub fn roll(&mut self, rng: &mut impl RandomSource) -> Result<Dice, GameError> {
        self.ensure_not_over()?;
        if self.roll.rolls_left == 0 {
            return Err(GameError::NoRollsLeft);
        }
        if self.pending.is_some() {
            return Err(GameError::TurnLocked);
        }

        for i in self.roll.unheld_indices() {
            self.roll.dice[i] = rng.next_face();
        }
        self.roll.rolls_left -= 1;

        debug!(
            "{} rolled {:?} ({} left)",
            self.current_player().name(),
            self.roll.dice.map(|d| d.value()),
            self.roll.rolls_left
        );
        Ok(self.roll.dice)
    }

    /// Flip the held flag of die `index`. Returns the new flag.
    ///
    /// Only allowed after the first roll of the turn and while no score is
    /// pending.
    pub fn toggle_held(&mut self, index: usize) -> Result<bool, GameError> {
        self.ensure_not_over()?;
        if index >= DICE_COUNT {
            return Err(GameError::DieOutOfRange(index));
        }
        if !self.roll.has_rolled() || self.pending.is_some() {
            return Err(GameError::CannotHold);
        }

        let held = &mut self.roll.held[index];
        *held = !*held;
        Ok(*held)
    }

    /// Tentatively choose `category` for the current player.
    ///
    /// Replaces any earlier pending choice; nothing is committed until
    /// [`GameSession::next_turn`].
    pub fn select_score(&mut self, category: Category) -> Result<PendingScore, GameError> {
        self.ensure_not_over()?;
        if !self.roll.has_rolled() {
            return Err(GameError::NotRolled);
        }
        if self.current_player().scores().is_set(category) {
            return Err(GameError::CategoryFilled(category));
        }

        let pending = PendingScore {
            category_id: category,
            value: scoring::score_for(category, &self.roll.dice),
        };
        self.pending = Some(pending);

        debug!(
            "{} selected {} for {}",
            self.current_player().name(),
            category,
            pending.value
        );
        Ok(pending)
    }

    /// Commit the pending score and pass the turn.
    ///
    /// Wrapping back to the first player closes the roster and starts the
    /// next round. Returns [`TurnAdvance::GameOver`] once round 13 is done.
    pub fn next_turn(&mut self) -> Result<TurnAdvance, GameError> {
        self.ensure_not_over()?;
        let pending = self.pending.ok_or(GameError::NoPendingScore)?;

        let player = &mut self.players[self.current];
        player.scores.set(pending.category_id, pending.value);
        debug!("{} scored {} in {}", player.name, pending.value, pending.category_id);

        self.reset_turn();
        self.current += 1;
        if self.current >= self.players.len() {
            self.current = 0;
            self.can_add_players = false;
            self.round += 1;
        }

        if self.round > ROUNDS {
            Ok(TurnAdvance::GameOver)
        } else {
            Ok(TurnAdvance::Next {
                player: self.current,
                round: self.round,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::NEUTRAL_DICE;
    use crate::core::rng::FixedSequence;

    #[test]
    fn test_roll_spends_budget() {
        let mut session = GameSession::new();
        let mut rng = FixedSequence::from_values(&[6]);

        for left in (0..3).rev() {
            let dice = session.roll(&mut rng).unwrap();
            assert!(dice.iter().all(|d| d.value() == 6));
            assert_eq!(session.rolls_left(), left);
        }
        assert_eq!(session.phase(), TurnPhase::RollExhausted);
        assert_eq!(session.roll(&mut rng), Err(GameError::NoRollsLeft));
        assert_eq!(rng.draws(), 15);
    }

    #[test]
    fn test_roll_skips_held_dice() {
        let mut session = GameSession::new();
        let mut rng = FixedSequence::from_values(&[1, 2, 3, 4, 5, 6, 6, 6]);
        session.roll(&mut rng).unwrap();
        session.toggle_held(0).unwrap();
        session.toggle_held(4).unwrap();

        let dice = session.roll(&mut rng).unwrap();
        assert_eq!(dice.map(|d| d.value()), [1, 6, 6, 6, 5]);
        assert_eq!(rng.draws(), 8);
    }

    #[test]
    fn test_roll_with_all_held_still_spends() {
        let mut session = GameSession::new();
        let mut rng = FixedSequence::from_values(&[3]);
        session.roll(&mut rng).unwrap();
        for i in 0..5 {
            session.toggle_held(i).unwrap();
        }
        let before = *session.dice();
        session.roll(&mut rng).unwrap();
        assert_eq!(session.dice(), &before);
        assert_eq!(session.rolls_left(), 1);
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn test_hold_requires_roll() {
        let mut session = GameSession::new();
        assert_eq!(session.toggle_held(0), Err(GameError::CannotHold));
        assert_eq!(session.toggle_held(5), Err(GameError::DieOutOfRange(5)));

        session.roll(&mut FixedSequence::from_values(&[2])).unwrap();
        assert_eq!(session.toggle_held(2), Ok(true));
        assert_eq!(session.toggle_held(2), Ok(false));
    }

    #[test]
    fn test_select_requires_roll() {
        let mut session = GameSession::new();
        assert_eq!(session.select_score(Category::Chance), Err(GameError::NotRolled));
    }

    #[test]
    fn test_pending_locks_roll_and_hold() {
        let mut session = GameSession::new();
        let mut rng = FixedSequence::from_values(&[4]);
        session.roll(&mut rng).unwrap();
        session.select_score(Category::Fours).unwrap();

        assert_eq!(session.phase(), TurnPhase::AwaitingNext);
        assert_eq!(session.roll(&mut rng), Err(GameError::TurnLocked));
        assert_eq!(session.toggle_held(1), Err(GameError::CannotHold));
        assert_eq!(session.rolls_left(), 2);
    }

    #[test]
    fn test_next_turn_commits_and_resets() {
        let mut session = GameSession::new();
        session.roll(&mut FixedSequence::from_values(&[5])).unwrap();
        session.toggle_held(3).unwrap();
        session.select_score(Category::Fives).unwrap();

        let advance = session.next_turn().unwrap();
        assert_eq!(advance, TurnAdvance::Next { player: 1, round: 1 });
        assert_eq!(session.players()[0].scores().get(Category::Fives), Some(25));
        assert_eq!(session.dice(), &NEUTRAL_DICE);
        assert_eq!(session.held(), &[false; 5]);
        assert_eq!(session.rolls_left(), 3);
        assert!(session.pending_score().is_none());
        assert!(session.can_add_players());
    }

    #[test]
    fn test_next_turn_without_pending() {
        let mut session = GameSession::new();
        assert_eq!(session.next_turn(), Err(GameError::NoPendingScore));
    }

    #[test]
    fn test_wraparound_closes_roster() {
        let mut session = GameSession::new();
        let mut rng = FixedSequence::from_values(&[1]);
        for _ in 0..2 {
            session.roll(&mut rng).unwrap();
            session.select_score(Category::Ones).unwrap();
            session.next_turn().unwrap();
        }
        assert_eq!(session.current_player_index(), 0);
        assert_eq!(session.round(), 2);
        assert!(!session.can_add_players());
    }
}
