//! Roster manager: players joining and leaving.
//!
//! Players may join only until the first round completes and only up to
//! four seats. Leaving is allowed at any time while at least three players
//! remain.

use log::debug;
use rustc_hash::FxHashSet;

use crate::core::config::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::error::GameError;
use crate::core::player::{default_player_name, Player};
use crate::core::state::{GameSession, TurnPhase};

impl GameSession {
    /// Append a new player with an empty scorecard. Returns its index.
    ///
    /// The player is named `P<n+1>`; if a removal left that name in use,
    /// the next free `P<k>` is taken instead.
    pub fn add_player(&mut self) -> Result<usize, GameError> {
        if self.phase() == TurnPhase::GameOver {
            return Err(GameError::GameOver);
        }
        if !self.can_add_players {
            return Err(GameError::RosterClosed);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::RosterFull);
        }

        let name = {
            let taken: FxHashSet<&str> = self.players.iter().map(Player::name).collect();
            (self.players.len()..)
                .map(default_player_name)
                .find(|n| !taken.contains(n.as_str()))
                .unwrap_or_else(|| default_player_name(self.players.len()))
        };

        debug!("{name} joined");
        self.players.push(Player::new(name));
        Ok(self.players.len() - 1)
    }

    /// Remove the player at `index`. Returns the removed player.
    ///
    /// Removing someone seated before the current player keeps the turn
    /// (and its roll) with the current player. Removing the current player
    /// hands a fresh turn to whoever now sits at that index, wrapping to
    /// the first seat.
    pub fn remove_player(&mut self, index: usize) -> Result<Player, GameError> {
        if self.phase() == TurnPhase::GameOver {
            return Err(GameError::GameOver);
        }
        if self.players.len() <= MIN_PLAYERS {
            return Err(GameError::RosterTooSmall);
        }
        if index >= self.players.len() {
            return Err(GameError::PlayerOutOfRange(index));
        }

        let removed = self.players.remove(index);
        if index < self.current {
            self.current -= 1;
        } else if index == self.current {
            if self.current >= self.players.len() {
                self.current = 0;
            }
            self.reset_turn();
        }

        debug!("{} resigned", removed.name());
        Ok(removed)
    }
}
