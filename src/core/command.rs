//! Commands accepted from the input-handling layer.
//!
//! Each command maps to one operation of the turn controller, the roster
//! manager or the session lifecycle. `Game::execute` dispatches them and
//! reports what happened as a [`CommandOutcome`].

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::dice::Dice;
use super::player::Player;
use super::state::PendingScore;
use crate::history::HistoryEntry;

/// A player-facing command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", content = "arg", rename_all = "snake_case")]
pub enum Command {
    Roll,
    ToggleHeld(usize),
    SelectScore(Category),
    NextTurn,
    Abandon,
    Restart,
    AddPlayer,
    RemovePlayer(usize),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Roll => write!(f, "roll"),
            Command::ToggleHeld(i) => write!(f, "toggle_held({i})"),
            Command::SelectScore(cat) => write!(f, "select_score({cat})"),
            Command::NextTurn => write!(f, "next_turn"),
            Command::Abandon => write!(f, "abandon"),
            Command::Restart => write!(f, "restart"),
            Command::AddPlayer => write!(f, "add_player"),
            Command::RemovePlayer(i) => write!(f, "remove_player({i})"),
        }
    }
}

/// Result of a successful command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// New dice after a roll.
    Rolled(Dice),
    /// A die's held flag after toggling.
    HeldToggled { index: usize, held: bool },
    /// The pending score now on offer.
    ScoreSelected(PendingScore),
    /// Turn passed; the session continues with this player.
    TurnAdvanced { player: usize, round: u32 },
    /// The game ended (last round or abandon) and was recorded.
    GameFinished(HistoryEntry),
    /// The session was discarded without recording.
    Restarted,
    /// A player joined at this roster index.
    PlayerAdded(usize),
    /// A player left the roster.
    PlayerRemoved(Player),
}
