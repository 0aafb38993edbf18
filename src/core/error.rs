//! Command failures.
//!
//! Every variant is a recoverable rule violation: the command that returned
//! it left the session untouched.

use thiserror::Error;

use super::category::Category;

/// Why a command was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("players can only join before the first round completes")]
    RosterClosed,
    #[error("the roster is already full")]
    RosterFull,
    #[error("a game must have at least 2 players")]
    RosterTooSmall,
    #[error("no player at index {0}")]
    PlayerOutOfRange(usize),
    #[error("no rolls left this turn")]
    NoRollsLeft,
    #[error("a score is pending; advance to the next turn first")]
    TurnLocked,
    #[error("dice can only be held after a roll and before scoring")]
    CannotHold,
    #[error("no die at index {0}")]
    DieOutOfRange(usize),
    #[error("roll at least once before choosing a category")]
    NotRolled,
    #[error("category `{0}` is already scored")]
    CategoryFilled(Category),
    #[error("choose a category before advancing")]
    NoPendingScore,
    #[error("the game is over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::CategoryFilled(Category::FullHouse).to_string(),
            "category `full_house` is already scored"
        );
        assert_eq!(GameError::DieOutOfRange(7).to_string(), "no die at index 7");
    }
}
