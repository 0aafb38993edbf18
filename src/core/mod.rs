//! Core types: categories, dice, players, session state, commands, RNG,
//! configuration and errors.
//!
//! Everything else in the crate builds on these. The session is a plain
//! value; there is no global game instance.

pub mod category;
pub mod dice;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod command;
pub mod state;

pub use category::{Category, CategoryInfo, Section, NUM_CATEGORIES};
pub use dice::{dice_from_values, Dice, DieFace, InvalidFace, RollState, NEUTRAL_DICE};
pub use player::{default_player_name, Player, Scorecard};
pub use rng::{FixedSequence, GameRng, RandomSource};
pub use config::{rules, ConfigError, GameConfig, SnapshotFormat, StorageConfig};
pub use error::GameError;
pub use command::{Command, CommandOutcome};
pub use state::{GameSession, PendingScore, Totals, TurnPhase};
