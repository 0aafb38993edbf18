//! # rust-yahtzee
//!
//! Game state machine and scoring engine for a turn-based dice-scoring game
//! for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: the whole game is one [`GameSession`] value. There
//!    is no global game instance.
//!
//! 2. **Injected Capabilities**: randomness ([`RandomSource`]) and storage
//!    ([`SnapshotStore`]) are passed in, so every transition is synchronous
//!    and testable with scripted dice.
//!
//! 3. **Recoverable Failures**: every command returns `Result`; a rejected
//!    command leaves the session untouched.
//!
//! ## Modules
//!
//! - `core`: categories, dice, players, session state, commands, RNG, config
//! - `scoring`: category scores and scorecard totals
//! - `rules`: turn controller and roster manager
//! - `history`: ledger of finished games
//! - `persist`: snapshot schema and stores
//! - `game`: facade wiring the above to storage and renderers

pub mod core;
pub mod scoring;
pub mod rules;
pub mod history;
pub mod persist;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Category, CategoryInfo, Section,
    DieFace, Dice, RollState,
    Player, Scorecard,
    GameRng, FixedSequence, RandomSource,
    GameConfig, StorageConfig, SnapshotFormat,
    GameError,
    Command, CommandOutcome,
    GameSession, PendingScore, Totals, TurnPhase,
};

pub use crate::scoring::{grand_total, score_for, scores_for};

pub use crate::rules::TurnAdvance;

pub use crate::history::{finish_game, HistoryEntry, HistoryLedger};

pub use crate::persist::{
    FileStore, MemoryStore, SessionSnapshot, SnapshotError, SnapshotStore, StoreError,
};

pub use crate::game::{Game, SessionObserver};
