//! History ledger: finished games folded into a long-lived record.
//!
//! The ledger is owned by whoever outlives individual sessions (the
//! [`Game`](crate::game::Game) facade); sessions only reach it through
//! [`finish_game`].

pub mod ledger;

pub use ledger::{finish_game, HistoryEntry, HistoryLedger};
