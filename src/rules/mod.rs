//! Game rules: the turn controller and the roster manager.
//!
//! Both are implemented as methods on [`GameSession`](crate::core::GameSession)
//! so the session stays the single aggregate that the rules mutate.
//! Randomness is passed in explicitly to [`GameSession::roll`](crate::core::GameSession::roll).

pub mod turn;
pub mod roster;

pub use turn::TurnAdvance;
