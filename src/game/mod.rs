//! Game facade: session lifecycle, persistence and rendering hooks.
//!
//! ```
//! use rust_yahtzee::core::{Category, FixedSequence};
//! use rust_yahtzee::game::Game;
//! use rust_yahtzee::persist::MemoryStore;
//!
//! let mut game = Game::open(MemoryStore::new(), FixedSequence::from_values(&[5]));
//! game.roll().unwrap();
//! game.select_score(Category::Yahtzee).unwrap();
//! game.next_turn().unwrap();
//!
//! assert_eq!(game.session().players()[0].scores().get(Category::Yahtzee), Some(50));
//! assert_eq!(game.session().current_player_index(), 1);
//! ```

mod controller;

pub use controller::{Game, SessionObserver};
