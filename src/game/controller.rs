//! The game facade.
//!
//! `Game` owns the live session, the history ledger, a store and a random
//! source. It is what an input layer drives and what a renderer watches.
//!
//! After every successful command it saves the session and hands the new
//! snapshot to each observer exactly once. A rejected command changes
//! nothing, saves nothing and notifies nobody.

use log::{debug, info, warn};

use crate::core::category::Category;
use crate::core::command::{Command, CommandOutcome};
use crate::core::config::GameConfig;
use crate::core::dice::Dice;
use crate::core::error::GameError;
use crate::core::player::Player;
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::{GameSession, PendingScore};
use crate::history::{finish_game, HistoryEntry, HistoryLedger};
use crate::persist::{FileStore, SessionSnapshot, SnapshotStore};
use crate::rules::TurnAdvance;

/// Rendering collaborator.
pub trait SessionObserver {
    /// Called once per state change with the full current snapshot.
    fn on_state(&mut self, snapshot: &SessionSnapshot);

    /// Called when a game is recorded, before the fresh session's `on_state`.
    fn on_game_over(&mut self, _entry: &HistoryEntry) {}
}

impl<F: FnMut(&SessionSnapshot)> SessionObserver for F {
    fn on_state(&mut self, snapshot: &SessionSnapshot) {
        self(snapshot)
    }
}

/// A running game with persistence and rendering attached.
pub struct Game<S: SnapshotStore, R: RandomSource = GameRng> {
    session: GameSession,
    ledger: HistoryLedger,
    store: S,
    rng: R,
    observers: Vec<Box<dyn SessionObserver>>,
    /// Set when an unreadable ledger could not be moved aside; history is
    /// then never written so the old ledger survives.
    history_locked: bool,
}

impl Game<FileStore, GameRng> {
    /// Open a file-backed game as described by `config`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::open(FileStore::new(&config.storage), rng)
    }
}

impl<S: SnapshotStore, R: RandomSource> Game<S, R> {
    /// Restore the saved session and ledger from `store`.
    ///
    /// A missing, unreadable or invalid session falls back to a fresh
    /// two-player session. An unreadable ledger is moved aside through
    /// [`SnapshotStore::set_aside_history`] and play continues with an
    /// empty one; if it cannot be moved, history is not saved at all.
    pub fn open(mut store: S, rng: R) -> Self {
        let session = match store.load() {
            Ok(Some(snapshot)) => match GameSession::try_from(snapshot) {
                Ok(session) => {
                    info!(
                        "restored session: round {}, {} players",
                        session.round(),
                        session.player_count()
                    );
                    session
                }
                Err(e) => {
                    warn!("discarding invalid saved session: {e}");
                    GameSession::new()
                }
            },
            Ok(None) => {
                info!("no saved session, starting a new game");
                GameSession::new()
            }
            Err(e) => {
                warn!("could not read saved session: {e}");
                GameSession::new()
            }
        };

        let mut history_locked = false;
        let ledger = match store.load_history() {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!("could not read history, starting empty: {e}");
                if let Err(e) = store.set_aside_history() {
                    warn!("could not set unreadable history aside, history will not be saved: {e}");
                    history_locked = true;
                }
                HistoryLedger::new()
            }
        };

        Self {
            session,
            ledger,
            store,
            rng,
            observers: Vec::new(),
            history_locked,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLedger {
        &self.ledger
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Attach a renderer. It is not called until the next state change or
    /// [`Game::refresh`].
    pub fn add_observer(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Push the current snapshot to every observer (initial render).
    pub fn refresh(&mut self) {
        let snapshot = self.session.snapshot();
        for o in &mut self.observers {
            o.on_state(&snapshot);
        }
    }

    // === Commands ===

    /// Roll the unheld dice.
    pub fn roll(&mut self) -> Result<Dice, GameError> {
        let dice = self.session.roll(&mut self.rng)?;
        self.commit();
        Ok(dice)
    }

    /// Toggle whether die `index` is kept for the next roll.
    pub fn toggle_held(&mut self, index: usize) -> Result<bool, GameError> {
        let held = self.session.toggle_held(index)?;
        self.commit();
        Ok(held)
    }

    /// Tentatively choose a category for the current player.
    pub fn select_score(&mut self, category: Category) -> Result<PendingScore, GameError> {
        let pending = self.session.select_score(category)?;
        self.commit();
        Ok(pending)
    }

    /// Commit the pending score and pass the turn.
    ///
    /// Returns the recorded entry if this ended the game.
    pub fn next_turn(&mut self) -> Result<Option<HistoryEntry>, GameError> {
        match self.session.next_turn()? {
            TurnAdvance::Next { player, round } => {
                debug!("turn passes to player {player} in round {round}");
                self.commit();
                Ok(None)
            }
            TurnAdvance::GameOver => Ok(Some(self.finish())),
        }
    }

    /// End the game now, recording current scores.
    pub fn abandon(&mut self) -> HistoryEntry {
        info!("game abandoned in round {}", self.session.round());
        self.finish()
    }

    /// Discard the game without recording it and start over.
    pub fn restart(&mut self) {
        info!("game discarded, restarting");
        if let Err(e) = self.store.clear() {
            warn!("could not clear saved session: {e}");
        }
        self.session = GameSession::new();
        self.commit();
    }

    /// Add a player. Returns the new player's roster index.
    pub fn add_player(&mut self) -> Result<usize, GameError> {
        let index = self.session.add_player()?;
        self.commit();
        Ok(index)
    }

    /// Remove the player at `index`.
    pub fn remove_player(&mut self, index: usize) -> Result<Player, GameError> {
        let removed = self.session.remove_player(index)?;
        self.commit();
        Ok(removed)
    }

    /// Dispatch a [`Command`].
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome, GameError> {
        debug!("execute {command}");
        let outcome = match command {
            Command::Roll => CommandOutcome::Rolled(self.roll()?),
            Command::ToggleHeld(index) => CommandOutcome::HeldToggled {
                index,
                held: self.toggle_held(index)?,
            },
            Command::SelectScore(category) => {
                CommandOutcome::ScoreSelected(self.select_score(category)?)
            }
            Command::NextTurn => match self.next_turn()? {
                Some(entry) => CommandOutcome::GameFinished(entry),
                None => CommandOutcome::TurnAdvanced {
                    player: self.session.current_player_index(),
                    round: self.session.round(),
                },
            },
            Command::Abandon => CommandOutcome::GameFinished(self.abandon()),
            Command::Restart => {
                self.restart();
                CommandOutcome::Restarted
            }
            Command::AddPlayer => CommandOutcome::PlayerAdded(self.add_player()?),
            Command::RemovePlayer(index) => CommandOutcome::PlayerRemoved(self.remove_player(index)?),
        };
        Ok(outcome)
    }

    // === Internals ===

    fn finish(&mut self) -> HistoryEntry {
        let entry = finish_game(&mut self.session, &mut self.ledger);
        if self.history_locked {
            warn!("history not saved: stored ledger is unreadable");
        } else if let Err(e) = self.store.save_history(&self.ledger) {
            warn!("could not save history: {e}");
        }
        if let Err(e) = self.store.clear() {
            warn!("could not clear saved session: {e}");
        }
        for o in &mut self.observers {
            o.on_game_over(&entry);
        }
        self.commit();
        entry
    }

    fn commit(&mut self) {
        let snapshot = self.session.snapshot();
        if let Err(e) = self.store.save(&snapshot) {
            warn!("could not save session: {e}");
        }
        for o in &mut self.observers {
            o.on_state(&snapshot);
        }
    }
}
