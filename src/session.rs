//! A game bound to a save slot.

use alloc::string::{String, ToString};

use log::{debug, warn};

use crate::error::{SessionError, StorageError};
use crate::game::Game;
use crate::options::GameOptions;
use crate::player::PlayerId;
use crate::result::TurnResult;
use crate::snapshot::Snapshot;
use crate::storage::{DEFAULT_SLOT, Storage};

/// A [`Game`] that writes itself to a [`Storage`] slot after every change.
///
/// Opening a session resumes whatever the slot holds, so a restarted front
/// end picks up an in-progress game.
///
/// # Example
///
/// ```
/// use dartrs::{GameOptions, MemoryStorage, Session};
///
/// let mut session = Session::open(GameOptions::default(), MemoryStorage::new());
/// session.add_player("Ann").unwrap();
/// session.add_player("Bo").unwrap();
/// session.submit_score(60).unwrap();
///
/// let (_, storage) = session.into_parts();
/// let resumed = Session::open(GameOptions::default(), storage);
/// assert_eq!(resumed.game().players()[0].total_score(), 60);
/// ```
#[derive(Debug)]
pub struct Session<S> {
    game: Game,
    storage: S,
    key: String,
}

impl<S: Storage> Session<S> {
    /// Opens the default slot, resuming the saved game if there is one.
    ///
    /// A slot that cannot be read or decoded is logged and replaced by a
    /// fresh game on the next save.
    pub fn open(options: GameOptions, storage: S) -> Self {
        Self::with_key(options, storage, DEFAULT_SLOT)
    }

    /// Opens the named slot, resuming the saved game if there is one.
    pub fn with_key(options: GameOptions, storage: S, key: &str) -> Self {
        let mut session = Self {
            game: Game::new(options),
            storage,
            key: key.to_string(),
        };

        if let Err(err) = session.load() {
            warn!("discarding save slot {key}: {err}");
        }

        session
    }

    /// Returns the game.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the slot name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Splits the session into its game and storage.
    pub fn into_parts(self) -> (Game, S) {
        (self.game, self.storage)
    }

    /// Adds a player and saves.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the slot cannot be written.
    /// On a failed write the player is not added.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, SessionError> {
        self.commit(|game| game.add_player(name).map_err(SessionError::from))
    }

    /// Submits a score for the player on the clock and saves.
    ///
    /// # Errors
    ///
    /// Returns an error if the game rejects the turn (nothing is saved) or
    /// the slot cannot be written. On a failed write the turn is undone, so
    /// the same score can be submitted again.
    pub fn submit_score(&mut self, score: u32) -> Result<TurnResult, SessionError> {
        self.commit(|game| game.submit_score(score).map_err(SessionError::from))
    }

    /// Resets the game and saves.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written. The game is then
    /// left as it was before the reset.
    pub fn reset_game(&mut self, keep_players: bool) -> Result<(), SessionError> {
        self.commit(|game| {
            game.reset_game(keep_players);
            Ok(())
        })
    }

    /// Applies `change` and saves, restoring the previous game if the save
    /// fails.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut Game) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let previous = self.game.clone();
        let value = change(&mut self.game)?;

        if let Err(err) = self.save() {
            warn!("save to slot {} failed, change rolled back: {err}", self.key);
            self.game = previous;
            return Err(err.into());
        }

        Ok(value)
    }

    /// Writes the game to the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the backend write fails.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let json = self.game.snapshot().to_json()?;
        self.storage.write(&self.key, &json)?;
        debug!("saved {} bytes to slot {}", json.len(), self.key);
        Ok(())
    }

    /// Replaces the game with the one saved in the slot.
    ///
    /// Returns `false`, leaving the game untouched, if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails or the slot does not hold
    /// a valid snapshot. The game is left untouched.
    pub fn load(&mut self) -> Result<bool, StorageError> {
        let Some(json) = self.storage.read(&self.key)? else {
            return Ok(false);
        };

        let snapshot = Snapshot::from_json(&json)?;
        self.game = Game::from_snapshot(*self.game.options(), snapshot);
        debug!(
            "loaded slot {} with {} player(s)",
            self.key,
            self.game.player_count()
        );
        Ok(true)
    }
}
