//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while adding a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Name is empty once surrounding whitespace is removed.
    #[error("player name is empty")]
    EmptyName,
}

/// Errors that can occur when submitting a score.
///
/// None of these change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// No players have been added.
    #[error("no players in the game")]
    NoPlayers,
    /// Every player has been eliminated.
    #[error("no active players remain")]
    NoActivePlayers,
    /// The player on the clock has been eliminated.
    #[error("current player is eliminated")]
    PlayerEliminated,
    /// A winner has already been declared.
    #[error("game is over")]
    GameOver,
}

/// Errors that can occur while reading or writing the save slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend failed to read the slot.
    #[error("failed to read save slot: {0}")]
    Read(String),
    /// The backend failed to write the slot.
    #[error("failed to write save slot: {0}")]
    Write(String),
    /// The snapshot could not be serialized.
    #[error("failed to encode snapshot: {0}")]
    Encode(String),
    /// The slot does not hold a valid snapshot.
    #[error("failed to decode snapshot: {0}")]
    Decode(String),
    /// Filesystem error.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by [`Session`](crate::Session) operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Adding a player failed.
    #[error(transparent)]
    Player(#[from] PlayerError),
    /// Submitting a score failed.
    #[error(transparent)]
    Turn(#[from] TurnError),
    /// Persisting or restoring the game failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
