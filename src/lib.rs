//! A darts scoring engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that tracks players racing to hit a
//! target score exactly, including busts, the redemption round that lets
//! trailing players force a tie, and overtime when they do. [`Session`] binds
//! a game to a save slot so an interrupted game can be resumed.
//!
//! # Example
//!
//! ```
//! use dartrs::{Game, GameOptions, TurnOutcome};
//!
//! let mut game = Game::new(GameOptions::default());
//! game.add_player("Ann").unwrap();
//! game.add_player("Bo").unwrap();
//!
//! let result = game.submit_score(301).unwrap();
//! assert_eq!(result.outcome, TurnOutcome::RedemptionStarted);
//!
//! let result = game.submit_score(301).unwrap();
//! assert!(result.is_overtime());
//! assert_eq!(game.target_score(), 401);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod session;
pub mod snapshot;
pub mod storage;

// Re-export main types
pub use error::{PlayerError, SessionError, StorageError, TurnError};
pub use game::{Game, GameState};
pub use options::{DEFAULT_OVERTIME_INCREMENT, DEFAULT_TARGET, GameOptions};
pub use player::{Player, PlayerId};
pub use result::{BUST_MESSAGE, TurnOutcome, TurnResult};
pub use session::Session;
pub use snapshot::{PlayerRecord, SeatIndices, Snapshot, StateRecord};
#[cfg(feature = "std")]
pub use storage::FileStorage;
pub use storage::{DEFAULT_SLOT, MemoryStorage, Storage};
