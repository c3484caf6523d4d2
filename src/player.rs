//! Player representation.

use alloc::string::String;
use alloc::vec::Vec;

/// Stable identifier of a player within a game.
///
/// Ids are assigned in seating order and survive a reset that keeps the
/// roster. They are never reused within one [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u32);

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// Accumulated score. Never overwritten to fake a display value.
    total_score: u32,
    /// Score of every non-bust turn, oldest first.
    rounds: Vec<u32>,
    eliminated: bool,
}

impl Player {
    /// Creates a new player with a zero score.
    ///
    /// The name is stored as given; trimming and validation happen in
    /// [`Game::add_player`](crate::Game::add_player).
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            total_score: 0,
            rounds: Vec::new(),
            eliminated: false,
        }
    }

    pub(crate) const fn restore(
        id: PlayerId,
        name: String,
        total_score: u32,
        rounds: Vec<u32>,
        eliminated: bool,
    ) -> Self {
        Self {
            id,
            name,
            total_score,
            rounds,
            eliminated,
        }
    }

    /// Returns the player's id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accumulated score.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Returns the score of each non-bust turn.
    #[must_use]
    pub fn rounds(&self) -> &[u32] {
        &self.rounds
    }

    /// Returns whether the player was knocked out by overtime.
    #[must_use]
    pub const fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Returns whether the player is still in play.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.eliminated
    }

    /// Returns whether the player sits exactly on `target`.
    #[must_use]
    pub const fn is_at(&self, target: u32) -> bool {
        self.total_score == target
    }

    /// Applies a scored turn.
    pub(crate) fn record(&mut self, score: u32) {
        self.total_score += score;
        self.rounds.push(score);
    }

    pub(crate) const fn set_eliminated(&mut self, eliminated: bool) {
        self.eliminated = eliminated;
    }

    /// Zeroes everything except identity and name.
    pub(crate) fn clear(&mut self) {
        self.total_score = 0;
        self.rounds.clear();
        self.eliminated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates_and_appends() {
        let mut player = Player::new(PlayerId(0), "Ann");
        player.record(60);
        player.record(0);
        player.record(41);

        assert_eq!(player.total_score(), 101);
        assert_eq!(player.rounds(), &[60, 0, 41]);
        assert!(player.is_at(101));
    }

    #[test]
    fn clear_keeps_identity() {
        let mut player = Player::new(PlayerId(3), "Bo");
        player.record(100);
        player.set_eliminated(true);
        player.clear();

        assert_eq!(player.id(), PlayerId(3));
        assert_eq!(player.name(), "Bo");
        assert_eq!(player.total_score(), 0);
        assert!(player.rounds().is_empty());
        assert!(player.is_active());
    }
}
