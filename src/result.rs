//! Turn result types returned to the view layer.

use alloc::string::String;
use alloc::vec::Vec;

use crate::player::PlayerId;

/// Message reported for every bust.
pub const BUST_MESSAGE: &str = "BUST! Score reset";

/// What a submitted score led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play continues; nothing beyond the score itself happened.
    Continue,
    /// The player hit the target and trailing players get one more turn.
    RedemptionStarted,
    /// Several players tied on the target; the target was raised.
    Overtime {
        /// The new target.
        target: u32,
        /// Players still in the game, in seating order.
        winners: Vec<PlayerId>,
    },
    /// The game is over.
    Won {
        /// The champion.
        winner: PlayerId,
    },
}

/// Result of a single [`Game::submit_score`](crate::Game::submit_score) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// The player who threw.
    pub player: PlayerId,
    /// Whether the score was discarded for overshooting the target.
    pub bust: bool,
    /// The transition taken.
    pub outcome: TurnOutcome,
    /// Announcement for the view, if any.
    pub message: Option<String>,
    /// Names of the overtime qualifiers, empty unless overtime started.
    pub winners: Vec<String>,
}

impl TurnResult {
    pub(crate) const fn new(player: PlayerId, bust: bool) -> Self {
        Self {
            player,
            bust,
            outcome: TurnOutcome::Continue,
            message: None,
            winners: Vec::new(),
        }
    }

    /// Returns whether the score was a bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.bust
    }

    /// Returns whether this turn opened a redemption round.
    #[must_use]
    pub const fn is_redemption(&self) -> bool {
        matches!(self.outcome, TurnOutcome::RedemptionStarted)
    }

    /// Returns whether this turn sent the game into overtime.
    #[must_use]
    pub const fn is_overtime(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Overtime { .. })
    }

    /// Returns whether this turn ended the game.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Won { .. })
    }

    /// Returns the champion if this turn ended the game.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            TurnOutcome::Won { winner } => Some(winner),
            _ => None,
        }
    }
}
