use alloc::format;
use alloc::string::ToString;

use log::debug;

use crate::error::TurnError;
use crate::result::{BUST_MESSAGE, TurnResult};

use super::{Game, GameState};

impl Game {
    /// Checks that the player on the clock may throw and returns their seat.
    fn ensure_can_throw(&self) -> Result<usize, TurnError> {
        if self.players.is_empty() {
            return Err(TurnError::NoPlayers);
        }

        if self.state == GameState::GameOver {
            return Err(TurnError::GameOver);
        }

        if self.active_players().next().is_none() {
            return Err(TurnError::NoActivePlayers);
        }

        let player = self
            .players
            .get(self.current)
            .ok_or(TurnError::NoPlayers)?;
        if player.is_eliminated() {
            return Err(TurnError::PlayerEliminated);
        }

        Ok(self.current)
    }

    /// Submits the score thrown by the player on the clock.
    ///
    /// A score that would carry the player past the target is a bust: it is
    /// discarded and the turn passes. Hitting the target exactly opens a
    /// redemption round for everyone still trailing; see
    /// [`TurnOutcome`](crate::TurnOutcome) for the possible transitions.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players, no active players, the
    /// player on the clock is eliminated, or the game is already over. The
    /// game is left untouched in every error case.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default());
    /// game.add_player("Ann").unwrap();
    /// game.add_player("Bo").unwrap();
    ///
    /// let result = game.submit_score(180).unwrap();
    /// assert!(!result.is_bust());
    /// assert_eq!(game.players()[0].total_score(), 180);
    /// assert_eq!(game.current_player_index(), 1);
    /// ```
    pub fn submit_score(&mut self, score: u32) -> Result<TurnResult, TurnError> {
        let index = self.ensure_can_throw()?;
        let target = self.target;

        let player = &mut self.players[index];
        let id = player.id();
        let new_total = player.total_score().saturating_add(score);

        if new_total > target {
            debug!(
                "{} busts with {score} ({} + {score} > {target})",
                player.name(),
                player.total_score()
            );
            let mut result = TurnResult::new(id, true);
            result.message = Some(BUST_MESSAGE.to_string());
            self.end_turn(&mut result)?;
            return Ok(result);
        }

        player.record(score);
        debug!("{} scores {score}, total {new_total}", player.name());

        let mut result = TurnResult::new(id, false);
        if new_total == target {
            result.message = Some(format!("{} hit {target}!", player.name()));
            if self.state == GameState::Playing {
                self.open_redemption(&mut result)?;
                return Ok(result);
            }
        }

        self.end_turn(&mut result)?;
        Ok(result)
    }

    /// Passes the turn on according to the current state.
    fn end_turn(&mut self, result: &mut TurnResult) -> Result<(), TurnError> {
        if self.state == GameState::Redemption {
            self.advance_redemption(result)
        } else {
            self.advance_to_next_active()
        }
    }

    /// Moves the turn to the next active player in seating order.
    ///
    /// Wrapping past the last seat completes a round. The scan covers at most
    /// one lap.
    pub(super) fn advance_to_next_active(&mut self) -> Result<(), TurnError> {
        let len = self.players.len();
        if len == 0 {
            return Err(TurnError::NoPlayers);
        }

        let start = self.current;
        for step in 1..=len {
            let index = (start + step) % len;
            if self.players[index].is_active() {
                if index <= start {
                    self.round += 1;
                }
                self.current = index;
                return Ok(());
            }
        }

        Err(TurnError::NoActivePlayers)
    }
}
