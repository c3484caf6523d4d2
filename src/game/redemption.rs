use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use log::info;

use crate::error::TurnError;
use crate::player::PlayerId;
use crate::result::{TurnOutcome, TurnResult};

use super::{Game, GameState};

impl Game {
    /// Starts a redemption round after the player on the clock hit the target.
    ///
    /// Every active player not already at the target is queued, in seating
    /// order, for one final turn. With nobody to queue the endgame resolves
    /// on the spot.
    pub(super) fn open_redemption(&mut self, result: &mut TurnResult) -> Result<(), TurnError> {
        let target = self.target;

        self.initial_winners = self
            .active_players()
            .filter(|player| player.is_at(target))
            .map(|player| player.id())
            .collect();
        let queue: VecDeque<PlayerId> = self
            .active_players()
            .filter(|player| !player.is_at(target))
            .map(|player| player.id())
            .collect();

        let Some(first) = queue.front().and_then(|&id| self.index_of(id)) else {
            return self.resolve_endgame(result);
        };

        let name = self.name_of(result.player);
        info!(
            "{name} hit {target}, redemption for {} player(s)",
            queue.len()
        );

        self.state = GameState::Redemption;
        self.redemption = queue;
        self.current = first;
        result.outcome = TurnOutcome::RedemptionStarted;
        result.message = Some(format!("{name} hit {target}! Redemption round starts"));

        Ok(())
    }

    /// Retires the redemption turn just taken and puts the next queued
    /// player on the clock, or resolves the endgame when the queue is empty.
    pub(super) fn advance_redemption(&mut self, result: &mut TurnResult) -> Result<(), TurnError> {
        self.redemption.pop_front();

        while let Some(&next) = self.redemption.front() {
            if let Some(index) = self.index_of(next) {
                self.current = index;
                return Ok(());
            }
            self.redemption.pop_front();
        }

        self.resolve_endgame(result)
    }

    /// Decides between a champion, overtime and resumed play once every
    /// redemption turn has been taken.
    fn resolve_endgame(&mut self, result: &mut TurnResult) -> Result<(), TurnError> {
        let target = self.target;

        let mut pool: HashSet<PlayerId> = self.initial_winners.iter().copied().collect();
        pool.extend(
            self.active_players()
                .filter(|player| player.is_at(target))
                .map(|player| player.id()),
        );
        let winners: Vec<PlayerId> = self
            .active_players()
            .filter(|player| pool.contains(&player.id()))
            .map(|player| player.id())
            .collect();

        match winners.len() {
            0 => self.resume_play(),
            1 => {
                self.declare_winner(winners[0], result);
                Ok(())
            }
            _ => self.start_overtime(winners, result),
        }
    }

    /// Drops back to normal rotation when an overtime lap produced no hit.
    fn resume_play(&mut self) -> Result<(), TurnError> {
        info!("nobody reached {}, play continues", self.target);

        self.state = GameState::Playing;
        self.redemption.clear();
        self.initial_winners.clear();
        self.advance_to_next_active()
    }

    fn declare_winner(&mut self, winner: PlayerId, result: &mut TurnResult) {
        let name = self.name_of(winner);
        info!("{name} wins at {}", self.target);

        self.state = GameState::GameOver;
        self.winner = Some(winner);
        self.redemption.clear();
        result.outcome = TurnOutcome::Won { winner };
        result.message = Some(format!("🏆 {name} wins! 🏆"));
    }

    /// Raises the target and restarts the endgame among the tied players.
    ///
    /// Everyone else is eliminated. The tied players keep their real totals
    /// and each gets one turn at the new target, starting with the first in
    /// seating order.
    fn start_overtime(
        &mut self,
        winners: Vec<PlayerId>,
        result: &mut TurnResult,
    ) -> Result<(), TurnError> {
        for player in &mut self.players {
            player.set_eliminated(!winners.contains(&player.id()));
        }

        self.target = self.target.saturating_add(self.options.overtime_increment);
        self.round = 1;
        self.initial_winners.clear();

        let first = winners
            .first()
            .and_then(|&id| self.index_of(id))
            .ok_or(TurnError::NoActivePlayers)?;
        let names: Vec<String> = winners.iter().map(|&id| self.name_of(id)).collect();
        info!(
            "overtime between {}, new target {}",
            names.join(", "),
            self.target
        );

        self.state = GameState::Redemption;
        self.redemption = winners.iter().copied().collect();
        self.current = first;
        result.outcome = TurnOutcome::Overtime {
            target: self.target,
            winners,
        };
        result.message = Some(format!("OVERTIME! New target: {}", self.target));
        result.winners = names;

        Ok(())
    }

    fn name_of(&self, id: PlayerId) -> String {
        self.player(id)
            .map(|player| player.name().to_string())
            .unwrap_or_default()
    }
}
