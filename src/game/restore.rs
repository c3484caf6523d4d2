use alloc::collections::VecDeque;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::snapshot::{NO_PLAYER, PlayerRecord, SeatIndices, Snapshot, StateRecord};

use super::{Game, GameState};

fn seat_of(ids: &[PlayerId], index: i64) -> Option<PlayerId> {
    usize::try_from(index)
        .ok()
        .and_then(|index| ids.get(index))
        .copied()
}

impl Game {
    /// Captures the game for the save slot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let seat = |id: PlayerId| {
            self.index_of(id)
                .and_then(|index| i64::try_from(index).ok())
                .unwrap_or(NO_PLAYER)
        };

        let players = self
            .players
            .iter()
            .map(|player| PlayerRecord {
                name: player.name().to_string(),
                total_score: player.total_score(),
                rounds: player.rounds().to_vec(),
                is_eliminated: player.is_eliminated(),
            })
            .collect();

        Snapshot {
            players,
            current_state: StateRecord {
                current_player_index: i64::try_from(self.current).unwrap_or(0),
                current_round: self.round,
                target_score: self.target,
                redemption_mode: self.state == GameState::Redemption,
                game_over: self.state == GameState::GameOver,
                redemption_players: self.redemption.iter().map(|&id| seat(id)).collect(),
                initial_winners: SeatIndices::Many(
                    self.initial_winners.iter().map(|&id| seat(id)).collect(),
                ),
                winner: self.winner.map_or(NO_PLAYER, seat),
            },
        }
    }

    /// Rebuilds a game from a saved snapshot.
    ///
    /// Player IDs are reassigned in seating order. A turn pointer that is out
    /// of range or rests on an eliminated player moves to the next active
    /// seat. A saved redemption queue that still lists players who already
    /// threw is trimmed so it starts at the player on the clock, and loses
    /// any eliminated players. A queue left empty resumes normal play.
    #[must_use]
    pub fn from_snapshot(options: GameOptions, snapshot: Snapshot) -> Self {
        let mut game = Self::new(options);
        let state = snapshot.current_state;

        for (seat, record) in snapshot.players.into_iter().enumerate() {
            let id = PlayerId(seat as u32);
            game.players.push(Player::restore(
                id,
                record.name,
                record.total_score,
                record.rounds,
                record.is_eliminated,
            ));
        }
        game.next_id = game.players.len() as u32;
        let ids: Vec<PlayerId> = game.players.iter().map(Player::id).collect();

        game.current = usize::try_from(state.current_player_index)
            .ok()
            .filter(|&index| index < ids.len())
            .unwrap_or(0);
        game.round = state.current_round.max(1);
        if state.target_score > 0 {
            game.target = state.target_score;
        }

        game.winner = seat_of(&ids, state.winner);
        game.initial_winners = state
            .initial_winners
            .to_vec()
            .into_iter()
            .filter_map(|index| seat_of(&ids, index))
            .collect();
        let mut queue: VecDeque<PlayerId> = state
            .redemption_players
            .into_iter()
            .filter_map(|index| seat_of(&ids, index))
            .filter(|&id| game.player(id).is_some_and(Player::is_active))
            .collect();

        if state.game_over || game.winner.is_some() {
            game.state = GameState::GameOver;
        } else if state.redemption_mode && !queue.is_empty() {
            if let Some(pos) = ids
                .get(game.current)
                .and_then(|current| queue.iter().position(|id| id == current))
            {
                queue.drain(..pos);
            }
            game.current = queue
                .front()
                .and_then(|&id| game.index_of(id))
                .unwrap_or(game.current);
            game.redemption = queue;
            game.state = GameState::Redemption;
        } else {
            game.initial_winners.clear();
            game.normalize_turn();
        }

        game
    }

    /// Moves the turn pointer off an eliminated seat without counting a round.
    fn normalize_turn(&mut self) {
        let len = self.players.len();
        let next = (0..len)
            .map(|step| (self.current + step) % len)
            .find(|&index| self.players[index].is_active());
        if let Some(index) = next {
            self.current = index;
        }
    }
}

