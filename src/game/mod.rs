//! Game engine and state management.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::debug;

use crate::error::PlayerError;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};

mod redemption;
mod reset;
mod restore;
pub mod state;
mod turn;

pub use state::GameState;

/// A darts game engine that tracks scores, turn order and the endgame.
///
/// The game owns the roster and every piece of turn state. Use
/// [`GameOptions`] to configure the target score and overtime increment.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Players in seating order.
    players: Vec<Player>,
    /// Next player ID to assign.
    next_id: u32,
    /// Index into `players` of whose turn it is.
    current: usize,
    /// Round counter, starting at 1.
    round: u32,
    /// Score that must be hit exactly.
    target: u32,
    state: GameState,
    /// Players still owed a redemption turn; the front one is on the clock.
    redemption: VecDeque<PlayerId>,
    /// Players who were at the target when redemption began.
    initial_winners: Vec<PlayerId>,
    winner: Option<PlayerId>,
}

impl Game {
    /// Creates a new game with no players.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default());
    /// assert_eq!(game.target_score(), 301);
    /// assert_eq!(game.current_round(), 1);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            players: Vec::new(),
            next_id: 0,
            current: 0,
            round: 1,
            target: options.target,
            state: GameState::Playing,
            redemption: VecDeque::new(),
            initial_winners: Vec::new(),
            winner: None,
        }
    }

    /// Adds a player at the end of the seating order.
    ///
    /// Surrounding whitespace is trimmed from the name.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyName`] if the trimmed name is empty.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, PlayerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }

        let id = PlayerId(self.next_id);
        self.next_id += 1;
        self.players.push(Player::new(id, name));
        debug!("player {name} joined as {id:?}");

        Ok(id)
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns every player in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// Returns players that have not been eliminated, in seating order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| player.is_active())
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns whether enough players have joined to begin.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.players.len() >= self.options.min_players
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` if no players have joined.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Returns the seat index of the player whose turn it is.
    #[must_use]
    pub const fn current_player_index(&self) -> usize {
        self.current
    }

    /// Returns the current round, starting at 1.
    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.round
    }

    /// Returns the score that must currently be hit exactly.
    #[must_use]
    pub const fn target_score(&self) -> u32 {
        self.target
    }

    /// Returns the target restored by [`reset_game`](Self::reset_game).
    #[must_use]
    pub const fn original_target(&self) -> u32 {
        self.options.target
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether a winner has been declared.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns whether a redemption round is running.
    #[must_use]
    pub fn is_redemption(&self) -> bool {
        self.state == GameState::Redemption
    }

    /// Returns the players still owed a redemption turn, in turn order.
    ///
    /// The first one, if any, is the player on the clock.
    pub fn redemption_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.redemption.iter().copied()
    }

    /// Returns the players whose hit opened the running redemption round.
    #[must_use]
    pub fn initial_winners(&self) -> &[PlayerId] {
        &self.initial_winners
    }

    /// Returns the champion once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id() == id)
    }
}
