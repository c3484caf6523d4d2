use log::debug;

use super::{Game, GameState};

impl Game {
    /// Starts a new game.
    ///
    /// With `keep_players` the roster and seating order survive but every
    /// score, round history and elimination is wiped. Without it the roster
    /// is emptied. Either way the turn, round, target and endgame state go
    /// back to their starting values.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default());
    /// game.add_player("Ann").unwrap();
    /// game.submit_score(60).unwrap();
    ///
    /// game.reset_game(true);
    /// assert_eq!(game.players()[0].total_score(), 0);
    ///
    /// game.reset_game(false);
    /// assert!(game.players().is_empty());
    /// ```
    pub fn reset_game(&mut self, keep_players: bool) {
        if keep_players {
            for player in &mut self.players {
                player.clear();
            }
        } else {
            self.players.clear();
        }

        self.current = 0;
        self.round = 1;
        self.target = self.options.target;
        self.state = GameState::Playing;
        self.redemption.clear();
        self.initial_winners.clear();
        self.winner = None;

        debug!("game reset, {} player(s) kept", self.players.len());
    }
}
