//! Serialized form of a game for the save slot.
//!
//! Player references inside the turn state are stored as indices into
//! `players`. Indices that are negative or out of range load as "nobody",
//! so a damaged slot degrades instead of failing.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Index written for "no player".
pub(crate) const NO_PLAYER: i64 = -1;

/// A saved game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Players in seating order.
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    /// Turn and endgame state.
    #[serde(default)]
    pub current_state: StateRecord,
}

/// A saved player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Display name.
    pub name: String,
    /// Accumulated score.
    #[serde(default)]
    pub total_score: u32,
    /// Score of each non-bust turn.
    #[serde(default)]
    pub rounds: Vec<u32>,
    /// Whether overtime knocked the player out.
    #[serde(default)]
    pub is_eliminated: bool,
}

/// Saved turn and endgame state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    /// Seat index of the player on the clock.
    #[serde(default)]
    pub current_player_index: i64,
    /// Round counter; 0 loads as 1.
    #[serde(default)]
    pub current_round: u32,
    /// Active target; 0 loads as the configured target.
    #[serde(default)]
    pub target_score: u32,
    /// Whether a redemption round was running.
    #[serde(default)]
    pub redemption_mode: bool,
    /// Whether a winner was declared.
    #[serde(default)]
    pub game_over: bool,
    /// Seat indices still owed a redemption turn.
    #[serde(default)]
    pub redemption_players: Vec<i64>,
    /// Seat indices of the players whose hit opened redemption.
    #[serde(default, alias = "initialWinner")]
    pub initial_winners: SeatIndices,
    /// Seat index of the champion, or -1.
    #[serde(default = "no_player")]
    pub winner: i64,
}

impl Default for StateRecord {
    fn default() -> Self {
        Self {
            current_player_index: 0,
            current_round: 1,
            target_score: 0,
            redemption_mode: false,
            game_over: false,
            redemption_players: Vec::new(),
            initial_winners: SeatIndices::default(),
            winner: NO_PLAYER,
        }
    }
}

const fn no_player() -> i64 {
    NO_PLAYER
}

/// One seat index or a list of them.
///
/// Older saves hold a single `initialWinner` index; newer ones a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeatIndices {
    /// A list of indices.
    Many(Vec<i64>),
    /// A single index; -1 means nobody.
    One(i64),
    /// `null`.
    Missing,
}

impl Default for SeatIndices {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl SeatIndices {
    pub(crate) fn to_vec(&self) -> Vec<i64> {
        match self {
            Self::Many(indices) => indices.clone(),
            Self::One(index) => alloc::vec![*index],
            Self::Missing => Vec::new(),
        }
    }
}

impl Snapshot {
    /// Encodes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|err| StorageError::Encode(err.to_string()))
    }

    /// Decodes a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Decode`] if the text is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        serde_json::from_str(json).map_err(|err| StorageError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameState};
    use crate::options::GameOptions;
    use crate::player::{Player, PlayerId};

    fn two_player_game() -> Game {
        let mut game = Game::new(GameOptions::default());
        game.add_player("Ann").unwrap();
        game.add_player("Bo").unwrap();
        game
    }

    fn restore(json: &str) -> Game {
        Game::from_snapshot(GameOptions::default(), Snapshot::from_json(json).unwrap())
    }

    #[test]
    fn snapshot_uses_the_saved_field_names() {
        let mut game = two_player_game();
        game.submit_score(301).unwrap();

        let json = game.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["players"][0]["name"], "Ann");
        assert_eq!(value["players"][0]["totalScore"], 301);
        assert_eq!(value["players"][0]["rounds"][0], 301);
        assert_eq!(value["players"][1]["isEliminated"], false);
        assert_eq!(value["currentState"]["currentPlayerIndex"], 1);
        assert_eq!(value["currentState"]["redemptionMode"], true);
        assert_eq!(value["currentState"]["redemptionPlayers"][0], 1);
        assert_eq!(value["currentState"]["initialWinners"][0], 0);
        assert_eq!(value["currentState"]["winner"], -1);
    }

    #[test]
    fn restore_resumes_a_redemption_round() {
        let mut game = two_player_game();
        game.submit_score(301).unwrap();

        let json = game.snapshot().to_json().unwrap();
        let snapshot = Snapshot::from_json(&json).unwrap();
        let restored = Game::from_snapshot(GameOptions::default(), snapshot);

        assert!(restored.is_redemption());
        assert_eq!(restored.current_player_index(), 1);
        assert_eq!(restored.initial_winners(), &[PlayerId(0)]);
        assert_eq!(restored.players()[0].total_score(), 301);
    }

    #[test]
    fn legacy_single_initial_winner_is_accepted() {
        let json = r#"{
            "players": [
                {"name": "Ann", "totalScore": 301, "rounds": [301], "isEliminated": false},
                {"name": "Bo", "totalScore": 40, "rounds": [40], "isEliminated": false},
                {"name": "Cy", "totalScore": 10, "rounds": [10], "isEliminated": false}
            ],
            "currentState": {
                "currentPlayerIndex": 2,
                "currentRound": 3,
                "targetScore": 301,
                "redemptionMode": true,
                "redemptionPlayers": [1, 2],
                "initialWinner": 0,
                "winner": -1
            }
        }"#;
        let game = restore(json);

        assert_eq!(game.initial_winners(), &[PlayerId(0)]);
        assert_eq!(game.redemption_players().collect::<Vec<_>>(), vec![PlayerId(2)]);
        assert_eq!(game.current_player_index(), 2);
        assert_eq!(game.current_round(), 3);
    }

    #[test]
    fn dangling_indices_resolve_to_nobody() {
        let json = r#"{
            "players": [{"name": "Ann", "totalScore": 12, "rounds": [12], "isEliminated": false}],
            "currentState": {
                "currentPlayerIndex": 9,
                "redemptionMode": true,
                "redemptionPlayers": [4, -3],
                "initialWinner": 7,
                "winner": 5
            }
        }"#;
        let game = restore(json);

        assert_eq!(game.state(), GameState::Playing);
        assert!(game.winner().is_none());
        assert!(game.initial_winners().is_empty());
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.current_round(), 1);
        assert_eq!(game.target_score(), 301);
    }

    #[test]
    fn saved_winner_restores_game_over() {
        let json = r#"{
            "players": [
                {"name": "Ann", "totalScore": 301, "rounds": [301], "isEliminated": false},
                {"name": "Bo", "totalScore": 0, "rounds": [], "isEliminated": false}
            ],
            "currentState": {"winner": 0}
        }"#;
        let game = restore(json);

        assert!(game.is_game_over());
        assert_eq!(game.winner().map(Player::name), Some("Ann"));
    }

    #[test]
    fn turn_pointer_skips_eliminated_seat() {
        let json = r#"{
            "players": [
                {"name": "Ann", "totalScore": 0, "rounds": [], "isEliminated": true},
                {"name": "Bo", "totalScore": 0, "rounds": [], "isEliminated": false}
            ],
            "currentState": {"currentPlayerIndex": 0, "currentRound": 2}
        }"#;
        let game = restore(json);

        assert_eq!(game.current_player_index(), 1);
        assert_eq!(game.current_round(), 2);
    }

    #[test]
    fn eliminated_players_are_dropped_from_a_saved_queue() {
        let json = r#"{
            "players": [
                {"name": "Ann", "totalScore": 301, "rounds": [301], "isEliminated": false},
                {"name": "Bo", "totalScore": 80, "rounds": [80], "isEliminated": true},
                {"name": "Cy", "totalScore": 100, "rounds": [100], "isEliminated": false}
            ],
            "currentState": {
                "currentPlayerIndex": 1,
                "redemptionMode": true,
                "redemptionPlayers": [1, 2],
                "initialWinners": [0]
            }
        }"#;
        let mut game = restore(json);

        assert!(game.is_redemption());
        assert_eq!(game.redemption_players().collect::<Vec<_>>(), vec![PlayerId(2)]);
        assert_eq!(game.current_player_index(), 2);

        let result = game.submit_score(0).unwrap();
        assert_eq!(result.winner(), Some(PlayerId(0)));
    }

    #[test]
    fn queue_of_only_eliminated_players_resumes_play() {
        let json = r#"{
            "players": [
                {"name": "Ann", "totalScore": 20, "rounds": [20], "isEliminated": false},
                {"name": "Bo", "totalScore": 80, "rounds": [80], "isEliminated": true}
            ],
            "currentState": {
                "currentPlayerIndex": 1,
                "redemptionMode": true,
                "redemptionPlayers": [1],
                "initialWinners": [0]
            }
        }"#;
        let mut game = restore(json);

        assert_eq!(game.state(), GameState::Playing);
        assert!(game.initial_winners().is_empty());
        assert_eq!(game.current_player_index(), 0);
        assert!(game.submit_score(30).is_ok());
    }

    #[test]
    fn empty_slot_text_is_rejected() {
        assert!(matches!(
            Snapshot::from_json("not json"),
            Err(StorageError::Decode(_))
        ));
    }
}
