use dartrs::{
    Game, GameOptions, GameState, MemoryStorage, Player, Session, Storage, StorageError,
    TurnOutcome, TurnResult,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The browser's `localStorage`, or memory when it is unavailable
/// (private browsing, workers).
enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    fn detect() -> Self {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .map_or_else(|| Self::Memory(MemoryStorage::new()), Self::Local)
    }
}

impl Storage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|err| StorageError::Read(format!("{err:?}"))),
            Self::Memory(storage) => storage.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|err| StorageError::Write(format!("{err:?}"))),
            Self::Memory(storage) => storage.write(key, value),
        }
    }
}

#[wasm_bindgen]
pub struct WasmGame {
    session: Session<BrowserStorage>,
}

#[wasm_bindgen]
impl WasmGame {
    /// Resumes the game saved in `localStorage`, if any.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: Session::open(GameOptions::default(), BrowserStorage::detect()),
        }
    }

    pub fn add_player(&mut self, name: &str) -> Result<u32, JsValue> {
        self.session
            .add_player(name)
            .map(|id| id.0)
            .map_err(js_err)
    }

    pub fn can_start(&self) -> bool {
        self.session.game().can_start()
    }

    pub fn submit_score(&mut self, score: u32) -> Result<JsValue, JsValue> {
        let result = self.session.submit_score(score).map_err(js_err)?;
        to_js_value(&JsTurnResult::from(&result))
    }

    pub fn reset_game(&mut self, keep_players: bool) -> Result<(), JsValue> {
        self.session.reset_game(keep_players).map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsView::from(self.session.game()))
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn result in the shape the page expects.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTurnResult {
    bust: bool,
    message: Option<String>,
    redemption: bool,
    winners: Vec<String>,
    game_over: bool,
}

impl From<&TurnResult> for JsTurnResult {
    fn from(result: &TurnResult) -> Self {
        Self {
            bust: result.is_bust(),
            message: result.message.clone(),
            redemption: matches!(result.outcome, TurnOutcome::RedemptionStarted),
            winners: result.winners.clone(),
            game_over: result.is_game_over(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsView {
    state: &'static str,
    players: Vec<JsPlayer>,
    current_player_index: u32,
    current_round: u32,
    target_score: u32,
    game_over: bool,
    redemption_mode: bool,
    winner: Option<String>,
    can_start: bool,
}

impl From<&Game> for JsView {
    fn from(game: &Game) -> Self {
        Self {
            state: state_to_str(game.state()),
            players: game.players().iter().map(JsPlayer::from).collect(),
            current_player_index: game.current_player_index() as u32,
            current_round: game.current_round(),
            target_score: game.target_score(),
            game_over: game.is_game_over(),
            redemption_mode: game.is_redemption(),
            winner: game.winner().map(|player| player.name().to_string()),
            can_start: game.can_start(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPlayer {
    name: String,
    total_score: u32,
    rounds: Vec<u32>,
    is_eliminated: bool,
}

impl From<&Player> for JsPlayer {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            total_score: player.total_score(),
            rounds: player.rounds().to_vec(),
            is_eliminated: player.is_eliminated(),
        }
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Playing => "Playing",
        GameState::Redemption => "Redemption",
        GameState::GameOver => "GameOver",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
