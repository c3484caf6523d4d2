//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Normal rotation through active players.
    #[default]
    Playing,
    /// Players in the redemption queue each get one final turn.
    Redemption,
    /// A winner has been declared.
    GameOver,
}
