//! Game configuration options.

/// Default score a player must hit exactly.
pub const DEFAULT_TARGET: u32 = 301;

/// Default amount the target grows by when overtime starts.
pub const DEFAULT_OVERTIME_INCREMENT: u32 = 100;

/// Configuration options for a darts game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dartrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_target(501)
///     .with_overtime_increment(50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Score a player must reach exactly. Restored on every reset.
    pub target: u32,
    /// Amount added to the target each time overtime starts.
    pub overtime_increment: u32,
    /// Smallest roster with which play may begin.
    pub min_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            overtime_increment: DEFAULT_OVERTIME_INCREMENT,
            min_players: 2,
        }
    }
}

impl GameOptions {
    /// Sets the starting target score.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_target(501);
    /// assert_eq!(options.target, 501);
    /// ```
    #[must_use]
    pub const fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    /// Sets the overtime increment.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_overtime_increment(50);
    /// assert_eq!(options.overtime_increment, 50);
    /// ```
    #[must_use]
    pub const fn with_overtime_increment(mut self, increment: u32) -> Self {
        self.overtime_increment = increment;
        self
    }

    /// Sets the minimum number of players needed to start.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(3);
    /// assert_eq!(options.min_players, 3);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }
}
