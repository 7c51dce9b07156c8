//=========================================================================
// Controller Configuration
//=========================================================================
//
// Timing constants used by the screen-state controller.
//
// Default Values:
//   game_over_delay        1.2   (delay before the game-over screen)
//   speed_sample_interval  0.25  (minimum time between speed label updates)
//   restart_delay          0.2   (delay passed along with restart requests)
//
//=========================================================================

//=== ControllerConfig ====================================================

/// Timing configuration for [`crate::ScreenStateController`].
///
/// All values are in time units of the host frame loop (seconds in
/// practice).
///
/// # Examples
///
/// ```
/// use arcade_ui::ControllerConfig;
///
/// let config = ControllerConfig::default()
///     .with_game_over_delay(2.0)
///     .with_speed_sample_interval(0.5);
///
/// assert_eq!(config.game_over_delay, 2.0);
/// assert_eq!(config.restart_delay, 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Delay between the GameOver notification and the game-over screen,
    /// leaving room for the end-of-session effect to play.
    pub game_over_delay: f32,

    /// Minimum accumulated time between two speed label updates.
    pub speed_sample_interval: f32,

    /// Delay forwarded to the session controller on restart.
    pub restart_delay: f32,
}

impl ControllerConfig {
    pub const DEFAULT_GAME_OVER_DELAY: f32 = 1.2;
    pub const DEFAULT_SPEED_SAMPLE_INTERVAL: f32 = 0.25;
    pub const DEFAULT_RESTART_DELAY: f32 = 0.2;

    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self {
            game_over_delay: Self::DEFAULT_GAME_OVER_DELAY,
            speed_sample_interval: Self::DEFAULT_SPEED_SAMPLE_INTERVAL,
            restart_delay: Self::DEFAULT_RESTART_DELAY,
        }
    }

    /// Sets the game-over reveal delay.
    ///
    /// # Panics
    ///
    /// Panics if `delay` is negative or not finite.
    pub fn with_game_over_delay(mut self, delay: f32) -> Self {
        assert!(
            delay.is_finite() && delay >= 0.0,
            "Game-over delay must be non-negative, got {}",
            delay
        );
        self.game_over_delay = delay;
        self
    }

    /// Sets the speed sampling interval.
    ///
    /// # Panics
    ///
    /// Panics if `interval <= 0.0` or not finite.
    pub fn with_speed_sample_interval(mut self, interval: f32) -> Self {
        assert!(
            interval.is_finite() && interval > 0.0,
            "Speed sample interval must be positive, got {}",
            interval
        );
        self.speed_sample_interval = interval;
        self
    }

    /// Sets the delay forwarded on restart.
    ///
    /// # Panics
    ///
    /// Panics if `delay` is negative or not finite.
    pub fn with_restart_delay(mut self, delay: f32) -> Self {
        assert!(
            delay.is_finite() && delay >= 0.0,
            "Restart delay must be non-negative, got {}",
            delay
        );
        self.restart_delay = delay;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
