//=========================================================================
// Game State Types
//
// Defines the global game phases the UI reacts to, the notification
// payload emitted when the phase changes, and the social platforms the
// menu can link to.
//
//=========================================================================

//=== GameState ===========================================================

/// Global game phase, as reported by the game-state source.
///
/// `Idle` is the title/start phase before a session begins.
/// `PreGameOver` is a recoverable phase right before the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Idle,
    Playing,
    PreGameOver,
    GameOver,
}

impl GameState {
    /// Returns `true` while a session is actively running.
    pub fn is_playing(self) -> bool {
        self == GameState::Playing
    }
}

//=== StateChange =========================================================

/// Notification emitted by the game-state source on every phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub new: GameState,
    pub old: GameState,
}

impl StateChange {
    pub fn new(new: GameState, old: GameState) -> Self {
        Self { new, old }
    }
}

//=== SocialPlatform ======================================================

/// Social platforms reachable from the menu buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Twitter,
    Facebook,
}

//=========================================================================
// Unit Tests
//=========================================================================
