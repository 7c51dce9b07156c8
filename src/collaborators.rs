//=========================================================================
// External Collaborators
//=========================================================================
//
// Contracts for the subsystems the UI controller reads from or forwards
// button actions to. The controller holds these behind `Rc<dyn ...>` and
// never reaches a global registry.
//
// All methods take `&self`: implementors that toggle state (audio,
// sessions) are expected to use interior mutability, since the same
// collaborator is usually shared with other game systems on the frame
// loop thread.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::state::{GameState, SocialPlatform};

//=== Read-side Collaborators =============================================

/// Source of the authoritative game phase.
pub trait GameStateSource {
    fn current_state(&self) -> GameState;
}

/// Exposes the player's current speed in world units per time unit.
pub trait PlayerSpeedSource {
    fn current_speed(&self) -> f32;
}

/// Exposes the current coin balance. The UI only mirrors it.
pub trait CoinCounter {
    fn coins(&self) -> u32;
}

//=== Command-side Collaborators ==========================================

/// Audio mute state and the toggles behind the settings buttons.
pub trait AudioController {
    fn is_sound_off(&self) -> bool;
    fn is_music_off(&self) -> bool;
    fn toggle_sound(&self);
    fn toggle_music(&self);
}

/// Session lifecycle commands.
pub trait SessionController {
    fn start_session(&self);
    fn end_session(&self);

    /// Restarts the session after `delay_seconds`.
    fn restart_session(&self, delay_seconds: f32);
}

/// Opens store and social pages outside the game.
pub trait ExternalLinkOpener {
    fn open_rating_page(&self);
    fn open_social_page(&self, platform: SocialPlatform);
}

/// Plays short UI sound effects.
pub trait SoundEffectPlayer {
    fn play_ui_click(&self);
}
