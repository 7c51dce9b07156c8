//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use arcade_ui::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Controller
pub use crate::config::ControllerConfig;
pub use crate::controller::{ControllerBuilder, ScreenStateController, SpeedSample};
pub use crate::error::BuildError;

// Collaborator contracts
pub use crate::collaborators::{
    AudioController, CoinCounter, ExternalLinkOpener, GameStateSource, PlayerSpeedSource,
    SessionController, SoundEffectPlayer,
};

// Data
pub use crate::panels::{DisplayState, HudText, PanelId, PanelSet};
pub use crate::state::{GameState, SocialPlatform, StateChange};

// Frame loop plumbing
pub use crate::frame::FrameTimer;
pub use crate::notify::{StateChangeHub, Subscription};
pub use crate::scheduler::{DeferredQueue, TaskHandle};
