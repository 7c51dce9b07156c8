//=========================================================================
// Arcade UI — Library Root
//
// Screen-state controller for a frame-driven arcade game.
//
// Responsibilities:
// - Map global game-state changes to screen configurations
//   (start, gameplay, game-over, settings overlay)
// - Mirror live values (coins, speed) into HUD text every frame
// - Forward button actions to injected game collaborators
//
// Typical usage:
// ```no_run
// let hub = StateChangeHub::new();
// let mut ui = ControllerBuilder::new()
//     /* .with_game_state(..) and the other collaborators */
//     .build()?;
// ui.attach(&hub);
//
// loop {
//     ui.update(timer.tick());
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `collaborators` holds the traits the host game implements.
// `panels` and `state` hold the plain data the controller works with.
//
pub mod collaborators;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod notify;
pub mod panels;
pub mod prelude;
pub mod scheduler;
pub mod state;

//--- Public Exports ------------------------------------------------------
//
// The controller and its builder are the main entry points.
//
pub use config::ControllerConfig;
pub use controller::{ControllerBuilder, ScreenStateController, SpeedSample};
pub use error::BuildError;
