//=========================================================================
// Screen State Controller
//
// Translates game-state notifications, per-frame samples and button
// actions into panel visibility and HUD text.
//
// Architecture:
// ```text
//     ControllerBuilder ──build()──> ScreenStateController
//         │                              │
//         ├─ collaborators (Rc<dyn _>)   ├─ handle_state_change()
//         └─ ControllerConfig            ├─ update(dt)   (once per frame)
//                                        └─ button actions → collaborators
// ```
//
// Per-frame update order:
//   1. Advance the deferred task clock by the frame delta
//   2. Apply notifications queued on the attached subscription
//   3. Run deferred tasks now due (delayed game-over reveal)
//   4. Sample speed while playing (throttled)
//   5. Mirror coin count
//   6. Refresh audio icons while settings are open
//
// The clock moves before notifications are applied: a delay scheduled
// from a notification starts counting at the moment it was received.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::collaborators::{
    AudioController, CoinCounter, ExternalLinkOpener, GameStateSource, PlayerSpeedSource,
    SessionController, SoundEffectPlayer,
};
use crate::config::ControllerConfig;
use crate::error::BuildError;
use crate::notify::{StateChangeHub, Subscription};
use crate::panels::{DisplayState, HudText, PanelSet};
use crate::scheduler::{DeferredQueue, TaskHandle};
use crate::state::{GameState, SocialPlatform, StateChange};

//=== SpeedSample =========================================================

/// Running speed counters for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpeedSample {
    /// Time accumulated since the speed label was last written.
    pub elapsed_since_sample: f32,

    /// Highest speed sampled since the last reset.
    pub max_speed_observed: f32,
}

//=== UiTask ==============================================================

/// Work deferred on the frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiTask {
    RevealGameOver,
}

//=== ControllerBuilder ===================================================

/// Builder for wiring a [`ScreenStateController`] to its collaborators.
///
/// Every collaborator is required. [`build`](Self::build) reports the
/// first one missing.
///
/// # Examples
///
/// ```no_run
/// use std::rc::Rc;
/// use arcade_ui::prelude::*;
/// # fn wire(
/// #     state: Rc<dyn GameStateSource>, speed: Rc<dyn PlayerSpeedSource>,
/// #     coins: Rc<dyn CoinCounter>, audio: Rc<dyn AudioController>,
/// #     session: Rc<dyn SessionController>, links: Rc<dyn ExternalLinkOpener>,
/// #     sfx: Rc<dyn SoundEffectPlayer>,
/// # ) -> Result<(), BuildError> {
///
/// let hub = StateChangeHub::new();
/// let mut ui = ControllerBuilder::new()
///     .with_config(ControllerConfig::default().with_game_over_delay(1.5))
///     .with_game_state(state)
///     .with_player_speed(speed)
///     .with_coin_counter(coins)
///     .with_audio(audio)
///     .with_session(session)
///     .with_link_opener(links)
///     .with_sound_effects(sfx)
///     .build()?;
///
/// ui.attach(&hub);
/// ui.update(1.0 / 60.0);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ControllerBuilder {
    config: ControllerConfig,
    game_state: Option<Rc<dyn GameStateSource>>,
    player_speed: Option<Rc<dyn PlayerSpeedSource>>,
    coin_counter: Option<Rc<dyn CoinCounter>>,
    audio: Option<Rc<dyn AudioController>>,
    session: Option<Rc<dyn SessionController>>,
    link_opener: Option<Rc<dyn ExternalLinkOpener>>,
    sound_effects: Option<Rc<dyn SoundEffectPlayer>>,
}

impl ControllerBuilder {
    /// Creates a builder with the default configuration and no collaborators.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_game_state(mut self, source: Rc<dyn GameStateSource>) -> Self {
        self.game_state = Some(source);
        self
    }

    pub fn with_player_speed(mut self, source: Rc<dyn PlayerSpeedSource>) -> Self {
        self.player_speed = Some(source);
        self
    }

    pub fn with_coin_counter(mut self, counter: Rc<dyn CoinCounter>) -> Self {
        self.coin_counter = Some(counter);
        self
    }

    pub fn with_audio(mut self, audio: Rc<dyn AudioController>) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_session(mut self, session: Rc<dyn SessionController>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_link_opener(mut self, opener: Rc<dyn ExternalLinkOpener>) -> Self {
        self.link_opener = Some(opener);
        self
    }

    pub fn with_sound_effects(mut self, player: Rc<dyn SoundEffectPlayer>) -> Self {
        self.sound_effects = Some(player);
        self
    }

    /// Builds the controller and resets it to the Start configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingCollaborator`] naming the first
    /// collaborator that was not supplied.
    pub fn build(self) -> Result<ScreenStateController, BuildError> {
        let game_state = self
            .game_state
            .ok_or(BuildError::MissingCollaborator("game state source"))?;
        let player_speed = self
            .player_speed
            .ok_or(BuildError::MissingCollaborator("player speed source"))?;
        let coin_counter = self
            .coin_counter
            .ok_or(BuildError::MissingCollaborator("coin counter"))?;
        let audio = self
            .audio
            .ok_or(BuildError::MissingCollaborator("audio controller"))?;
        let session = self
            .session
            .ok_or(BuildError::MissingCollaborator("session controller"))?;
        let link_opener = self
            .link_opener
            .ok_or(BuildError::MissingCollaborator("external link opener"))?;
        let sound_effects = self
            .sound_effects
            .ok_or(BuildError::MissingCollaborator("sound effect player"))?;

        info!("Building screen state controller ({:?})", self.config);

        let mut controller = ScreenStateController {
            config: self.config,
            panels: PanelSet::new(),
            hud: HudText::default(),
            display: DisplayState::Start,
            speed: SpeedSample::default(),
            tasks: DeferredQueue::new(),
            pending_game_over: None,
            subscription: None,
            game_state,
            player_speed,
            coin_counter,
            audio,
            session,
            link_opener,
            sound_effects,
        };
        controller.reset();

        Ok(controller)
    }
}

//=== ScreenStateController ===============================================

/// Owns the visibility of every UI panel and the HUD text.
///
/// Panels change only through the display configurations
/// ([`show_start`](Self::show_start), [`show_playing`](Self::show_playing),
/// [`show_game_over`](Self::show_game_over)), the settings overlay toggles,
/// and the per-frame audio icon refresh.
pub struct ScreenStateController {
    config: ControllerConfig,
    panels: PanelSet,
    hud: HudText,
    display: DisplayState,
    speed: SpeedSample,
    tasks: DeferredQueue<UiTask>,
    pending_game_over: Option<TaskHandle>,
    subscription: Option<Subscription>,

    game_state: Rc<dyn GameStateSource>,
    player_speed: Rc<dyn PlayerSpeedSource>,
    coin_counter: Rc<dyn CoinCounter>,
    audio: Rc<dyn AudioController>,
    session: Rc<dyn SessionController>,
    link_opener: Rc<dyn ExternalLinkOpener>,
    sound_effects: Rc<dyn SoundEffectPlayer>,
}

impl ScreenStateController {
    //--- Lifecycle --------------------------------------------------------

    /// Hides every panel except the main canvas, clears the speed counters
    /// and pending tasks, then shows the Start configuration.
    pub fn reset(&mut self) {
        info!("Resetting screen state");

        self.panels.hide_all();
        self.speed = SpeedSample::default();
        self.tasks.clear();
        self.pending_game_over = None;
        self.show_start();
    }

    /// Subscribes to state change notifications from `hub`.
    ///
    /// Notifications are applied at the start of each [`update`](Self::update).
    /// Attaching again replaces the previous subscription.
    pub fn attach(&mut self, hub: &StateChangeHub) {
        if self.subscription.replace(hub.subscribe()).is_some() {
            warn!("Controller was already attached; previous subscription released");
        }
        info!("Controller attached to state change hub");
    }

    /// Releases the current subscription, if any.
    pub fn detach(&mut self) {
        match self.subscription.take() {
            Some(subscription) => {
                drop(subscription);
                info!("Controller detached from state change hub");
            }
            None => warn!("Detach called on a controller that is not attached"),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    //--- State Transitions ------------------------------------------------

    /// Applies the display table for a game-state change.
    ///
    /// | new state     | effect                                        |
    /// |---------------|-----------------------------------------------|
    /// | `Playing`     | show the Playing configuration                |
    /// | `PreGameOver` | nothing                                       |
    /// | `GameOver`    | show the GameOver configuration after a delay |
    /// | `Idle`        | nothing                                       |
    ///
    /// A pending GameOver reveal is cancelled by any later `Playing` or
    /// `GameOver` notification, so at most one reveal is ever queued.
    pub fn handle_state_change(&mut self, new: GameState, old: GameState) {
        debug!("Game state changed: {:?} -> {:?}", old, new);

        match new {
            GameState::Playing => {
                self.cancel_pending_game_over();
                self.show_playing();
            }
            GameState::GameOver => {
                self.cancel_pending_game_over();
                let handle = self
                    .tasks
                    .schedule(self.config.game_over_delay, UiTask::RevealGameOver);
                self.pending_game_over = Some(handle);
            }
            GameState::PreGameOver | GameState::Idle => {}
        }
    }

    //--- Display Configurations -------------------------------------------

    pub fn show_start(&mut self) {
        debug!("Showing start screen");
        self.panels.apply_start();
        self.display = DisplayState::Start;
    }

    pub fn show_playing(&mut self) {
        debug!("Showing gameplay screen");
        self.panels.apply_playing();
        self.display = DisplayState::Playing;
    }

    /// Shows the game-over screen with the session's top speed.
    pub fn show_game_over(&mut self) {
        debug!(
            "Showing game-over screen (max speed {})",
            self.speed.max_speed_observed
        );
        self.panels.apply_game_over();
        self.hud.set_velocity(self.speed.max_speed_observed);
        self.display = DisplayState::GameOver;
    }

    pub fn show_settings(&mut self) {
        self.panels.set_settings_visible(true);
    }

    pub fn hide_settings(&mut self) {
        self.panels.set_settings_visible(false);
    }

    //--- Per-frame Update -------------------------------------------------

    /// Runs once per rendered frame with the frame's elapsed time.
    pub fn update(&mut self, dt: f32) {
        self.tasks.tick(dt);
        self.apply_notifications();
        self.run_due_tasks();

        if self.game_state.current_state().is_playing() {
            self.sample_speed(dt);
        }

        self.hud.set_coins(self.coin_counter.coins());

        if self.panels.settings_visible() {
            self.panels
                .apply_audio_icons(self.audio.is_sound_off(), self.audio.is_music_off());
        }
    }

    fn apply_notifications(&mut self) {
        let changes: Vec<StateChange> = match &self.subscription {
            Some(subscription) => subscription.drain().collect(),
            None => return,
        };

        for change in changes {
            self.handle_state_change(change.new, change.old);
        }
    }

    fn run_due_tasks(&mut self) {
        for task in self.tasks.take_due() {
            match task {
                UiTask::RevealGameOver => {
                    self.pending_game_over = None;
                    self.show_game_over();
                }
            }
        }
    }

    fn sample_speed(&mut self, dt: f32) {
        self.speed.elapsed_since_sample += dt;
        if self.speed.elapsed_since_sample < self.config.speed_sample_interval {
            return;
        }

        let current = self.player_speed.current_speed();
        self.hud.set_velocity(current);
        if current > self.speed.max_speed_observed {
            self.speed.max_speed_observed = current;
        }
        self.speed.elapsed_since_sample = 0.0;
    }

    fn cancel_pending_game_over(&mut self) {
        if let Some(handle) = self.pending_game_over.take() {
            self.tasks.cancel(handle);
        }
    }

    //--- Button Actions ---------------------------------------------------

    pub fn start_game(&self) {
        debug!("Start game requested");
        self.session.start_session();
    }

    pub fn end_game(&self) {
        debug!("End game requested");
        self.session.end_session();
    }

    /// Requests a restart with the configured restart delay.
    pub fn restart_game(&self) {
        self.restart_game_after(self.config.restart_delay);
    }

    pub fn restart_game_after(&self, delay_seconds: f32) {
        debug!("Restart requested in {}s", delay_seconds);
        self.session.restart_session(delay_seconds);
    }

    pub fn toggle_sound(&self) {
        self.audio.toggle_sound();
    }

    pub fn toggle_music(&self) {
        self.audio.toggle_music();
    }

    pub fn rate_app(&self) {
        self.link_opener.open_rating_page();
    }

    pub fn open_social_link(&self, platform: SocialPlatform) {
        debug!("Opening {:?} page", platform);
        self.link_opener.open_social_page(platform);
    }

    pub fn play_click_sound(&self) {
        self.sound_effects.play_ui_click();
    }

    //--- Queries ----------------------------------------------------------

    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    pub fn hud(&self) -> &HudText {
        &self.hud
    }

    /// Returns the active base configuration (never `Settings`).
    pub fn display_state(&self) -> DisplayState {
        self.display
    }

    /// Returns `true` if `state` is currently shown. `Settings` is checked
    /// against the overlay, the others against the base configuration.
    pub fn is_showing(&self, state: DisplayState) -> bool {
        match state {
            DisplayState::Settings => self.panels.settings_visible(),
            base => self.display == base,
        }
    }

    pub fn speed_sample(&self) -> SpeedSample {
        self.speed
    }

    pub fn max_speed(&self) -> f32 {
        self.speed.max_speed_observed
    }

    /// Returns `true` while a game-over reveal is waiting on its delay.
    pub fn has_pending_game_over(&self) -> bool {
        self.pending_game_over
            .is_some_and(|handle| self.tasks.is_pending(handle))
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::PanelId;
    use std::cell::{Cell, RefCell};

    //--- Test Helpers -----------------------------------------------------

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Start,
        End,
        Restart(f32),
        ToggleSound,
        ToggleMusic,
        Rate,
        Social(SocialPlatform),
        Click,
    }

    #[derive(Default)]
    struct FakeGame {
        state: Cell<GameState>,
        speed: Cell<f32>,
        coins: Cell<u32>,
        sound_off: Cell<bool>,
        music_off: Cell<bool>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeGame {
        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl GameStateSource for FakeGame {
        fn current_state(&self) -> GameState {
            self.state.get()
        }
    }

    impl PlayerSpeedSource for FakeGame {
        fn current_speed(&self) -> f32 {
            self.speed.get()
        }
    }

    impl CoinCounter for FakeGame {
        fn coins(&self) -> u32 {
            self.coins.get()
        }
    }

    impl AudioController for FakeGame {
        fn is_sound_off(&self) -> bool {
            self.sound_off.get()
        }
        fn is_music_off(&self) -> bool {
            self.music_off.get()
        }
        fn toggle_sound(&self) {
            self.sound_off.set(!self.sound_off.get());
            self.record(Call::ToggleSound);
        }
        fn toggle_music(&self) {
            self.music_off.set(!self.music_off.get());
            self.record(Call::ToggleMusic);
        }
    }

    impl SessionController for FakeGame {
        fn start_session(&self) {
            self.record(Call::Start);
        }
        fn end_session(&self) {
            self.record(Call::End);
        }
        fn restart_session(&self, delay_seconds: f32) {
            self.record(Call::Restart(delay_seconds));
        }
    }

    impl ExternalLinkOpener for FakeGame {
        fn open_rating_page(&self) {
            self.record(Call::Rate);
        }
        fn open_social_page(&self, platform: SocialPlatform) {
            self.record(Call::Social(platform));
        }
    }

    impl SoundEffectPlayer for FakeGame {
        fn play_ui_click(&self) {
            self.record(Call::Click);
        }
    }

    fn builder_for(game: &Rc<FakeGame>) -> ControllerBuilder {
        ControllerBuilder::new()
            .with_game_state(game.clone())
            .with_player_speed(game.clone())
            .with_coin_counter(game.clone())
            .with_audio(game.clone())
            .with_session(game.clone())
            .with_link_opener(game.clone())
            .with_sound_effects(game.clone())
    }

    fn setup() -> (Rc<FakeGame>, ScreenStateController) {
        let game = Rc::new(FakeGame::default());
        let controller = builder_for(&game).build().unwrap();
        (game, controller)
    }

    fn enter_playing(game: &FakeGame, controller: &mut ScreenStateController) {
        game.state.set(GameState::Playing);
        controller.handle_state_change(GameState::Playing, GameState::Idle);
    }

    //=====================================================================
    // Builder Tests
    //=====================================================================

    #[test]
    fn build_starts_in_start_configuration() {
        let (_game, controller) = setup();
        assert_eq!(controller.display_state(), DisplayState::Start);
        assert_eq!(controller.panels(), &PanelSet::start());
        assert_eq!(controller.max_speed(), 0.0);
    }

    #[test]
    fn build_reports_first_missing_collaborator() {
        let game = Rc::new(FakeGame::default());

        let err = ControllerBuilder::new().build().err();
        assert_eq!(
            err,
            Some(BuildError::MissingCollaborator("game state source"))
        );

        let err = ControllerBuilder::new()
            .with_game_state(game.clone())
            .with_player_speed(game.clone())
            .with_coin_counter(game.clone())
            .build()
            .err();
        assert_eq!(err, Some(BuildError::MissingCollaborator("audio controller")));
    }

    #[test]
    fn build_uses_supplied_config() {
        let game = Rc::new(FakeGame::default());
        let config = ControllerConfig::new().with_game_over_delay(3.0);
        let controller = builder_for(&game).with_config(config).build().unwrap();
        assert_eq!(controller.config().game_over_delay, 3.0);
    }

    //=====================================================================
    // Transition Tests
    //=====================================================================

    #[test]
    fn playing_notification_shows_playing_immediately() {
        let (game, mut controller) = setup();
        enter_playing(&game, &mut controller);

        assert_eq!(controller.display_state(), DisplayState::Playing);
        assert!(controller.panels().is_visible(PanelId::VelocityBoard));
        assert!(!controller.panels().is_visible(PanelId::PlayButton));
    }

    #[test]
    fn game_over_waits_for_delay() {
        let (game, mut controller) = setup();
        enter_playing(&game, &mut controller);

        game.state.set(GameState::GameOver);
        controller.handle_state_change(GameState::GameOver, GameState::Playing);
        assert!(controller.has_pending_game_over());

        controller.update(1.0);
        assert_eq!(controller.display_state(), DisplayState::Playing);

        controller.update(0.2);
        assert_eq!(controller.display_state(), DisplayState::GameOver);
        assert!(!controller.has_pending_game_over());
        assert!(controller.panels().is_visible(PanelId::RestartButton));
        assert!(controller.panels().is_visible(PanelId::VelocityNote));
    }

    #[test]
    fn pre_game_over_changes_nothing() {
        let (game, mut controller) = setup();
        enter_playing(&game, &mut controller);
        let before = controller.panels().clone();

        controller.handle_state_change(GameState::PreGameOver, GameState::Playing);
        controller.update(5.0);

        assert_eq!(controller.panels(), &before);
        assert_eq!(controller.display_state(), DisplayState::Playing);
    }

    #[test]
    fn idle_notification_changes_nothing() {
        let (_game, mut controller) = setup();
        controller.handle_state_change(GameState::Idle, GameState::GameOver);
        assert_eq!(controller.panels(), &PanelSet::start());
    }

    #[test]
    fn repeated_game_over_reveals_once_from_last_notification() {
        let (_game, mut controller) = setup();

        controller.handle_state_change(GameState::GameOver, GameState::Playing);
        controller.update(1.0);
        controller.handle_state_change(GameState::GameOver, GameState::GameOver);

        // First notification's deadline passes without a reveal.
        controller.update(0.5);
        assert_eq!(controller.display_state(), DisplayState::Start);

        controller.update(0.7);
        assert_eq!(controller.display_state(), DisplayState::GameOver);
    }

    #[test]
    fn playing_cancels_pending_game_over() {
        let (game, mut controller) = setup();
        controller.handle_state_change(GameState::GameOver, GameState::Playing);

        enter_playing(&game, &mut controller);
        assert!(!controller.has_pending_game_over());

        controller.update(2.0);
        assert_eq!(controller.display_state(), DisplayState::Playing);
    }

    #[test]
    fn reset_cancels_pending_game_over_and_shows_start() {
        let (game, mut controller) = setup();
        enter_playing(&game, &mut controller);
        controller.handle_state_change(GameState::GameOver, GameState::Playing);

        controller.reset();
        controller.update(2.0);

        assert_eq!(controller.display_state(), DisplayState::Start);
        assert_eq!(controller.panels(), &PanelSet::start());
    }

    //=====================================================================
    // Settings Tests
    //=====================================================================

    #[test]
    fn settings_toggles_are_idempotent() {
        let (_game, mut controller) = setup();

        controller.show_settings();
        let once = controller.panels().clone();
        controller.show_settings();
        assert_eq!(controller.panels(), &once);

        controller.hide_settings();
        let hidden = controller.panels().clone();
        controller.hide_settings();
        assert_eq!(controller.panels(), &hidden);
    }

    #[test]
    fn settings_overlay_keeps_base_state() {
        let (_game, mut controller) = setup();
        controller.show_settings();

        assert!(controller.is_showing(DisplayState::Settings));
        assert!(controller.is_showing(DisplayState::Start));
        assert_eq!(controller.display_state(), DisplayState::Start);
    }

    #[test]
    fn audio_icons_refresh_only_while_settings_open() {
        let (game, mut controller) = setup();
        game.sound_off.set(true);

        controller.update(0.016);
        assert!(!controller.panels().is_visible(PanelId::SoundOffIcon));
        assert!(!controller.panels().is_visible(PanelId::SoundOnIcon));

        controller.show_settings();
        controller.update(0.016);
        assert!(controller.panels().is_visible(PanelId::SoundOffIcon));
        assert!(!controller.panels().is_visible(PanelId::SoundOnIcon));
        assert!(controller.panels().is_visible(PanelId::MusicOnIcon));
        assert!(!controller.panels().is_visible(PanelId::MusicOffIcon));
    }

    #[test]
    fn audio_icons_follow_toggles() {
        let (_game, mut controller) = setup();
        controller.show_settings();

        controller.toggle_music();
        controller.update(0.016);
        assert!(controller.panels().is_visible(PanelId::MusicOffIcon));

        controller.toggle_music();
        controller.update(0.016);
        assert!(controller.panels().is_visible(PanelId::MusicOnIcon));
        assert!(!controller.panels().is_visible(PanelId::MusicOffIcon));
    }

    //=====================================================================
    // Per-frame Tests
    //=====================================================================

    #[test]
    fn speed_is_sampled_at_interval() {
        let (game, mut controller) = setup();
        enter_playing(&game, &mut controller);
        game.speed.set(12.7);

        controller.update(0.125);
        assert_eq!(controller.hud().velocity, "");

        controller.update(0.125);
        assert_eq!(controller.hud().velocity, "12");
        assert_eq!(controller.speed_sample().elapsed_since_sample, 0.0);
    }

    #[test]
    fn speed_is_not_sampled_outside_playing() {
        let (game, mut controller) = setup();
        game.speed.set(30.0);

        controller.update(1.0);

        assert_eq!(controller.hud().velocity, "");
        assert_eq!(controller.max_speed(), 0.0);
    }

    #[test]
    fn max_speed_never_decreases_in_session() {
        let (game, mut controller) = setup();
        enter_playing(&game, &mut controller);

        let mut last_max = 0.0;
        for speed in [3.0, 8.5, 2.0, 8.4, 11.0, 0.0] {
            game.speed.set(speed);
            controller.update(0.25);
            assert!(controller.max_speed() >= last_max);
            last_max = controller.max_speed();
        }
        assert_eq!(controller.max_speed(), 11.0);
    }

    #[test]
    fn reset_zeroes_max_speed() {
        let (game, mut controller) = setup();
        enter_playing(&game, &mut controller);
        game.speed.set(9.0);
        controller.update(0.25);
        assert_eq!(controller.max_speed(), 9.0);

        controller.reset();
        assert_eq!(controller.speed_sample(), SpeedSample::default());
    }

    #[test]
    fn game_over_shows_floored_max_speed() {
        let (game, mut controller) = setup();
        enter_playing(&game, &mut controller);
        game.speed.set(17.9);
        controller.update(0.25);
        game.speed.set(4.0);
        controller.update(0.25);
        assert_eq!(controller.hud().velocity, "4");

        controller.show_game_over();
        assert_eq!(controller.hud().velocity, "17");
    }

    #[test]
    fn coin_count_mirrors_every_frame() {
        let (game, mut controller) = setup();

        game.coins.set(5);
        controller.update(0.016);
        assert_eq!(controller.hud().coins, "5");

        game.coins.set(42);
        controller.update(0.016);
        assert_eq!(controller.hud().coins, "42");
    }

    //=====================================================================
    // Subscription Tests
    //=====================================================================

    #[test]
    fn attached_controller_applies_notifications_on_update() {
        let (game, mut controller) = setup();
        let hub = StateChangeHub::new();
        controller.attach(&hub);
        assert!(controller.is_attached());

        game.state.set(GameState::Playing);
        hub.publish(StateChange::new(GameState::Playing, GameState::Idle));
        assert_eq!(controller.display_state(), DisplayState::Start);

        controller.update(0.016);
        assert_eq!(controller.display_state(), DisplayState::Playing);
    }

    #[test]
    fn game_over_from_hub_counts_delay_from_receipt() {
        let (game, mut controller) = setup();
        let hub = StateChangeHub::new();
        controller.attach(&hub);

        game.state.set(GameState::Playing);
        hub.publish(StateChange::new(GameState::Playing, GameState::Idle));
        controller.update(0.016);

        game.state.set(GameState::GameOver);
        hub.publish(StateChange::new(GameState::GameOver, GameState::Playing));
        controller.update(1.0);
        controller.update(0.2);
        assert_eq!(controller.display_state(), DisplayState::Playing);
        assert!(controller.has_pending_game_over());

        controller.update(1.0);
        assert_eq!(controller.display_state(), DisplayState::GameOver);
    }

    #[test]
    fn detached_controller_ignores_notifications() {
        let (_game, mut controller) = setup();
        let hub = StateChangeHub::new();
        controller.attach(&hub);
        controller.detach();

        assert!(!controller.is_attached());
        assert_eq!(hub.subscriber_count(), 0);

        hub.publish(StateChange::new(GameState::Playing, GameState::Idle));
        controller.update(0.016);
        assert_eq!(controller.display_state(), DisplayState::Start);
    }

    #[test]
    fn reattaching_keeps_a_single_subscription() {
        let (_game, mut controller) = setup();
        let hub = StateChangeHub::new();

        controller.attach(&hub);
        controller.attach(&hub);
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn dropping_controller_releases_subscription() {
        let (_game, mut controller) = setup();
        let hub = StateChangeHub::new();
        controller.attach(&hub);

        drop(controller);
        assert_eq!(hub.subscriber_count(), 0);
    }

    //=====================================================================
    // Button Forwarding Tests
    //=====================================================================

    #[test]
    fn buttons_forward_to_collaborators() {
        let (game, controller) = setup();

        controller.start_game();
        controller.end_game();
        controller.restart_game();
        controller.restart_game_after(1.0);
        controller.toggle_sound();
        controller.rate_app();
        controller.open_social_link(SocialPlatform::Twitter);
        controller.open_social_link(SocialPlatform::Facebook);
        controller.play_click_sound();

        assert_eq!(
            game.calls(),
            vec![
                Call::Start,
                Call::End,
                Call::Restart(0.2),
                Call::Restart(1.0),
                Call::ToggleSound,
                Call::Rate,
                Call::Social(SocialPlatform::Twitter),
                Call::Social(SocialPlatform::Facebook),
                Call::Click,
            ]
        );
    }

    #[test]
    fn buttons_leave_panels_untouched() {
        let (_game, controller) = setup();
        let before = controller.panels().clone();

        controller.start_game();
        controller.toggle_sound();
        controller.play_click_sound();

        assert_eq!(controller.panels(), &before);
    }
}
