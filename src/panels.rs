//=========================================================================
// Panels
//=========================================================================
//
// Visibility flags for every UI element group, the text displays, and
// the fixed display configurations applied on screen transitions.
//
// Architecture:
//   PanelSet
//     └─ flags: [bool; PanelId::COUNT]   (indexed by PanelId)
//
//   apply_start() / apply_playing() / apply_game_over()
//     each overwrites the flags its configuration owns
//
//   set_settings_visible()
//     touches only the settings overlay
//
//=========================================================================

//=== DisplayState ========================================================

/// Screen configuration shown by the controller.
///
/// `Start`, `Playing` and `GameOver` are mutually exclusive base
/// configurations. `Settings` is an overlay drawn on top of whichever
/// base configuration is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    Start,
    Playing,
    GameOver,
    /// Query key for the overlay; never the active base configuration.
    Settings,
}

//=== PanelId =============================================================

/// Identifies one UI element group whose visibility is controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    MainCanvas,
    Header,
    Title,
    PlayButton,
    RestartButton,
    MenuButtons,
    VelocityBoard,
    VelocityNote,
    SettingsPanel,
    SoundOnIcon,
    SoundOffIcon,
    MusicOnIcon,
    MusicOffIcon,
}

impl PanelId {
    /// Number of controlled panels.
    pub const COUNT: usize = 13;

    /// Every panel, in declaration order.
    pub const ALL: [PanelId; Self::COUNT] = [
        PanelId::MainCanvas,
        PanelId::Header,
        PanelId::Title,
        PanelId::PlayButton,
        PanelId::RestartButton,
        PanelId::MenuButtons,
        PanelId::VelocityBoard,
        PanelId::VelocityNote,
        PanelId::SettingsPanel,
        PanelId::SoundOnIcon,
        PanelId::SoundOffIcon,
        PanelId::MusicOnIcon,
        PanelId::MusicOffIcon,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

//=== PanelSet ============================================================

/// Visibility flags for all controlled panels (`true` = visible).
///
/// Readable from anywhere; only the controller's transition functions
/// mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSet {
    flags: [bool; PanelId::COUNT],
}

impl PanelSet {
    /// Creates a set with every panel hidden except the main canvas.
    pub fn new() -> Self {
        let mut set = Self {
            flags: [false; PanelId::COUNT],
        };
        set.set(PanelId::MainCanvas, true);
        set
    }

    /// Creates a set already in the Start configuration.
    pub fn start() -> Self {
        let mut set = Self::new();
        set.apply_start();
        set
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` if the panel is visible.
    pub fn is_visible(&self, panel: PanelId) -> bool {
        self.flags[panel.index()]
    }

    /// Returns `true` if the settings overlay is visible.
    pub fn settings_visible(&self) -> bool {
        self.is_visible(PanelId::SettingsPanel)
    }

    /// Iterates over every panel with its visibility.
    pub fn iter(&self) -> impl Iterator<Item = (PanelId, bool)> + '_ {
        PanelId::ALL.iter().map(move |&id| (id, self.is_visible(id)))
    }

    /// Iterates over the visible panels only.
    pub fn visible(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.iter().filter_map(|(id, shown)| shown.then_some(id))
    }

    //--- Configurations ---------------------------------------------------

    pub(crate) fn hide_all(&mut self) {
        self.flags = [false; PanelId::COUNT];
        self.set(PanelId::MainCanvas, true);
    }

    pub(crate) fn apply_start(&mut self) {
        self.set(PanelId::SettingsPanel, false);
        self.set(PanelId::Header, true);
        self.set(PanelId::Title, true);
        self.set(PanelId::PlayButton, true);
        self.set(PanelId::RestartButton, false);
        self.set(PanelId::MenuButtons, true);
        self.set(PanelId::VelocityBoard, false);
    }

    /// Restart button is hidden here too, so a Playing screen reached
    /// straight from GameOver never keeps the restart control.
    pub(crate) fn apply_playing(&mut self) {
        self.set(PanelId::Header, true);
        self.set(PanelId::Title, false);
        self.set(PanelId::PlayButton, false);
        self.set(PanelId::RestartButton, false);
        self.set(PanelId::MenuButtons, false);
        self.set(PanelId::VelocityNote, false);
        self.set(PanelId::VelocityBoard, true);
    }

    pub(crate) fn apply_game_over(&mut self) {
        self.set(PanelId::Header, true);
        self.set(PanelId::Title, false);
        self.set(PanelId::PlayButton, false);
        self.set(PanelId::RestartButton, true);
        self.set(PanelId::MenuButtons, true);
        self.set(PanelId::SettingsPanel, false);
        self.set(PanelId::VelocityNote, true);
    }

    pub(crate) fn set_settings_visible(&mut self, visible: bool) {
        self.set(PanelId::SettingsPanel, visible);
    }

    /// Shows exactly one icon of each on/off pair.
    pub(crate) fn apply_audio_icons(&mut self, sound_off: bool, music_off: bool) {
        self.set(PanelId::SoundOnIcon, !sound_off);
        self.set(PanelId::SoundOffIcon, sound_off);
        self.set(PanelId::MusicOnIcon, !music_off);
        self.set(PanelId::MusicOffIcon, music_off);
    }

    fn set(&mut self, panel: PanelId, visible: bool) {
        self.flags[panel.index()] = visible;
    }
}

impl Default for PanelSet {
    fn default() -> Self {
        Self::start()
    }
}

//=== HudText =============================================================

/// Text shown in the coin and velocity labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HudText {
    pub coins: String,
    pub velocity: String,
}

impl HudText {
    pub(crate) fn set_coins(&mut self, coins: u32) {
        self.coins = coins.to_string();
    }

    /// Writes a speed value floored to a whole number.
    pub(crate) fn set_velocity(&mut self, speed: f32) {
        self.velocity = (speed.floor() as i64).to_string();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
