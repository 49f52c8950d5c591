#![cfg_attr(feature = "strict", deny(warnings))]

mod detail;
pub mod serialization;

use async_trait::async_trait;

pub use detail::character::{Archetype, Character, PositionedCharacter, Side, BASE_HEALTH, MAX_HEALTH};
pub use detail::combat::{damage, Elimination};
pub use detail::constants;
pub use detail::game::Game;
pub use detail::geometry::{self, tile_type, Coord, TileType};
pub use detail::persistence::GameStateService;
pub use detail::policy::{self, EnemyAction};
pub use detail::state::{GameState, Phase, Roster, Theme};
pub use detail::utility::{character_stats, health_level, Error, HealthLevel};
pub use serialization::Settings;

// Trait used for abstracting away the board, its widgets and file access on a particular platform
#[async_trait(?Send)]
pub trait Platform {
    // Type used to represent errors
    type Error: std::string::ToString;

    // Type used to represent files
    type File: std::convert::AsRef<[u8]>;

    // Contents of a file from the user's own directory, which may be stored differently
    // from the global ones
    type UserFile: std::convert::AsRef<[u8]>;

    // Future returned by show_damage. It completes once the damage has been displayed.
    type DamageFuture: std::future::Future<Output = ()>;

    // Number of cells along one side of the board
    fn board_size(&self) -> usize;

    // Draw the empty board with the given theme
    fn draw_ui(&self, theme: Theme);

    // Draw every character on the board, clearing the ones that are gone
    fn redraw_positions(&self, positions: &[&PositionedCharacter]);

    fn select_cell(&self, index: usize, highlight: Highlight);

    fn deselect_cell(&self, index: usize);

    fn show_cell_tooltip(&self, message: &str, index: usize);

    fn hide_cell_tooltip(&self, index: usize);

    fn set_cursor(&self, cursor: Cursor);

    // Display the damage dealt to the character on a cell
    fn show_damage(&self, index: usize, damage: f64) -> Self::DamageFuture;

    fn show_error(&self, message: &str);

    fn show_message(&self, message: &str);

    // Enable or disable input on the board
    fn set_board_enabled(&self, enabled: bool);

    // Retrieve a file from a specified file path
    async fn get_file(&self, path: &str) -> Result<Self::File, Self::Error>;

    // Retrieve a user specific file
    async fn get_user_file(&self, path: &str) -> Result<Self::UserFile, Self::Error>;

    // Retrieves the game settings, preferring the user's own settings file
    async fn get_settings(&self) -> Settings {
        let path = constants::SETTINGS_FILE;
        let user_file = self.get_user_file(path).await.map(detail::SettingsFile::<Self>::User);
        if let Ok(file) = user_file {
            match file.parse() {
                Ok(settings) => return settings,
                Err(e) => log::warn!("ignoring user settings: {}", e),
            }
        }
        let global_file = self
            .get_file(path)
            .await
            .map(detail::SettingsFile::<Self>::Global)
            .map_err(|e| Error::File {
                path: path.to_owned(),
                reason: e.to_string(),
            });
        match global_file.and_then(|file| file.parse()) {
            Ok(settings) => settings,
            Err(e) => {
                log::info!("using default settings: {}", e);
                Settings::default()
            }
        }
    }
}

// A string-keyed store that saved games are written to
pub trait Storage {
    type Error: std::fmt::Display;

    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

// Colour used when selecting a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Highlight {
    Yellow,
    Green,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    Auto,
    Pointer,
    Crosshair,
    NotAllowed,
}

// Type used to represent user input events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    CellEnter(usize),
    CellLeave(usize),
    CellClick(usize),
    NewGame,
    SaveGame,
    LoadGame,
    Redraw,
}

// Entry point for starting game logic
pub async fn run<P: Platform, S: Storage>(
    platform: P,
    storage: Option<S>,
    mut event_queue: futures::channel::mpsc::Receiver<Event>,
) {
    if let Err(e) = detail::run_internal(platform, storage, &mut event_queue).await {
        log::error!("{}", e);
    }
}
