use crate::detail::constants::{SAVE_KEY, TEAM_SIZE};

// Serialized format for the settings file. Missing fields take their default values.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    // Seed for the random number generator; games are only reproducible when set
    pub seed: Option<u64>,
    // Key the saved game is stored under
    pub save_key: String,
    // Number of characters on each team at the start of a wave
    pub team_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            save_key: SAVE_KEY.to_owned(),
            team_size: TEAM_SIZE,
        }
    }
}
