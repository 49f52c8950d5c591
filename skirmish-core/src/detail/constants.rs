pub const FIRST_LEVEL: u32 = 1;

// Clearing a wave on this level wins the game
pub const MAX_LEVEL: u32 = 4;

pub const TEAM_SIZE: usize = 3;

// Smallest board whose player and enemy start columns do not overlap
pub const MIN_BOARD_SIZE: usize = 4;

pub const SETTINGS_FILE: &str = "settings.json";
pub const SAVE_KEY: &str = "state";

pub const ENEMY_SELECTED_ERROR: &str = "This is an enemy character";
pub const VICTORY_MESSAGE: &str = "You won!";
pub const DEFEAT_MESSAGE: &str = "You lost!";

// Random wander samples tried before falling back to a full scan of legal moves
pub const WANDER_ATTEMPTS: usize = 64;

// Columns the player team starts in
pub const PLAYER_COLUMNS: [usize; 2] = [0, 1];

// Columns the enemy team starts in
pub fn enemy_columns(board_size: usize) -> [usize; 2] {
    [board_size - 1, board_size - 2]
}
