use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::detail::character::{Archetype, PositionedCharacter};
use crate::detail::combat::{self, Elimination};
use crate::detail::constants::*;
use crate::detail::generators;
use crate::detail::persistence::GameStateService;
use crate::detail::policy::{self, EnemyAction};
use crate::detail::state::{GameState, Phase, Theme};
use crate::detail::utility::{self, Error};
use crate::serialization::Settings;
use crate::{Cursor, Highlight, Platform, Storage};

// Owns the game state and drives it from player input and the enemy policy
pub struct Game<P: Platform, S: Storage> {
    pub platform: P,
    service: GameStateService<S>,
    state: GameState,
    rng: ChaCha8Rng,
    board_size: usize,
    team_size: usize,
}

impl<P: Platform, S: Storage> Game<P, S> {
    pub fn new(platform: P, storage: Option<S>, settings: &Settings) -> Result<Self, Error> {
        let board_size = platform.board_size();
        if board_size < MIN_BOARD_SIZE {
            return Err(Error::BoardTooSmall(board_size));
        }
        // Both start columns together hold 2 * board_size cells
        let team_size = settings.team_size.clamp(1, 2 * board_size);
        if team_size != settings.team_size {
            log::warn!(
                "team size {} does not fit the board, using {}",
                settings.team_size,
                team_size
            );
        }
        let rng = match settings.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            platform,
            service: GameStateService::new(storage, &settings.save_key),
            state: GameState::default(),
            rng,
            board_size,
            team_size,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    // Draws the board and resumes the saved game, starting a new one if there is none
    pub fn init(&mut self) {
        self.set_theme(Theme::Prairie);
        self.load_game();
        if self.state.is_empty() {
            self.new_game();
        }
    }

    pub fn new_game(&mut self) {
        self.deselect_all();
        self.set_theme(Theme::Prairie);
        let player_cells =
            generators::random_placements(&mut self.rng, self.team_size, &PLAYER_COLUMNS, self.board_size);
        let enemy_cells = generators::random_placements(
            &mut self.rng,
            self.team_size,
            &enemy_columns(self.board_size),
            self.board_size,
        );
        let players = generators::build_team(
            &mut self.rng,
            &Archetype::PLAYER,
            FIRST_LEVEL,
            self.team_size,
            &player_cells,
        );
        let enemies = generators::build_team(
            &mut self.rng,
            &Archetype::ENEMY,
            FIRST_LEVEL,
            self.team_size,
            &enemy_cells,
        );
        self.state = GameState::new(players, enemies);
        self.platform.set_board_enabled(true);
        self.redraw();
        log::info!("new game on a {0}x{0} board", self.board_size);
    }

    pub fn save_game(&mut self) {
        self.state.selected = None;
        match self.service.save(&self.state) {
            Ok(()) => log::info!("game saved"),
            Err(e) => {
                log::error!("{}", e);
                self.platform.show_error(&e.to_string());
            }
        }
    }

    // Replaces the state with the saved one. On failure the current game carries on.
    pub fn load_game(&mut self) {
        if self.state.selected.is_some() {
            self.deselect_all();
        }
        let loaded = self.service.load().and_then(|loaded| match loaded {
            Some(state) => state.validate(self.board_size).map(|()| Some(state)),
            None => Ok(None),
        });
        match loaded {
            Ok(Some(state)) => {
                self.state = state;
                self.platform.draw_ui(self.state.theme);
                self.platform.set_board_enabled(true);
                self.redraw();
                log::info!("game loaded at level {}", self.state.level);
            }
            Ok(None) => log::debug!("no saved game"),
            Err(e) => {
                log::error!("{}", e);
                self.platform.show_error(&e.to_string());
            }
        }
    }

    pub async fn on_cell_click(&mut self, index: usize) {
        if !self.state.is_players_turn() {
            return;
        }
        if self.state.player_at(index).is_some() {
            if let Some(previous) = self.state.selected {
                self.platform.deselect_cell(previous);
            }
            self.state.selected = Some(index);
            self.platform.select_cell(index, Highlight::Yellow);
            return;
        }
        let Some(selected) = self.state.selected else {
            if self.state.enemy_at(index).is_some() {
                self.platform.show_error(ENEMY_SELECTED_ERROR);
            }
            return;
        };
        if self.state.enemy_at(index).is_some() {
            if self.state.can_attack_from(selected, index, self.board_size) {
                self.player_attack(selected, index).await;
            }
        } else if self.state.can_move_from(selected, index, self.board_size) {
            self.player_move(selected, index).await;
        }
    }

    pub fn on_cell_enter(&mut self, index: usize) {
        if self.state.is_finished() {
            return;
        }
        let selected = self.state.selected;
        if let Some(player) = self.state.player_at(index) {
            self.platform
                .show_cell_tooltip(&utility::character_stats(&player.character), index);
            self.platform.set_cursor(Cursor::Pointer);
        } else if let Some(enemy) = self.state.enemy_at(index) {
            self.platform
                .show_cell_tooltip(&utility::character_stats(&enemy.character), index);
            if let Some(selected) = selected {
                if self.state.can_attack_from(selected, index, self.board_size) {
                    self.platform.set_cursor(Cursor::Crosshair);
                    self.platform.select_cell(index, Highlight::Red);
                } else {
                    self.platform.set_cursor(Cursor::NotAllowed);
                }
            }
        } else if selected.map_or(false, |s| self.state.can_move_from(s, index, self.board_size)) {
            self.platform.set_cursor(Cursor::Pointer);
            self.platform.select_cell(index, Highlight::Green);
        } else {
            self.platform.set_cursor(Cursor::NotAllowed);
        }
    }

    pub fn on_cell_leave(&mut self, index: usize) {
        if self.state.is_finished() {
            return;
        }
        let is_player = self.state.player_at(index).is_some();
        if !is_player {
            self.platform.deselect_cell(index);
        }
        if is_player || self.state.enemy_at(index).is_some() {
            self.platform.hide_cell_tooltip(index);
        }
        self.platform.set_cursor(Cursor::Auto);
    }

    async fn player_move(&mut self, from: usize, to: usize) {
        log::debug!("player moves {} -> {}", from, to);
        self.move_character(from, to);
        self.end_turn().await;
    }

    async fn player_attack(&mut self, attacker: usize, target: usize) {
        let elimination = self.attack(attacker, target).await;
        if self.settle(elimination) {
            self.end_turn().await;
        }
    }

    fn move_character(&mut self, from: usize, to: usize) {
        self.state.move_character(from, to);
        self.deselect_all();
        self.redraw();
    }

    // Deals damage, waits for the platform to show it, then removes the target if it died
    async fn attack(&mut self, attacker: usize, target: usize) -> Option<Elimination> {
        let damage = {
            let attacker = self.state.character_at(attacker)?;
            let defender = self.state.character_at(target)?;
            combat::strike(&attacker.character, &defender.character)
        };
        self.state.character_at_mut(target)?.character.take_damage(damage);
        log::debug!("{} -> {} deals {:.1} damage", attacker, target, damage);
        self.platform.show_damage(target, damage).await;
        combat::resolve_death(&mut self.state, target)
    }

    // Handles the outcome of an attack. Returns true when play passes to the other side.
    fn settle(&mut self, elimination: Option<Elimination>) -> bool {
        match elimination {
            Some(Elimination::Enemies) => {
                self.level_up();
                self.deselect_all();
                false
            }
            Some(Elimination::Players) => {
                self.end_game(DEFEAT_MESSAGE, Phase::Lost);
                self.deselect_all();
                false
            }
            None => {
                self.deselect_all();
                self.redraw();
                true
            }
        }
    }

    // Lets the enemy team take its one action, then hands the turn back
    pub async fn end_turn(&mut self) {
        self.state.phase = Phase::EnemyTurn;
        let action = policy::choose_action(&self.state, self.board_size, &mut self.rng);
        log::debug!("enemy action: {:?}", action);
        match action {
            EnemyAction::Attack { attacker, target } => {
                let elimination = self.attack(attacker, target).await;
                self.settle(elimination);
            }
            EnemyAction::Move { from, to } => self.move_character(from, to),
            EnemyAction::Pass => log::warn!("no enemy can act, skipping the enemy turn"),
        }
        if self.state.phase == Phase::EnemyTurn {
            self.state.phase = Phase::PlayerTurn;
        }
    }

    // Starts the next wave, or wins the game once the last level is cleared
    fn level_up(&mut self) {
        if self.state.level >= MAX_LEVEL {
            self.end_game(VICTORY_MESSAGE, Phase::Won);
            return;
        }
        self.state.level += 1;
        for player in self.state.player_positions.iter_mut() {
            player.character.level_up();
        }
        let player_cells = generators::random_placements(
            &mut self.rng,
            self.state.player_positions.len(),
            &PLAYER_COLUMNS,
            self.board_size,
        );
        for (player, cell) in self.state.player_positions.iter_mut().zip(player_cells) {
            player.position = cell;
        }
        let max_level = self
            .state
            .player_positions
            .iter()
            .map(|p| p.character.level)
            .max()
            .unwrap_or(FIRST_LEVEL);
        let enemy_cells = generators::random_placements(
            &mut self.rng,
            self.team_size,
            &enemy_columns(self.board_size),
            self.board_size,
        );
        self.state.enemy_positions = generators::build_team(
            &mut self.rng,
            &Archetype::ENEMY,
            max_level,
            self.team_size,
            &enemy_cells,
        );
        self.set_theme(self.state.theme.next());
        self.redraw();
        log::info!("wave cleared, now on level {}", self.state.level);
    }

    fn end_game(&mut self, message: &str, phase: Phase) {
        self.state.phase = phase;
        self.platform.show_message(message);
        self.platform.set_board_enabled(false);
        log::info!("game over: {}", message);
    }

    pub fn deselect_all(&mut self) {
        self.state.selected = None;
        for i in 0..self.board_size * self.board_size {
            self.platform.deselect_cell(i);
        }
    }

    pub fn redraw(&self) {
        let positions: Vec<&PositionedCharacter> = self.state.positions().collect();
        self.platform.redraw_positions(&positions);
    }

    // Draws the whole board again, as after the window was exposed
    pub fn redraw_all(&self) {
        self.platform.draw_ui(self.state.theme);
        self.redraw();
    }

    fn set_theme(&mut self, theme: Theme) {
        self.platform.draw_ui(theme);
        self.state.theme = theme;
    }
}
