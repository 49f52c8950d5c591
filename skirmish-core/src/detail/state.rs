use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::detail::character::{PositionedCharacter, Side, MAX_HEALTH};
use crate::detail::constants::{FIRST_LEVEL, MAX_LEVEL};
use crate::detail::geometry;
use crate::detail::utility::Error;

pub type Roster = Vec<PositionedCharacter>;

// Board art. Each cleared wave advances to the next theme, wrapping around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Prairie,
    Desert,
    Arctic,
    Mountain,
}

impl Theme {
    pub fn next(self) -> Self {
        match self {
            Theme::Prairie => Theme::Desert,
            Theme::Desert => Theme::Arctic,
            Theme::Arctic => Theme::Mountain,
            Theme::Mountain => Theme::Prairie,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Prairie => "prairie",
            Theme::Desert => "desert",
            Theme::Arctic => "arctic",
            Theme::Mountain => "mountain",
        }
    }
}

// Where the turn engine is. Won and Lost are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    PlayerTurn,
    EnemyTurn,
    Won,
    Lost,
}

fn first_level() -> u32 {
    FIRST_LEVEL
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player_positions: Roster,
    pub enemy_positions: Roster,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "first_level")]
    pub level: u32,
    #[serde(skip)]
    pub phase: Phase,
    // Cell of the selected player character
    #[serde(skip)]
    pub selected: Option<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl GameState {
    pub fn new(player_positions: Roster, enemy_positions: Roster) -> Self {
        Self {
            player_positions,
            enemy_positions,
            theme: Theme::Prairie,
            level: FIRST_LEVEL,
            phase: Phase::PlayerTurn,
            selected: None,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = &PositionedCharacter> {
        self.player_positions.iter().chain(self.enemy_positions.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.player_positions.is_empty() && self.enemy_positions.is_empty()
    }

    pub fn is_players_turn(&self) -> bool {
        self.phase == Phase::PlayerTurn
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    pub fn player_at(&self, index: usize) -> Option<&PositionedCharacter> {
        self.player_positions.iter().find(|p| p.position == index)
    }

    pub fn enemy_at(&self, index: usize) -> Option<&PositionedCharacter> {
        self.enemy_positions.iter().find(|p| p.position == index)
    }

    pub fn character_at(&self, index: usize) -> Option<&PositionedCharacter> {
        self.positions().find(|p| p.position == index)
    }

    pub fn character_at_mut(&mut self, index: usize) -> Option<&mut PositionedCharacter> {
        self.player_positions
            .iter_mut()
            .chain(self.enemy_positions.iter_mut())
            .find(|p| p.position == index)
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.character_at(index).is_some()
    }

    pub fn selected_character(&self) -> Option<&PositionedCharacter> {
        self.player_at(self.selected?)
    }

    pub fn can_move(&self, mover: &PositionedCharacter, target: usize, board_size: usize) -> bool {
        geometry::within_move_range(
            mover.position,
            target,
            mover.character.movement_radius(),
            board_size,
            |cell| self.is_occupied(cell),
        )
    }

    pub fn can_move_from(&self, origin: usize, target: usize, board_size: usize) -> bool {
        self.character_at(origin)
            .map_or(false, |mover| self.can_move(mover, target, board_size))
    }

    pub fn can_attack_from(&self, origin: usize, target: usize, board_size: usize) -> bool {
        self.character_at(origin)
            .map_or(false, |attacker| attacker.can_attack(target, board_size))
    }

    // Every legal destination of `mover`, in board order
    pub fn legal_moves(&self, mover: &PositionedCharacter, board_size: usize) -> Vec<usize> {
        geometry::neighbourhood(mover.position, mover.character.movement_radius(), board_size)
            .filter(|&cell| self.can_move(mover, cell, board_size))
            .collect()
    }

    pub fn move_character(&mut self, from: usize, to: usize) {
        if let Some(mover) = self.character_at_mut(from) {
            mover.position = to;
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<PositionedCharacter> {
        if let Some(i) = self.player_positions.iter().position(|p| p.position == index) {
            if self.selected == Some(index) {
                self.selected = None;
            }
            return Some(self.player_positions.remove(i));
        }
        let i = self.enemy_positions.iter().position(|p| p.position == index)?;
        Some(self.enemy_positions.remove(i))
    }

    // Checks the invariants a loaded state has to satisfy on a board of `board_size`
    pub fn validate(&self, board_size: usize) -> Result<(), Error> {
        if !(FIRST_LEVEL..=MAX_LEVEL).contains(&self.level) {
            return Err(Error::InvalidState(format!("level {} out of range", self.level)));
        }
        // A finished game has nothing left to play
        if self.player_positions.is_empty() || self.enemy_positions.is_empty() {
            return Err(Error::InvalidState("a team has no characters".to_owned()));
        }
        let cells = board_size * board_size;
        let mut seen = HashSet::new();
        let rosters = [
            (Side::Player, &self.player_positions),
            (Side::Enemy, &self.enemy_positions),
        ];
        for (side, roster) in rosters {
            for p in roster.iter() {
                if p.position >= cells {
                    return Err(Error::InvalidState(format!(
                        "cell {} is off the board",
                        p.position
                    )));
                }
                if !seen.insert(p.position) {
                    return Err(Error::InvalidState(format!(
                        "cell {} is occupied twice",
                        p.position
                    )));
                }
                if p.side() != side {
                    return Err(Error::InvalidState(format!(
                        "{} is on the wrong team",
                        p.character.archetype().name()
                    )));
                }
                let health = p.character.health;
                if p.character.level < FIRST_LEVEL
                    || p.character.is_dead()
                    || !health.is_finite()
                    || health > MAX_HEALTH
                {
                    return Err(Error::InvalidState(format!(
                        "character at {} cannot play",
                        p.position
                    )));
                }
            }
        }
        Ok(())
    }
}
