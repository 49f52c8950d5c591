use serde::{Deserialize, Serialize};

use crate::detail::geometry;

pub const BASE_HEALTH: f64 = 50.0;
pub const MAX_HEALTH: f64 = 100.0;

// Health restored by each level-up step
const HEALTH_GAIN: f64 = 80.0;

// Which team an archetype fights for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

// Kind of character. The set is closed, so there is no way to build a
// character without one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Swordsman,
    Bowman,
    Magician,
    Undead,
    Vampire,
    Daemon,
}

// Level one stats shared by every character of an archetype
struct Template {
    attack: f64,
    defence: f64,
    movement_radius: u32,
    attack_radius: u32,
}

impl Archetype {
    pub const PLAYER: [Archetype; 3] = [Archetype::Swordsman, Archetype::Bowman, Archetype::Magician];
    pub const ENEMY: [Archetype; 3] = [Archetype::Undead, Archetype::Vampire, Archetype::Daemon];

    fn template(self) -> Template {
        let (attack, defence, movement_radius, attack_radius) = match self {
            Archetype::Swordsman => (40.0, 10.0, 4, 1),
            Archetype::Bowman => (25.0, 25.0, 2, 2),
            Archetype::Magician => (10.0, 40.0, 1, 4),
            Archetype::Undead => (40.0, 10.0, 4, 1),
            Archetype::Vampire => (25.0, 25.0, 2, 2),
            Archetype::Daemon => (10.0, 10.0, 1, 4),
        };
        Template {
            attack,
            defence,
            movement_radius,
            attack_radius,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Archetype::Swordsman | Archetype::Bowman | Archetype::Magician => Side::Player,
            Archetype::Undead | Archetype::Vampire | Archetype::Daemon => Side::Enemy,
        }
    }

    pub fn movement_radius(self) -> u32 {
        self.template().movement_radius
    }

    pub fn attack_radius(self) -> u32 {
        self.template().attack_radius
    }

    pub fn name(self) -> &'static str {
        match self {
            Archetype::Swordsman => "swordsman",
            Archetype::Bowman => "bowman",
            Archetype::Magician => "magician",
            Archetype::Undead => "undead",
            Archetype::Vampire => "vampire",
            Archetype::Daemon => "daemon",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "type")]
    archetype: Archetype,
    pub level: u32,
    pub attack: f64,
    pub defence: f64,
    pub health: f64,
}

// Grows a stat in proportion to the remaining health, never shrinking it
fn grow(stat: f64, health: f64) -> f64 {
    stat.max(stat * (HEALTH_GAIN + health) / 100.0)
}

impl Character {
    // Builds a character at `level`, replaying the level-up step from the level one template
    pub fn new(archetype: Archetype, level: u32) -> Self {
        debug_assert!(level >= 1, "characters start at level 1");
        let template = archetype.template();
        let mut ret = Self {
            archetype,
            level,
            attack: template.attack,
            defence: template.defence,
            health: BASE_HEALTH,
        };
        for _ in 1..level {
            ret.upgrade_stats();
        }
        ret
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn side(&self) -> Side {
        self.archetype.side()
    }

    pub fn movement_radius(&self) -> u32 {
        self.archetype.movement_radius()
    }

    pub fn attack_radius(&self) -> u32 {
        self.archetype.attack_radius()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn take_damage(&mut self, damage: f64) {
        self.health -= damage;
    }

    // One level-up step: stats grow with the current health, then health recovers
    pub fn upgrade_stats(&mut self) {
        self.attack = grow(self.attack, self.health);
        self.defence = grow(self.defence, self.health);
        self.health = MAX_HEALTH.min(self.health + HEALTH_GAIN);
    }

    pub fn level_up(&mut self) {
        self.level += 1;
        self.upgrade_stats();
    }
}

// A character standing on a board cell
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionedCharacter {
    pub character: Character,
    pub position: usize,
}

impl PositionedCharacter {
    pub fn new(character: Character, position: usize) -> Self {
        Self {
            character,
            position,
        }
    }

    pub fn side(&self) -> Side {
        self.character.side()
    }

    pub fn can_attack(&self, target: usize, board_size: usize) -> bool {
        geometry::within_attack_range(
            self.position,
            target,
            self.character.attack_radius(),
            board_size,
        )
    }
}
