use crate::detail::character::{Character, Side};
use crate::detail::state::GameState;

// Share of the attack that always gets through, whatever the defence
const MIN_DAMAGE_FRACTION: f64 = 0.1;

pub fn damage(attack: f64, defence: f64) -> f64 {
    (attack - defence).max(attack * MIN_DAMAGE_FRACTION)
}

// Damage `attacker` would deal to `defender`
pub fn strike(attacker: &Character, defender: &Character) -> f64 {
    damage(attacker.attack, defender.defence)
}

// Damage dealt as a share of the defender's remaining health
pub fn relative_damage(attacker: &Character, defender: &Character) -> f64 {
    strike(attacker, defender) / defender.health
}

// A side that has just lost its last character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Elimination {
    Enemies,
    Players,
}

// Removes the character at `position` if it has died and reports whether its
// roster is now empty
pub fn resolve_death(state: &mut GameState, position: usize) -> Option<Elimination> {
    let dead = state.character_at(position)?.character.is_dead();
    if !dead {
        return None;
    }
    let removed = state.remove_at(position)?;
    log::debug!(
        "{} at {} died",
        removed.character.archetype().name(),
        position
    );
    match removed.side() {
        Side::Enemy if state.enemy_positions.is_empty() => Some(Elimination::Enemies),
        Side::Player if state.player_positions.is_empty() => Some(Elimination::Players),
        _ => None,
    }
}
