//! Decision making for the computer controlled team.
//!
//! Each enemy turn weighs the worst threat the player poses against the best
//! blow the enemy can land, both measured as damage relative to the victim's
//! remaining health, and either attacks, retreats out of reach or wanders.

use rand::Rng;

use crate::detail::character::PositionedCharacter;
use crate::detail::combat;
use crate::detail::constants::WANDER_ATTEMPTS;
use crate::detail::geometry::{self, DIRECTIONS};
use crate::detail::state::GameState;

// One (enemy, player) pair with the relative damage one could do to the other
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pairing {
    pub enemy: usize,
    pub player: usize,
    pub score: f64,
}

// The single action the enemy team takes on its turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyAction {
    Attack { attacker: usize, target: usize },
    Move { from: usize, to: usize },
    // No enemy has anywhere to go and nothing to hit
    Pass,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assessment {
    // Player characters that can hit an enemy, best first
    pub to_avoid: Vec<Pairing>,
    // Player characters an enemy can hit, best first
    pub to_attack: Vec<Pairing>,
}

pub fn assess(state: &GameState, board_size: usize) -> Assessment {
    let mut ret = Assessment::default();
    for enemy in state.enemy_positions.iter() {
        for player in state.player_positions.iter() {
            if player.can_attack(enemy.position, board_size) {
                ret.to_avoid.push(Pairing {
                    enemy: enemy.position,
                    player: player.position,
                    score: combat::relative_damage(&player.character, &enemy.character),
                });
            }
            if enemy.can_attack(player.position, board_size) {
                ret.to_attack.push(Pairing {
                    enemy: enemy.position,
                    player: player.position,
                    score: combat::relative_damage(&enemy.character, &player.character),
                });
            }
        }
    }
    // Stable sorts keep roster order among equal scores
    ret.to_avoid.sort_by(|a, b| b.score.total_cmp(&a.score));
    ret.to_attack.sort_by(|a, b| b.score.total_cmp(&a.score));
    ret
}

pub fn choose_action<R: Rng + ?Sized>(state: &GameState, board_size: usize, rng: &mut R) -> EnemyAction {
    let assessment = assess(state, board_size);
    let attack = |p: &Pairing| EnemyAction::Attack {
        attacker: p.enemy,
        target: p.player,
    };
    match (assessment.to_avoid.first(), assessment.to_attack.first()) {
        (Some(threat), Some(opportunity)) if threat.score > opportunity.score => {
            match retreat(state, threat, board_size, rng) {
                Some(action) => action,
                None => attack(opportunity),
            }
        }
        (_, Some(opportunity)) => attack(opportunity),
        (Some(threat), None) => match retreat(state, threat, board_size, rng) {
            Some(action) => action,
            None => wander(state, board_size, rng),
        },
        (None, None) => wander(state, board_size, rng),
    }
}

fn retreat<R: Rng + ?Sized>(
    state: &GameState,
    threat: &Pairing,
    board_size: usize,
    rng: &mut R,
) -> Option<EnemyAction> {
    let enemy = state.enemy_at(threat.enemy)?;
    let player = state.player_at(threat.player)?;
    let to = search_safe_zone(state, enemy, player, board_size, rng)?;
    Some(EnemyAction::Move {
        from: enemy.position,
        to,
    })
}

// A random cell `enemy` can move to where `player` cannot reach it
pub fn search_safe_zone<R: Rng + ?Sized>(
    state: &GameState,
    enemy: &PositionedCharacter,
    player: &PositionedCharacter,
    board_size: usize,
    rng: &mut R,
) -> Option<usize> {
    let safe_cells: Vec<usize> = state
        .legal_moves(enemy, board_size)
        .into_iter()
        .filter(|&cell| !player.can_attack(cell, board_size))
        .collect();
    pick(&safe_cells, rng).copied()
}

// Moves a random enemy in a random direction. Sampling is bounded; after that
// every legal move of that enemy, then of the whole team, is considered.
pub fn wander<R: Rng + ?Sized>(state: &GameState, board_size: usize, rng: &mut R) -> EnemyAction {
    let Some(enemy) = pick(&state.enemy_positions, rng) else {
        return EnemyAction::Pass;
    };
    let origin = geometry::index_to_coord(enemy.position, board_size);
    let radius = enemy.character.movement_radius().max(1);
    for _ in 0..WANDER_ATTEMPTS {
        let direction = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
        let step = rng.gen_range(1..=radius) as i32;
        let target = geometry::clamp_to_board(origin + direction * step, board_size);
        let to = geometry::coord_to_index(target, board_size);
        if state.can_move(enemy, to, board_size) {
            return EnemyAction::Move {
                from: enemy.position,
                to,
            };
        }
    }
    if let Some(&to) = pick(&state.legal_moves(enemy, board_size), rng) {
        return EnemyAction::Move {
            from: enemy.position,
            to,
        };
    }
    let every_move: Vec<(usize, usize)> = state
        .enemy_positions
        .iter()
        .flat_map(|e| {
            state
                .legal_moves(e, board_size)
                .into_iter()
                .map(move |to| (e.position, to))
        })
        .collect();
    match pick(&every_move, rng) {
        Some(&(from, to)) => EnemyAction::Move { from, to },
        None => EnemyAction::Pass,
    }
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.gen_range(0..items.len()))
    }
}
