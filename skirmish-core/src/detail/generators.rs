use std::collections::HashSet;

use rand::Rng;

use crate::detail::character::{Archetype, Character, PositionedCharacter};
use crate::detail::state::Roster;

// Draws `count` distinct cells whose columns come from `columns`. Duplicate
// draws are discarded, so `count` must not exceed the number of such cells.
pub fn random_placements<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    columns: &[usize],
    board_size: usize,
) -> Vec<usize> {
    debug_assert!(
        count <= columns.len() * board_size,
        "not enough cells for {} characters",
        count
    );
    let mut seen = HashSet::new();
    let mut ret = Vec::with_capacity(count);
    while ret.len() < count {
        let row = rng.gen_range(0..board_size);
        let col = columns[rng.gen_range(0..columns.len())];
        let index = row * board_size + col;
        if seen.insert(index) {
            ret.push(index);
        }
    }
    ret
}

// A character of a random allowed archetype at a random level in 1..=max_level
pub fn produce_character<R: Rng + ?Sized>(
    rng: &mut R,
    allowed: &[Archetype],
    max_level: u32,
) -> Character {
    let level = rng.gen_range(1..=max_level.max(1));
    let archetype = allowed[rng.gen_range(0..allowed.len())];
    Character::new(archetype, level)
}

// Produces `count` characters and places them on the first `count` positions
pub fn build_team<R: Rng + ?Sized>(
    rng: &mut R,
    allowed: &[Archetype],
    max_level: u32,
    count: usize,
    positions: &[usize],
) -> Roster {
    positions
        .iter()
        .take(count)
        .map(|&position| PositionedCharacter::new(produce_character(rng, allowed, max_level), position))
        .collect()
}
