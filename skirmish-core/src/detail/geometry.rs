use std::ops;

// Row/column position of a cell. Signed so that offsets and off-board
// intermediate positions can be represented before clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn abs(self) -> Self {
        Self {
            row: self.row.abs(),
            col: self.col.abs(),
        }
    }
}

impl ops::Add for Coord {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            row: self.row + other.row,
            col: self.col + other.col,
        }
    }
}

impl ops::Sub for Coord {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            row: self.row - other.row,
            col: self.col - other.col,
        }
    }
}

impl ops::Mul<i32> for Coord {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Self {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

pub const NORTH: Coord = Coord::new(-1, 0);
pub const NORTH_EAST: Coord = Coord::new(-1, 1);
pub const EAST: Coord = Coord::new(0, 1);
pub const SOUTH_EAST: Coord = Coord::new(1, 1);
pub const SOUTH: Coord = Coord::new(1, 0);
pub const SOUTH_WEST: Coord = Coord::new(1, -1);
pub const WEST: Coord = Coord::new(0, -1);
pub const NORTH_WEST: Coord = Coord::new(-1, -1);

// Compass directions, clockwise from north
pub const DIRECTIONS: [Coord; 8] = [
    NORTH, NORTH_EAST, EAST, SOUTH_EAST, SOUTH, SOUTH_WEST, WEST, NORTH_WEST,
];

pub fn index_to_coord(index: usize, board_size: usize) -> Coord {
    Coord {
        row: (index / board_size) as i32,
        col: (index % board_size) as i32,
    }
}

pub fn coord_to_index(coord: Coord, board_size: usize) -> usize {
    coord.row as usize * board_size + coord.col as usize
}

// Pulls a coordinate back onto the board
pub fn clamp_to_board(coord: Coord, board_size: usize) -> Coord {
    let last = board_size as i32 - 1;
    Coord {
        row: coord.row.clamp(0, last),
        col: coord.col.clamp(0, last),
    }
}

fn delta(origin: usize, target: usize, board_size: usize) -> Coord {
    (index_to_coord(target, board_size) - index_to_coord(origin, board_size)).abs()
}

// Moves follow a rank, file or diagonal and are at most `radius` cells long.
// `is_occupied` reports whether a cell already holds a character.
pub fn within_move_range<F: Fn(usize) -> bool>(
    origin: usize,
    target: usize,
    radius: u32,
    board_size: usize,
    is_occupied: F,
) -> bool {
    if origin == target || is_occupied(target) {
        return false;
    }
    let d = delta(origin, target, board_size);
    let radius = radius as i32;
    d.row <= radius && d.col <= radius && (d.row == 0 || d.col == 0 || d.row == d.col)
}

// Attacks reach any cell of the square neighbourhood except the attacker's own
pub fn within_attack_range(origin: usize, target: usize, radius: u32, board_size: usize) -> bool {
    if origin == target {
        return false;
    }
    let d = delta(origin, target, board_size);
    let radius = radius as i32;
    d.row <= radius && d.col <= radius
}

// Every cell of the board square centred on `origin` with the given radius
pub fn neighbourhood(origin: usize, radius: u32, board_size: usize) -> impl Iterator<Item = usize> {
    let centre = index_to_coord(origin, board_size);
    let radius = radius as i32;
    let top_left = clamp_to_board(centre - Coord::new(radius, radius), board_size);
    let bottom_right = clamp_to_board(centre + Coord::new(radius, radius), board_size);
    (top_left.row..=bottom_right.row).flat_map(move |row| {
        (top_left.col..=bottom_right.col).map(move |col| coord_to_index(Coord { row, col }, board_size))
    })
}

// Position of a cell relative to the board edges, used by renderers to pick border art
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileType {
    TopLeft,
    TopRight,
    Top,
    BottomLeft,
    BottomRight,
    Bottom,
    Left,
    Right,
    Center,
}

impl TileType {
    pub fn name(self) -> &'static str {
        match self {
            TileType::TopLeft => "top-left",
            TileType::TopRight => "top-right",
            TileType::Top => "top",
            TileType::BottomLeft => "bottom-left",
            TileType::BottomRight => "bottom-right",
            TileType::Bottom => "bottom",
            TileType::Left => "left",
            TileType::Right => "right",
            TileType::Center => "center",
        }
    }
}

pub fn tile_type(index: usize, board_size: usize) -> TileType {
    let Coord { row, col } = index_to_coord(index, board_size);
    let last = board_size as i32 - 1;
    match (row, col) {
        (0, 0) => TileType::TopLeft,
        (0, c) if c == last => TileType::TopRight,
        (0, _) => TileType::Top,
        (r, 0) if r == last => TileType::BottomLeft,
        (r, c) if r == last && c == last => TileType::BottomRight,
        (r, _) if r == last => TileType::Bottom,
        (_, 0) => TileType::Left,
        (_, c) if c == last => TileType::Right,
        _ => TileType::Center,
    }
}
