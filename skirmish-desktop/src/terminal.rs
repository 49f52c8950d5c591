use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use async_trait::async_trait;
use ndarray::Array2;
use skirmish_core::*;

// Platform that prints the board to stdout as text
pub struct TextBoard {
    board_size: usize,
    assets: PathBuf,
    user_dir: Option<PathBuf>,
    theme: Cell<Theme>,
    highlights: RefCell<Array2<Option<Highlight>>>,
    enabled: Cell<bool>,
}

impl TextBoard {
    pub fn new(board_size: usize, assets: PathBuf, user_dir: Option<PathBuf>) -> Self {
        Self {
            board_size,
            assets,
            user_dir,
            theme: Cell::new(Theme::Prairie),
            highlights: RefCell::new(Array2::from_elem((board_size, board_size), None)),
            enabled: Cell::new(true),
        }
    }

    fn coord(&self, index: usize) -> (usize, usize) {
        (index / self.board_size, index % self.board_size)
    }
}

fn ground_glyph(theme: Theme) -> char {
    match theme {
        Theme::Prairie => '.',
        Theme::Desert => '~',
        Theme::Arctic => '*',
        Theme::Mountain => '^',
    }
}

// Board edges are drawn the same in every theme
fn tile_glyph(tile: TileType, theme: Theme) -> char {
    match tile {
        TileType::TopLeft | TileType::TopRight | TileType::BottomLeft | TileType::BottomRight => '+',
        TileType::Top | TileType::Bottom => '-',
        TileType::Left | TileType::Right => '|',
        TileType::Center => ground_glyph(theme),
    }
}

// Players are upper case, enemies lower case
fn character_glyph(character: &Character) -> char {
    match character.archetype() {
        Archetype::Swordsman => 'S',
        Archetype::Bowman => 'B',
        Archetype::Magician => 'M',
        Archetype::Undead => 'u',
        Archetype::Vampire => 'v',
        Archetype::Daemon => 'd',
    }
}

fn framed(glyph: char, highlight: Option<Highlight>) -> String {
    match highlight {
        Some(Highlight::Yellow) => format!("[{}]", glyph),
        Some(Highlight::Green) => format!("({})", glyph),
        Some(Highlight::Red) => format!("<{}>", glyph),
        None => format!(" {} ", glyph),
    }
}

// Renders the board and a legend, one string per line
pub fn render(
    board_size: usize,
    theme: Theme,
    positions: &[&PositionedCharacter],
    highlights: &Array2<Option<Highlight>>,
) -> Vec<String> {
    let mut grid = Array2::from_shape_fn((board_size, board_size), |(row, col)| {
        tile_glyph(tile_type(row * board_size + col, board_size), theme)
    });
    for p in positions {
        grid[[p.position / board_size, p.position % board_size]] = character_glyph(&p.character);
    }

    let mut lines = vec![format!("== {} ==", theme.name())];
    for (row, cells) in grid.outer_iter().enumerate() {
        let mut line = format!("{:>4} ", row * board_size);
        for (col, glyph) in cells.iter().enumerate() {
            line.push_str(&framed(*glyph, highlights[[row, col]]));
        }
        lines.push(line);
    }
    for p in positions {
        lines.push(format!(
            "  {} {:>3} {} {} ({})",
            character_glyph(&p.character),
            p.position,
            p.character.archetype().name(),
            character_stats(&p.character),
            health_level(p.character.health).name()
        ));
    }
    lines
}

#[async_trait(?Send)]
impl Platform for TextBoard {
    type Error = std::io::Error;
    type File = Vec<u8>;
    type UserFile = Vec<u8>;
    type DamageFuture = std::future::Ready<()>;

    fn board_size(&self) -> usize {
        self.board_size
    }

    fn draw_ui(&self, theme: Theme) {
        self.theme.set(theme);
        println!("entering the {}", theme.name());
    }

    fn redraw_positions(&self, positions: &[&PositionedCharacter]) {
        let highlights = self.highlights.borrow();
        for line in render(self.board_size, self.theme.get(), positions, &highlights) {
            println!("{}", line);
        }
    }

    fn select_cell(&self, index: usize, highlight: Highlight) {
        let (row, col) = self.coord(index);
        self.highlights.borrow_mut()[[row, col]] = Some(highlight);
        println!("cell {} marked {:?}", index, highlight);
    }

    fn deselect_cell(&self, index: usize) {
        let (row, col) = self.coord(index);
        self.highlights.borrow_mut()[[row, col]] = None;
    }

    fn show_cell_tooltip(&self, message: &str, index: usize) {
        println!("{:>4}: {}", index, message);
    }

    fn hide_cell_tooltip(&self, _index: usize) {}

    fn set_cursor(&self, cursor: Cursor) {
        log::trace!("cursor {:?}", cursor);
    }

    fn show_damage(&self, index: usize, damage: f64) -> Self::DamageFuture {
        println!("cell {} takes {:.0} damage", index, damage);
        std::future::ready(())
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn show_message(&self, message: &str) {
        println!("{}", message);
    }

    fn set_board_enabled(&self, enabled: bool) {
        if self.enabled.replace(enabled) && !enabled {
            println!("the board is locked; type 'new' to play again");
        }
    }

    async fn get_file(&self, path: &str) -> Result<Self::File, Self::Error> {
        std::fs::read(self.assets.join(path))
    }

    async fn get_user_file(&self, path: &str) -> Result<Self::UserFile, Self::Error> {
        match &self.user_dir {
            Some(dir) => std::fs::read(dir.join(path)),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no user directory",
            )),
        }
    }
}
