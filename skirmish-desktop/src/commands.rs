use std::collections::HashMap;

use skirmish_core::Event;

// What a line typed at the prompt asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Click,
    Enter,
    Leave,
    New,
    Save,
    Load,
    Redraw,
    Quit,
}

impl Command {
    fn takes_cell(self) -> bool {
        matches!(self, Command::Click | Command::Enter | Command::Leave)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Event(Event),
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs a cell number")]
    MissingCell(String),
    #[error("'{0}' is not a cell on this board")]
    BadCell(String),
    #[error("unexpected '{0}'")]
    Trailing(String),
}

pub fn command_table() -> HashMap<&'static str, Command> {
    let mut ret = HashMap::new();
    ret.insert("click", Command::Click);
    ret.insert("c", Command::Click);
    ret.insert("select", Command::Click);

    ret.insert("enter", Command::Enter);
    ret.insert("hover", Command::Enter);
    ret.insert("e", Command::Enter);

    ret.insert("leave", Command::Leave);
    ret.insert("l", Command::Leave);

    ret.insert("new", Command::New);
    ret.insert("n", Command::New);
    ret.insert("save", Command::Save);
    ret.insert("s", Command::Save);
    ret.insert("load", Command::Load);
    ret.insert("redraw", Command::Redraw);
    ret.insert("r", Command::Redraw);

    ret.insert("quit", Command::Quit);
    ret.insert("q", Command::Quit);
    ret.insert("exit", Command::Quit);
    ret
}

// Parses one line of input. Blank lines yield Ok(None).
pub fn parse(
    line: &str,
    table: &HashMap<&'static str, Command>,
    board_size: usize,
) -> Result<Option<Input>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let command = *table
        .get(word.to_lowercase().as_str())
        .ok_or_else(|| CommandError::Unknown(word.to_owned()))?;
    let cell = if command.takes_cell() {
        let arg = words
            .next()
            .ok_or_else(|| CommandError::MissingCell(word.to_owned()))?;
        let cell: usize = arg.parse().map_err(|_| CommandError::BadCell(arg.to_owned()))?;
        if cell >= board_size * board_size {
            return Err(CommandError::BadCell(arg.to_owned()));
        }
        cell
    } else {
        0
    };
    if let Some(extra) = words.next() {
        return Err(CommandError::Trailing(extra.to_owned()));
    }
    let input = match command {
        Command::Click => Input::Event(Event::CellClick(cell)),
        Command::Enter => Input::Event(Event::CellEnter(cell)),
        Command::Leave => Input::Event(Event::CellLeave(cell)),
        Command::New => Input::Event(Event::NewGame),
        Command::Save => Input::Event(Event::SaveGame),
        Command::Load => Input::Event(Event::LoadGame),
        Command::Redraw => Input::Event(Event::Redraw),
        Command::Quit => Input::Quit,
    };
    Ok(Some(input))
}
