#![cfg_attr(feature = "strict", deny(warnings))]

mod commands;
mod storage;
mod terminal;

use std::io::BufRead;
use std::path::PathBuf;

use clap::Parser;
use futures::SinkExt;

use commands::Input;
use storage::FileStorage;
use terminal::TextBoard;

#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of cells along each side of the board
    #[arg(short, long, default_value = "8", value_parser = clap::value_parser!(u16).range(4..=32))]
    board_size: u16,

    /// File saved games are written to
    #[arg(short, long, default_value = "skirmish.sav")]
    save_file: PathBuf,

    /// Directory holding the global settings.json
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Directory holding the user's own settings.json
    #[arg(long)]
    user_dir: Option<PathBuf>,
}

// Forwards typed commands to the game until the input ends or the user quits
fn read_commands(board_size: usize, mut sender: futures::channel::mpsc::Sender<skirmish_core::Event>) {
    let table = commands::command_table();
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("unable to read input: {}", e);
                break;
            }
        };
        match commands::parse(&line, &table, board_size) {
            Ok(Some(Input::Event(event))) => {
                if futures::executor::block_on(sender.send(event)).is_err() {
                    break;
                }
            }
            Ok(Some(Input::Quit)) => break,
            Ok(None) => {}
            Err(e) => eprintln!("{}", e),
        }
    }
    sender.close_channel();
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();
    let args = Args::parse();
    let board_size = usize::from(args.board_size);

    let storage = match FileStorage::open(&args.save_file) {
        Ok(storage) => Some(storage),
        Err(e) => {
            log::error!("{}: {}", args.save_file.display(), e);
            None
        }
    };

    let (sender, receiver) = futures::channel::mpsc::channel(16);
    let input = std::thread::spawn(move || read_commands(board_size, sender));

    let platform = TextBoard::new(board_size, args.assets, args.user_dir);
    futures::executor::block_on(skirmish_core::run(platform, storage, receiver));

    if input.join().is_err() {
        log::error!("input thread panicked");
        std::process::exit(1);
    }
}
