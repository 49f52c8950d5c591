use futures::StreamExt;

use crate::detail::game::Game;
use crate::detail::utility::Error;
use crate::{Event, Platform, Storage};

// Main function containing all of the game logic
pub async fn run_internal<P: Platform, S: Storage>(
    platform: P,
    storage: Option<S>,
    event_queue: &mut futures::channel::mpsc::Receiver<Event>,
) -> Result<(), Error> {
    let settings = platform.get_settings().await;
    let mut game = Game::new(platform, storage, &settings)?;
    game.init();

    while let Some(e) = event_queue.next().await {
        match e {
            Event::CellEnter(index) => game.on_cell_enter(index),
            Event::CellLeave(index) => game.on_cell_leave(index),
            Event::CellClick(index) => game.on_cell_click(index).await,
            Event::NewGame => game.new_game(),
            Event::SaveGame => game.save_game(),
            Event::LoadGame => game.load_game(),
            Event::Redraw => game.redraw_all(),
        }
    }
    log::info!("closing");

    Ok(())
}
