use crate::detail::state::GameState;
use crate::detail::utility::Error;
use crate::Storage;

// Saves and restores the game state as JSON under a single key
pub struct GameStateService<S: Storage> {
    storage: Option<S>,
    key: String,
}

impl<S: Storage> GameStateService<S> {
    pub fn new(storage: Option<S>, key: &str) -> Self {
        Self {
            storage,
            key: key.to_owned(),
        }
    }

    pub fn storage(&self) -> Option<&S> {
        self.storage.as_ref()
    }

    pub fn save(&mut self, state: &GameState) -> Result<(), Error> {
        let storage = self.storage.as_mut().ok_or(Error::MissingStorage)?;
        let json = serde_json::to_string(state)?;
        storage
            .set_item(&self.key, &json)
            .map_err(|e| Error::Storage(e.to_string()))?;
        log::debug!("saved game under '{}'", self.key);
        Ok(())
    }

    // Ok(None) when nothing has been saved yet
    pub fn load(&self) -> Result<Option<GameState>, Error> {
        let storage = self.storage.as_ref().ok_or(Error::MissingStorage)?;
        match storage.get_item(&self.key) {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
