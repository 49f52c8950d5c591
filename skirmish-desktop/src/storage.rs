use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt save file: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
    #[error("{0}")]
    Encode(#[from] rmp_serde::encode::Error),
}

// String store kept in memory and written through to a MessagePack file
pub struct FileStorage {
    path: PathBuf,
    items: HashMap<String, String>,
}

impl FileStorage {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let items = match std::fs::read(path) {
            Ok(bytes) => rmp_serde::decode::from_read_ref(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: path.to_owned(),
            items,
        })
    }
}

impl skirmish_core::Storage for FileStorage {
    type Error = StorageError;

    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.items.insert(key.to_owned(), value.to_owned());
        let bytes = rmp_serde::encode::to_vec(&self.items)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}
