use crate::detail::utility::Error;
use crate::serialization::Settings;
use crate::Platform;

// A settings file found either among the user's files or the global ones
pub enum SettingsFile<P: Platform + ?Sized> {
    Global(P::File),
    User(P::UserFile),
}

impl<P: Platform + ?Sized> SettingsFile<P> {
    pub fn parse(&self) -> Result<Settings, Error> {
        let settings: Settings = serde_json::from_slice(self.as_ref()).map_err(Error::Settings)?;
        log::debug!("loaded {} settings", self.origin());
        Ok(settings)
    }

    fn origin(&self) -> &'static str {
        match self {
            Self::Global(_) => "global",
            Self::User(_) => "user",
        }
    }
}

impl<P: Platform + ?Sized> std::convert::AsRef<[u8]> for SettingsFile<P> {
    fn as_ref(&self) -> &[u8] {
        match self {
            Self::Global(file) => file.as_ref(),
            Self::User(file) => file.as_ref(),
        }
    }
}
