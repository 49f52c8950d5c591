pub mod character;
pub mod combat;
pub mod constants;
pub mod game;
pub mod generators;
pub mod geometry;
pub mod persistence;
pub mod policy;
mod run;
mod settings_file;
pub mod state;
pub mod utility;

pub use run::run_internal;
pub use settings_file::SettingsFile;
