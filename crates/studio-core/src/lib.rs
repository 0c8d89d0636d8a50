pub mod config;
pub mod customize;
pub mod documents;
pub mod engine;
pub mod error;
pub mod io;
pub mod lifecycle;
pub mod milestone;
pub mod paths;
pub mod project;
pub mod roster;
pub mod scaffold;
pub mod settings;
pub mod types;

pub use error::{Result, StudioError};
