//! Crate-level error types.

use std::fmt;

/// Errors produced by the camrig crate.
#[derive(Debug)]
pub enum CamrigError {
    /// A preset id was requested that the library does not know.
    UnknownPreset(String),
    /// A preset id was registered twice.
    DuplicatePreset(String),
    /// A preset id collides with a reserved control word (`none`, `manual`).
    ReservedPresetId(String),
    /// A derived preset or explicit pose would produce non-finite values.
    NonFinite(String),
    /// Options failed validation.
    InvalidOptions(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for CamrigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset(id) => write!(f, "unknown preset: {id}"),
            Self::DuplicatePreset(id) => {
                write!(f, "preset already registered: {id}")
            }
            Self::ReservedPresetId(id) => {
                write!(f, "preset id is reserved: {id}")
            }
            Self::NonFinite(what) => write!(f, "non-finite value in {what}"),
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CamrigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CamrigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
