//! Crate-level error types.

use std::fmt;

/// Errors produced by the touchcam crate.
///
/// Pointer handling itself never fails; these cover option presets and the
/// viewer window.
#[derive(Debug)]
pub enum TouchCamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An option value the controller cannot work with.
    InvalidOption(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for TouchCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption(msg) => {
                write!(f, "invalid option: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TouchCamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TouchCamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
