use std::io;

use thiserror::Error;

/// Errors raised while building a maze from outside data.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read maze file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse maze file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid maze: {0}")]
    Invalid(String),

    #[error("unknown direction '{0}'")]
    UnknownDirection(String),
}

impl MazeError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
