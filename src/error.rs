use std::io;
use std::path::PathBuf;

use crossterm::event::KeyCode;
use thiserror::Error;

/// Errors surfaced by the terminal shell.
///
/// The game core never fails; everything here belongs to the host.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// A key press that has no meaning for the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("key {0:?} is not bound to a game input")]
pub struct UnmappedKey(pub KeyCode);
