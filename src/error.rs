use std::env::JoinPathsError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for the launcher. Every variant is fatal:
/// anything that goes wrong before the engine hand-off aborts the
/// run, and nothing here is retried.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The launcher could not determine its own on-disk location.
    #[error("cannot resolve launcher location: {0}")]
    ScriptDir(#[source] io::Error),

    /// The launcher's directory could not be entered.
    #[error("cannot enter story directory '{}': {source}", .path.display())]
    WorkDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The augmented module search path could not be joined.
    #[error("cannot build module search path: {0}")]
    ModulePath(#[from] JoinPathsError),

    /// The engine entry point is missing or not executable.
    #[error("cannot run engine '{}': {source}", .bin.display())]
    Engine {
        bin: PathBuf,
        #[source]
        source: io::Error,
    },
}
