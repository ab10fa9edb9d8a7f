use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::LaunchError;

/// Engine executable name. Resolved through PATH unless a built
/// binary is found in a sibling source checkout.
pub const ENGINE_BIN: &str = "tale";

/// Manifest marking an engine source checkout. Stories live two
/// levels below the repository root, so this is probed relative to
/// the launcher's own directory.
pub const ENGINE_SOURCE_MARKER: &str = "../../tale/Cargo.toml";

/// Directory containing the running launcher binary.
pub fn script_dir() -> Result<PathBuf, LaunchError> {
    let exe = env::current_exe().map_err(LaunchError::ScriptDir)?;
    match exe.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
        _ => Err(LaunchError::ScriptDir(io::Error::new(
            io::ErrorKind::NotFound,
            "executable path has no parent directory",
        ))),
    }
}

/// True when the engine is present as a sibling source tree rather
/// than an installed package. Absence is not an error.
pub fn engine_source_present(script_dir: &Path) -> bool {
    script_dir.join(ENGINE_SOURCE_MARKER).is_file()
}

/// Pick the engine binary to invoke.
///
/// A source checkout may carry a built engine under its target
/// directory; prefer that over whatever PATH resolves, release build
/// first. Resolution never fails on its own: a missing entry point
/// surfaces when the launch is attempted.
pub fn resolve_engine_bin(script_dir: &Path, source_present: bool) -> PathBuf {
    if source_present {
        let target_candidates = [
            script_dir.join("../../target/release").join(ENGINE_BIN),
            script_dir.join("../../target/debug").join(ENGINE_BIN),
        ];

        for candidate in target_candidates {
            if candidate.is_file() {
                return candidate;
            }
        }
    }

    PathBuf::from(ENGINE_BIN)
}
