//! Story launch pipeline

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::error::LaunchError;
use crate::paths;

use super::command::{engine_args, format_launch_cmd, prepended_module_path};

/// Environment variable the engine consults when resolving loadable
/// story and library modules.
pub const MODULE_PATH_VAR: &str = "TALE_MODULE_PATH";

/// Launch the story in networked multi-user mode.
///
/// Anchors the working directory at the launcher's own location,
/// splices the repository root onto the engine's module search path
/// when running from a source checkout, and hands the process over to
/// the engine. On Unix the hand-off is a true process replacement and
/// this function only returns on failure; elsewhere the engine runs
/// as a waited child and its exit code is returned for the caller to
/// propagate.
pub fn launch_story(extra: &[OsString]) -> Result<i32, LaunchError> {
    // Anchor every relative path at the story directory, wherever the
    // caller invoked us from.
    let script_dir = paths::script_dir()?;
    env::set_current_dir(&script_dir).map_err(|source| LaunchError::WorkDir {
        path: script_dir.clone(),
        source,
    })?;

    let source_present = paths::engine_source_present(&script_dir);
    let engine_bin = paths::resolve_engine_bin(&script_dir, source_present);

    let mut cmd = Command::new(&engine_bin);
    cmd.args(engine_args(extra));

    // The augmented search path rides on the child command only; the
    // launcher's own environment stays untouched. Without the marker
    // the variable passes through exactly as inherited.
    if source_present {
        let module_path = prepended_module_path(env::var_os(MODULE_PATH_VAR).as_deref())?;
        cmd.env(MODULE_PATH_VAR, module_path);
    }

    println!("{}", format_launch_cmd(&cmd));

    hand_off(cmd, engine_bin)
}

#[cfg(unix)]
fn hand_off(mut cmd: Command, engine_bin: PathBuf) -> Result<i32, LaunchError> {
    use std::os::unix::process::CommandExt;

    // exec only returns on failure.
    let source = cmd.exec();
    Err(LaunchError::Engine {
        bin: engine_bin,
        source,
    })
}

#[cfg(not(unix))]
fn hand_off(mut cmd: Command, engine_bin: PathBuf) -> Result<i32, LaunchError> {
    let status = cmd.status().map_err(|source| LaunchError::Engine {
        bin: engine_bin,
        source,
    })?;
    Ok(status.code().unwrap_or(1))
}
