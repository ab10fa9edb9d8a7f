// Pure command building functions (no I/O)

use std::env;
use std::env::JoinPathsError;
use std::ffi::{OsStr, OsString};
use std::iter;
use std::path::PathBuf;
use std::process::Command;

/// Mode selector handed to the engine: networked multi-user game.
const MODE_ARGS: [&str; 2] = ["--mode", "mud"];

/// Game directory handed to the engine. The launcher has already
/// entered the story directory, so the current directory is it.
const GAME_ARGS: [&str; 2] = ["--game", "."];

/// Entry spliced onto the module search path when the engine is a
/// sibling source tree: the repository root two levels up.
pub const SOURCE_TREE_ENTRY: &str = "../..";

/// Assemble the full engine argument list: the two fixed flag pairs,
/// then every caller-supplied argument verbatim and in order.
pub fn engine_args(extra: &[OsString]) -> Vec<OsString> {
    let mut args: Vec<OsString> = MODE_ARGS
        .into_iter()
        .chain(GAME_ARGS)
        .map(OsString::from)
        .collect();
    args.extend(extra.iter().cloned());
    args
}

/// Compute the module search path value with the source-tree entry
/// prepended.
///
/// An unset or empty prior value yields the entry alone; otherwise
/// every prior entry is kept, in order, behind it.
pub fn prepended_module_path(prior: Option<&OsStr>) -> Result<OsString, JoinPathsError> {
    match prior {
        Some(value) if !value.is_empty() => {
            let entries =
                iter::once(PathBuf::from(SOURCE_TREE_ENTRY)).chain(env::split_paths(value));
            env::join_paths(entries)
        }
        _ => Ok(OsString::from(SOURCE_TREE_ENTRY)),
    }
}

/// Format the hand-off command for operator output (pure string
/// building). Caller is responsible for printing.
pub fn format_launch_cmd(cmd: &Command) -> String {
    let mut output = format!("[mudrun] launching \"{}\"", cmd.get_program().display());
    for arg in cmd.get_args() {
        output.push_str(&format!(" \"{}\"", arg.to_string_lossy()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    // ── engine_args ──

    #[test]
    fn no_extra_args_yields_fixed_flags_only() {
        let args = engine_args(&[]);
        assert_eq!(args, os(&["--mode", "mud", "--game", "."]));
    }

    #[test]
    fn extra_args_follow_fixed_flags_in_order() {
        let args = engine_args(&os(&["--port", "8888"]));
        assert_eq!(args, os(&["--mode", "mud", "--game", ".", "--port", "8888"]));
    }

    #[test]
    fn extra_args_are_not_deduplicated_or_reordered() {
        let extra = os(&["--game", "z", "--game", "z"]);
        let args = engine_args(&extra);
        assert_eq!(args.len(), 4 + extra.len());
        assert_eq!(&args[4..], &extra[..]);
    }

    // ── prepended_module_path ──

    #[test]
    fn unset_prior_value_becomes_source_entry() {
        let value = prepended_module_path(None).unwrap();
        assert_eq!(value, OsString::from(SOURCE_TREE_ENTRY));
    }

    #[test]
    fn empty_prior_value_becomes_source_entry() {
        let value = prepended_module_path(Some(OsStr::new(""))).unwrap();
        assert_eq!(value, OsString::from(SOURCE_TREE_ENTRY));
    }

    #[test]
    fn prior_value_is_kept_behind_source_entry() {
        let value = prepended_module_path(Some(OsStr::new("/opt/libs"))).unwrap();
        let expected =
            env::join_paths([PathBuf::from(SOURCE_TREE_ENTRY), PathBuf::from("/opt/libs")])
                .unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn prior_entry_order_is_preserved() {
        let prior = env::join_paths([
            PathBuf::from("/opt/libs"),
            PathBuf::from("/usr/share/tale"),
        ])
        .unwrap();

        let value = prepended_module_path(Some(&prior)).unwrap();
        let entries: Vec<PathBuf> = env::split_paths(&value).collect();
        assert_eq!(
            entries,
            [
                PathBuf::from(SOURCE_TREE_ENTRY),
                PathBuf::from("/opt/libs"),
                PathBuf::from("/usr/share/tale"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn unix_value_is_colon_joined() {
        let value = prepended_module_path(Some(OsStr::new("/opt/libs"))).unwrap();
        assert_eq!(value, OsString::from("../..:/opt/libs"));
    }

    // ── format_launch_cmd ──

    #[test]
    fn format_contains_program_name_in_quotes() {
        let cmd = Command::new("tale");
        let output = format_launch_cmd(&cmd);
        assert!(output.contains("\"tale\""));
    }

    #[test]
    fn format_quotes_every_arg_in_order() {
        let mut cmd = Command::new("tale");
        cmd.args(["--mode", "mud", "--game", "."]);
        let output = format_launch_cmd(&cmd);
        assert!(output.ends_with("\"--mode\" \"mud\" \"--game\" \".\""));
    }

    #[test]
    fn format_carries_output_prefix() {
        let cmd = Command::new("tale");
        let output = format_launch_cmd(&cmd);
        assert!(output.starts_with("[mudrun] "));
    }
}
