//! Launch module - story bootstrap and engine hand-off
//!
//! This module provides:
//! - Pure construction of the engine argument list and the augmented
//!   module search path
//! - The bootstrap pipeline (normalize cwd, detect source tree,
//!   augment search path, hand off to the engine)
//!
//! ## Module Structure
//! - `command.rs`: pure functions (no I/O)
//! - `execute.rs`: pipeline orchestration

pub mod command;
pub mod execute;

pub use command::{engine_args, format_launch_cmd, prepended_module_path};
pub use execute::{MODULE_PATH_VAR, launch_story};
