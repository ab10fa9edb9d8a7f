mod error;
mod launch;
mod paths;

use std::env;
use std::ffi::OsString;

fn main() {
    // Everything after argv[0] belongs to the engine, untouched.
    let extra: Vec<OsString> = env::args_os().skip(1).collect();

    match launch::launch_story(&extra) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("[mudrun] {}", e);
            std::process::exit(1);
        }
    }
}
