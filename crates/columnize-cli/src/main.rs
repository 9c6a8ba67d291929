//! Binary entry point.
//!
//! Exit codes: `0` clean, `1` fatal error, `2` completed with
//! row-shape warnings.

mod cli;
mod stdin;

use std::process;

fn main() {
    match cli::run() {
        Ok(status) => process::exit(status.code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
