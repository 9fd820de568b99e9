//! # Valor CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! Errors are rendered as the error panel on stderr and end the process with status 1.
//! A listing with no matches is not an error and exits 0.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprint!("{}", cli::render_error(&e));
        std::process::exit(1);
    }
}
