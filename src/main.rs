//! roster CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, and on failure prints an
//! error response and exits non-zero. All logic lives in `cli`.

use roster::cli;
use roster::observability::{log_event_with_fields, Event};

fn main() {
    if let Err(e) = cli::run() {
        log_event_with_fields(
            Event::CommandFailed,
            &[("code", e.code_str()), ("message", e.message())],
        );
        let _ = cli::write_error(e.code_str(), e.message());
        std::process::exit(1);
    }
}
