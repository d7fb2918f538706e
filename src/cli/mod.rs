//! CLI module for roster
//!
//! Provides command-line interface for:
//! - query: print one page of a sorted, filtered table
//! - apply: run add/update/remove requests against loaded records

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, OrderArg};
pub use commands::{
    apply, apply_request, load_config, query, run, run_command, run_query, MutationRequest,
    QueryOptions,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_records, read_requests, write_error, write_response};
