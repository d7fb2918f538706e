//! CLI argument definitions using clap
//!
//! Commands:
//! - roster query --input <records.json> [--filter ..] [--order-by ..] [--order asc|desc]
//!   [--page N] [--page-size 5|10|25] [--config <path>]
//! - roster apply --input <records.json> [--config <path>]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::query::{PageSize, SortDirection};

/// roster - sort, filter and page record tables
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of the sorted, filtered table
    Query {
        /// JSON array of records
        #[arg(long)]
        input: PathBuf,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Case-insensitive substring matched against the name field
        #[arg(long, default_value = "")]
        filter: String,

        /// Sort field (defaults to the configured field)
        #[arg(long)]
        order_by: Option<String>,

        /// Sort direction (defaults to the configured direction)
        #[arg(long, value_enum)]
        order: Option<OrderArg>,

        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: usize,

        /// Rows per page: 5, 10 or 25
        #[arg(long, value_parser = parse_page_size)]
        page_size: Option<PageSize>,
    },

    /// Apply add/update/remove requests (JSON lines on stdin) and print the result
    Apply {
        /// JSON array of records
        #[arg(long)]
        input: PathBuf,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Sort direction argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortDirection {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortDirection::Asc,
            OrderArg::Desc => SortDirection::Desc,
        }
    }
}

fn parse_page_size(s: &str) -> Result<PageSize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    PageSize::try_from(n).map_err(|e| e.to_string())
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
