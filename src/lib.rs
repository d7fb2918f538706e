//! roster - deterministic filter, sort and pagination for record tables
//!
//! The query engine is pure and stateless. Table state lives with the
//! caller, records live in an owned store, and the CLI is a thin JSON shell
//! over both.

pub mod cli;
pub mod config;
pub mod observability;
pub mod query;
pub mod record;
pub mod store;
pub mod table;
