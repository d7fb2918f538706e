//! Record store for roster
//!
//! The single authoritative collection a table view queries. Mutations go
//! through `add`, `update` and `remove`; callers rebuild their view after
//! a change (or react to it through `subscribe`).

mod errors;
mod store;

pub use errors::{StoreError, StoreResult};
pub use store::{RecordStore, StoreChange};
