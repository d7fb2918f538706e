//! Table controller and view composition
//!
//! `TableState` holds what the user changed (sort column, filter text,
//! page, selection). `TableView` applies it to a collection.

mod state;
mod view;

pub use state::TableState;
pub use view::TableView;
