//! Interactive terminal browser over the enriched catalogs.
//!
//! Split the way the data flows: [`view`] derives the row set (filter +
//! sort) from pure state, [`render`] turns rows into table or card text,
//! and [`session`] owns the stdin loop, search debounce, and shutdown.

pub mod render;
pub mod session;
pub mod view;

pub use render::render as render_view;
pub use session::{run as run_session, SearchDebouncer};
pub use view::{derive_rows, filter_items, Layout, SortColumn, SortDirection, ViewState};
