//! TUI views

mod form_view;
mod shelf;

pub use form_view::{FormView, FIELD_LABELS};
pub use shelf::ShelfView;
