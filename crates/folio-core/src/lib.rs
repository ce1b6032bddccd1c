//! folio-core: headless core library for the folio book catalog client
//!
//! This library provides pure Rust implementations of:
//! - The book domain model shared with the remote store
//! - Client-side catalog state and optimistic patching
//! - Category filter and search derivation
//! - View-model projection for rendering adapters
//! - Create/edit form marshalling and command dispatch
//!
//! No I/O lives here. The bookstore gateway and the terminal adapter build
//! on top of these types.

pub mod command;
pub mod domain;
pub mod filter;
pub mod form;
pub mod state;
pub mod view;

// Re-export main types for convenience
pub use command::{Command, DispatchError, Effect, Session};
pub use domain::{Author, Book, BookDraft, Publisher};
pub use filter::{visible_books, CategoryFilter};
pub use form::{BookForm, FormError, FormMode};
pub use state::CatalogState;
pub use view::{BookCard, CatalogStats, CatalogView, CoverArt};
