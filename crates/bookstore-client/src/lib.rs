//! bookstore-client: Rust client for the bookstore collection service
//!
//! A stateless async gateway over the service's JSON/HTTP interface:
//! `/books` for collection operations, `/books/{id}` for single records,
//! `/health` for liveness. Wire documents stay private to this crate and
//! are converted to and from the folio-core domain types.

mod client;
mod error;
mod wire;

pub use client::{BookstoreClient, DEFAULT_BASE_URL};
pub use error::ClientError;
