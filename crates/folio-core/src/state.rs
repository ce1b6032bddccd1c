//! Client-side catalog state.
//!
//! [`CatalogState`] is the authoritative local cache of server state: the
//! full collection, the active category filter, the search term, and the
//! editing reference. It is created empty, populated by a full fetch, and
//! kept eventually consistent with the store by optimistic patching after
//! each successful mutation — append on create, replace-in-place on update,
//! remove on delete.

use std::collections::HashSet;

use crate::domain::Book;
use crate::filter::{visible_books, CategoryFilter};

/// Central client state container.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Full collection as last synchronised with the remote store.
    pub books: Vec<Book>,
    /// Active category filter.
    pub filter: CategoryFilter,
    /// Current search term.
    pub search: String,
    /// Id of the book currently being edited, if any.
    pub editing: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible subset under the current filter and search term.
    pub fn visible(&self) -> Vec<Book> {
        visible_books(&self.books, &self.filter, &self.search)
    }

    /// Look up a book in the full collection by id.
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Replace the whole collection after a full fetch.
    pub fn set_books(&mut self, books: Vec<Book>) {
        tracing::debug!(count = books.len(), "collection replaced");
        self.books = books;
    }

    /// Append a freshly created book.
    pub fn apply_create(&mut self, book: Book) {
        tracing::debug!(id = %book.id, "book created");
        self.books.push(book);
    }

    /// Replace the stored book carrying the same id, if present.
    pub fn apply_update(&mut self, book: Book) {
        if let Some(slot) = self.books.iter_mut().find(|b| b.id == book.id) {
            tracing::debug!(id = %book.id, "book updated");
            *slot = book;
        }
    }

    /// Remove the book with `id`, if present.
    pub fn apply_delete(&mut self, id: &str) {
        tracing::debug!(id = %id, "book deleted");
        self.books.retain(|b| b.id != id);
    }

    /// Total book count.
    pub fn total_books(&self) -> usize {
        self.books.len()
    }

    /// Number of distinct categories present in the collection.
    pub fn distinct_categories(&self) -> usize {
        self.books
            .iter()
            .map(|b| b.category.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, BookDraft, Publisher};

    fn draft(title: &str, category: &str) -> BookDraft {
        BookDraft {
            isbn: "978-0-00-000000-0".to_string(),
            title: title.to_string(),
            year: 2020,
            price: 20.0,
            page: 300,
            category: category.to_string(),
            cover_photo: None,
            author: Author::new("A-1", "Jane", "Doe"),
            publisher: Publisher::new(1, "Acme"),
        }
    }

    #[test]
    fn test_create_appends_once() {
        let mut state = CatalogState::new();
        state.apply_create(Book::from_draft("b1", draft("Dune", "Science Fiction")));
        assert_eq!(state.total_books(), 1);
        assert_eq!(state.books.iter().filter(|b| b.id == "b1").count(), 1);
    }

    #[test]
    fn test_update_replaces_in_place_keeping_id() {
        let mut state = CatalogState::new();
        state.apply_create(Book::from_draft("b1", draft("Dune", "Science Fiction")));
        state.apply_create(Book::from_draft("b2", draft("The Hobbit", "Fantasy")));

        let mut changed = draft("Dune Messiah", "Science Fiction");
        changed.year = 1969;
        state.apply_update(Book::from_draft("b1", changed));

        assert_eq!(state.total_books(), 2);
        assert_eq!(state.books[0].id, "b1");
        assert_eq!(state.books[0].title, "Dune Messiah");
        assert_eq!(state.books[1].title, "The Hobbit");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut state = CatalogState::new();
        state.apply_create(Book::from_draft("b1", draft("Dune", "Science Fiction")));
        state.apply_update(Book::from_draft("missing", draft("Ghost", "Mystery")));
        assert_eq!(state.total_books(), 1);
        assert_eq!(state.books[0].title, "Dune");
    }

    #[test]
    fn test_delete_removes_id() {
        let mut state = CatalogState::new();
        state.apply_create(Book::from_draft("b1", draft("Dune", "Science Fiction")));
        state.apply_create(Book::from_draft("b2", draft("The Hobbit", "Fantasy")));
        state.apply_delete("b1");
        assert_eq!(state.total_books(), 1);
        assert!(state.book("b1").is_none());
    }

    #[test]
    fn test_distinct_categories() {
        let mut state = CatalogState::new();
        state.apply_create(Book::from_draft("b1", draft("Dune", "Science Fiction")));
        state.apply_create(Book::from_draft("b2", draft("Foundation", "Science Fiction")));
        state.apply_create(Book::from_draft("b3", draft("The Hobbit", "Fantasy")));
        assert_eq!(state.total_books(), 3);
        assert_eq!(state.distinct_categories(), 2);
    }
}
