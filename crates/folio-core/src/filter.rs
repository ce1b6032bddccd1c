//! Visible-subset derivation for the catalog.
//!
//! Derives the books shown in the grid from the full collection by applying
//! the active category filter and the search term.
//!
//! # Algorithm
//!
//! 1. If the filter is a specific category, retain only books whose category
//!    equals it.
//! 2. If the trimmed, lower-cased search term is non-empty, retain only books
//!    where the lower-cased title, "First Last" author name, publisher name,
//!    or isbn contains the term as a substring.
//!
//! Insertion order of the source collection is preserved; no sorting is
//! applied. Inputs are never mutated and the derivation is idempotent.

use crate::domain::Book;

/// The active category filter: everything, or a single category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Whether a book with this category passes the filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => wanted == category,
        }
    }
}

/// Derive the visible subset of `books` under `filter` and `term`.
pub fn visible_books(books: &[Book], filter: &CategoryFilter, term: &str) -> Vec<Book> {
    let term = term.trim().to_lowercase();

    let visible: Vec<Book> = books
        .iter()
        .filter(|book| {
            if !filter.matches(&book.category) {
                return false;
            }
            if term.is_empty() {
                return true;
            }
            let author_name = book.author.display_name().to_lowercase();
            book.title.to_lowercase().contains(&term)
                || author_name.contains(&term)
                || book.publisher.name.to_lowercase().contains(&term)
                || book.isbn.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    tracing::debug!(
        total = books.len(),
        visible = visible.len(),
        "filter applied"
    );

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, Publisher};

    fn book(id: &str, title: &str, category: &str, author: (&str, &str), publisher: &str) -> Book {
        Book {
            id: id.to_string(),
            isbn: format!("isbn-{id}"),
            title: title.to_string(),
            year: 2000,
            price: 10.0,
            page: 100,
            category: category.to_string(),
            cover_photo: None,
            author: Author::new("A-1", author.0, author.1),
            publisher: Publisher::new(1, publisher),
        }
    }

    fn sample() -> Vec<Book> {
        vec![
            book("1", "Dune", "Science Fiction", ("Frank", "Herbert"), "Ace"),
            book("2", "The Hobbit", "Fantasy", ("J.R.R.", "Tolkien"), "Allen & Unwin"),
            book("3", "Clean Code", "IT", ("Robert", "Martin"), "Prentice Hall"),
        ]
    }

    #[test]
    fn test_identity_filter() {
        let books = sample();
        let visible = visible_books(&books, &CategoryFilter::All, "");
        assert_eq!(visible, books);
    }

    #[test]
    fn test_category_filter() {
        let books = sample();
        let filter = CategoryFilter::Category("Fantasy".to_string());
        let visible = visible_books(&books, &filter, "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "The Hobbit");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let books = sample();
        let upper = visible_books(&books, &CategoryFilter::All, "ABC");
        let lower = visible_books(&books, &CategoryFilter::All, "abc");
        assert_eq!(upper, lower);

        let visible = visible_books(&books, &CategoryFilter::All, "HERBERT");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_search_matches_author_full_name() {
        let books = sample();
        let visible = visible_books(&books, &CategoryFilter::All, "frank herbert");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Dune");
    }

    #[test]
    fn test_search_matches_publisher_and_isbn() {
        let books = sample();
        let by_publisher = visible_books(&books, &CategoryFilter::All, "prentice");
        assert_eq!(by_publisher.len(), 1);
        assert_eq!(by_publisher[0].title, "Clean Code");

        let by_isbn = visible_books(&books, &CategoryFilter::All, "isbn-2");
        assert_eq!(by_isbn.len(), 1);
        assert_eq!(by_isbn[0].title, "The Hobbit");
    }

    #[test]
    fn test_term_is_trimmed() {
        let books = sample();
        let visible = visible_books(&books, &CategoryFilter::All, "  dune  ");
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_filter_and_search_combine() {
        let books = sample();
        let filter = CategoryFilter::Category("Fantasy".to_string());
        // "herbert" matches only a Science Fiction book, so nothing survives.
        let visible = visible_books(&books, &filter, "herbert");
        assert!(visible.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let books = sample();
        let visible = visible_books(&books, &CategoryFilter::All, "o");
        let ids: Vec<&str> = visible.iter().map(|b| b.id.as_str()).collect();
        // "Hobbit" and "Clean Code" both contain "o"; source order kept.
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let books = sample();
        let before = books.clone();
        let _ = visible_books(&books, &CategoryFilter::Category("IT".into()), "clean");
        assert_eq!(books, before);
    }
}
