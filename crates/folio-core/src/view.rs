//! Pure projection of catalog state into a renderable view model.
//!
//! Rendering adapters consume [`CatalogView`] without touching domain state,
//! so everything here stays testable without a display surface.

use crate::domain::Book;
use crate::state::CatalogState;

/// Cover art for a card: a usable image reference, or a fallback glyph
/// derived from the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverArt {
    Image(String),
    Glyph(&'static str),
}

/// One renderable card in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    /// Id used to address edit/delete actions.
    pub id: String,
    pub cover: CoverArt,
    /// Category badge text.
    pub badge: String,
    pub title: String,
    /// "Author: First Last"
    pub author_line: String,
    /// "Publisher: Name"
    pub publisher_line: String,
    pub year: i32,
    pub pages: u32,
    /// First 10 characters of the isbn, with ellipsis.
    pub isbn_short: String,
    /// Price with currency prefix, two decimals.
    pub price_display: String,
}

impl BookCard {
    fn project(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            cover: cover_art(book),
            badge: book.category.clone(),
            title: book.title.clone(),
            author_line: format!("Author: {}", book.author.display_name()),
            publisher_line: format!("Publisher: {}", book.publisher.name),
            year: book.year,
            pages: book.page,
            isbn_short: short_isbn(&book.isbn),
            price_display: format!("${:.2}", book.price),
        }
    }
}

/// Summary counters shown alongside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_books: usize,
    pub distinct_categories: usize,
}

/// The complete renderable projection of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// One card per visible book, in visible-set order.
    pub cards: Vec<BookCard>,
    /// Counters over the full collection, not the visible subset.
    pub stats: CatalogStats,
}

impl CatalogView {
    /// Project the current state. Owns no state itself.
    pub fn project(state: &CatalogState) -> Self {
        let cards = state.visible().iter().map(BookCard::project).collect();
        Self {
            cards,
            stats: CatalogStats {
                total_books: state.total_books(),
                distinct_categories: state.distinct_categories(),
            },
        }
    }

    /// Whether the adapter should show the empty-state placeholder
    /// instead of the grid.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Display glyph for a category, used when no cover image is available.
pub fn category_glyph(category: &str) -> &'static str {
    match category {
        "IT" => "IT",
        "Science Fiction" => "SCI-FI",
        "Fantasy" => "FANTASY",
        "Mystery" => "MYSTERY",
        "Romance" => "ROMANCE",
        "Thriller" => "THRILLER",
        "Biography" => "BIO",
        "History" => "HISTORY",
        _ => "BOOK",
    }
}

/// A stored cover reference is usable when it looks like a remote URL or a
/// local image path; anything else falls back to the category glyph.
fn cover_art(book: &Book) -> CoverArt {
    match book.cover_photo.as_deref() {
        Some(path)
            if !path.is_empty() && (path.starts_with("http") || path.starts_with("images/")) =>
        {
            CoverArt::Image(path.to_string())
        }
        _ => CoverArt::Glyph(category_glyph(&book.category)),
    }
}

fn short_isbn(isbn: &str) -> String {
    let prefix: String = isbn.chars().take(10).collect();
    format!("{prefix}...")
}
