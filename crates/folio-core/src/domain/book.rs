//! Book domain model

use serde::{Deserialize, Serialize};

/// Represents the author of a book
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub identity_no: String,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(
        identity_no: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            identity_no: identity_no.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Format as "First Last" for display
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Represents the publisher of a book
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Publisher {
    pub id: i64,
    pub name: String,
}

impl Publisher {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A book record as held by the remote store.
///
/// The id is assigned by the store on creation and immutable afterwards;
/// every other field is client-editable.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub year: i32,
    pub price: f64,
    pub page: u32,
    pub category: String,
    pub cover_photo: Option<String>,
    pub author: Author,
    pub publisher: Publisher,
}

impl Book {
    /// Attach a server-assigned id to a draft.
    pub fn from_draft(id: impl Into<String>, draft: BookDraft) -> Self {
        Self {
            id: id.into(),
            isbn: draft.isbn,
            title: draft.title,
            year: draft.year,
            price: draft.price,
            page: draft.page,
            category: draft.category,
            cover_photo: draft.cover_photo,
            author: draft.author,
            publisher: draft.publisher,
        }
    }
}

/// A book record lacking a server-assigned id, submitted for creation
/// or as the replacement body of an update.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BookDraft {
    pub isbn: String,
    pub title: String,
    pub year: i32,
    pub price: f64,
    pub page: u32,
    pub category: String,
    pub cover_photo: Option<String>,
    pub author: Author,
    pub publisher: Publisher,
}

impl From<Book> for BookDraft {
    fn from(book: Book) -> Self {
        Self {
            isbn: book.isbn,
            title: book.title,
            year: book.year,
            price: book.price,
            page: book.page,
            category: book.category,
            cover_photo: book.cover_photo,
            author: book.author,
            publisher: book.publisher,
        }
    }
}
