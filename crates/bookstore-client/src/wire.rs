//! Wire documents for the bookstore service.
//!
//! The service stores books as Mongo-style documents: the identifier travels
//! as `_id`, all other keys are camelCase. These structs stay private; the
//! public surface speaks folio-core domain types.

use folio_core::{Author, Book, BookDraft, Publisher};
use serde::{Deserialize, Serialize};

/// A stored book as the service serializes it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub year: i32,
    pub price: f64,
    pub page: u32,
    pub category: String,
    #[serde(default)]
    pub cover_photo: Option<String>,
    pub author: AuthorDoc,
    pub publisher: PublisherDoc,
}

/// A draft as submitted for create and update; never carries an id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DraftDoc {
    pub isbn: String,
    pub title: String,
    pub year: i32,
    pub price: f64,
    pub page: u32,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
    pub author: AuthorDoc,
    pub publisher: PublisherDoc,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthorDoc {
    pub identity_no: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PublisherDoc {
    pub id: i64,
    pub name: String,
}

/// Structured error payload: `{"error": "<message>"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Delete acknowledgement: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Ack {
    #[allow(dead_code)]
    pub message: String,
}

impl From<BookDoc> for Book {
    fn from(doc: BookDoc) -> Self {
        Book {
            id: doc.id,
            isbn: doc.isbn,
            title: doc.title,
            year: doc.year,
            price: doc.price,
            page: doc.page,
            category: doc.category,
            cover_photo: doc.cover_photo,
            author: Author {
                identity_no: doc.author.identity_no,
                first_name: doc.author.first_name,
                last_name: doc.author.last_name,
            },
            publisher: Publisher {
                id: doc.publisher.id,
                name: doc.publisher.name,
            },
        }
    }
}

impl From<&BookDraft> for DraftDoc {
    fn from(draft: &BookDraft) -> Self {
        DraftDoc {
            isbn: draft.isbn.clone(),
            title: draft.title.clone(),
            year: draft.year,
            price: draft.price,
            page: draft.page,
            category: draft.category.clone(),
            cover_photo: draft.cover_photo.clone(),
            author: AuthorDoc {
                identity_no: draft.author.identity_no.clone(),
                first_name: draft.author.first_name.clone(),
                last_name: draft.author.last_name.clone(),
            },
            publisher: PublisherDoc {
                id: draft.publisher.id,
                name: draft.publisher.name.clone(),
            },
        }
    }
}
