//! Form marshalling for the create/edit dialog.
//!
//! [`BookForm`] holds the flat field buffers behind the modal dialog and
//! maps between them and structured [`BookDraft`] records, in both
//! directions. The dialog is either closed, creating, or editing; which book
//! an edit targets is the catalog state's editing reference, not form state.

use thiserror::Error;

use crate::domain::{Author, Book, BookDraft, Publisher};

/// Dialog mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit,
}

/// Raised when submitted fields cannot be coerced into a draft.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid year: {0}")]
    InvalidYear(String),
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
    #[error("Invalid page count: {0}")]
    InvalidPage(String),
    #[error("Invalid publisher id: {0}")]
    InvalidPublisherId(String),
}

/// Flat field buffers for the book dialog.
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub mode: FormMode,
    pub isbn: String,
    pub title: String,
    pub year: String,
    pub price: String,
    pub page: String,
    pub category: String,
    pub cover_photo: String,
    pub author_identity_no: String,
    pub author_first_name: String,
    pub author_last_name: String,
    pub publisher_id: String,
    pub publisher_name: String,
}

impl BookForm {
    /// Open in create mode with every field cleared.
    pub fn open_create(&mut self) {
        *self = Self {
            mode: FormMode::Create,
            ..Self::default()
        };
    }

    /// Open in edit mode, every field populated from `book`.
    pub fn open_edit(&mut self, book: &Book) {
        *self = Self {
            mode: FormMode::Edit,
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            year: book.year.to_string(),
            price: book.price.to_string(),
            page: book.page.to_string(),
            category: book.category.clone(),
            cover_photo: book.cover_photo.clone().unwrap_or_default(),
            author_identity_no: book.author.identity_no.clone(),
            author_first_name: book.author.first_name.clone(),
            author_last_name: book.author.last_name.clone(),
            publisher_id: book.publisher.id.to_string(),
            publisher_name: book.publisher.name.clone(),
        };
    }

    /// Close the dialog and clear every field.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    /// Read all fields into a draft.
    ///
    /// Year and page are coerced to integers, price to a decimal. When no
    /// cover reference was supplied, one is synthesized from the title.
    pub fn to_draft(&self) -> Result<BookDraft, FormError> {
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidYear(self.year.clone()))?;
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| FormError::InvalidPrice(self.price.clone()))?;
        let page = self
            .page
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidPage(self.page.clone()))?;
        let publisher_id = self
            .publisher_id
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::InvalidPublisherId(self.publisher_id.clone()))?;

        let cover_photo = if self.cover_photo.trim().is_empty() {
            synthesized_cover_path(&self.title)
        } else {
            self.cover_photo.trim().to_string()
        };

        Ok(BookDraft {
            isbn: self.isbn.clone(),
            title: self.title.clone(),
            year,
            price,
            page,
            category: self.category.clone(),
            cover_photo: Some(cover_photo),
            author: Author::new(
                self.author_identity_no.clone(),
                self.author_first_name.clone(),
                self.author_last_name.clone(),
            ),
            publisher: Publisher::new(publisher_id, self.publisher_name.clone()),
        })
    }
}

/// Local image path derived from the title: lower-cased, spaces to hyphens.
pub fn synthesized_cover_path(title: &str) -> String {
    format!("images/{}.jpg", title.to_lowercase().replace(' ', "-"))
}
