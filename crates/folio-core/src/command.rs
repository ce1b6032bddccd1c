//! User-intent commands and their state transitions.
//!
//! Every user gesture maps to one [`Command`]; applying a command mutates
//! the session and yields at most one gateway [`Effect`]. The dispatch table
//! is testable independently of any input surface, and the shell that owns
//! the gateway reports completions back through the `on_*` methods.

use thiserror::Error;

use crate::domain::{Book, BookDraft};
use crate::filter::CategoryFilter;
use crate::form::{BookForm, FormError, FormMode};
use crate::state::CatalogState;

/// A user intent, decoupled from the input surface that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Reload the full collection from the remote store.
    Reload,
    /// Open the dialog in create mode.
    OpenCreate,
    /// Open the dialog in edit mode for the book with this id.
    OpenEdit(String),
    /// Close the dialog without submitting.
    CloseForm,
    /// Submit the dialog in its current mode.
    SubmitForm,
    /// Replace the search term.
    SetSearch(String),
    /// Select the active category filter (mutually exclusive).
    SetFilter(CategoryFilter),
    /// Ask for confirmation before deleting the book with this id.
    RequestDelete(String),
    /// Confirm the pending deletion.
    ConfirmDelete,
    /// Decline the pending deletion; nothing is issued.
    CancelDelete,
}

/// A remote operation requested by a command, to be executed by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Load,
    Create(BookDraft),
    Update(String, BookDraft),
    Delete(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("{0}")]
    Form(#[from] FormError),
    #[error("No such book: {0}")]
    UnknownBook(String),
}

/// Catalog state plus the transient dialog and confirmation state,
/// with the command dispatch table over all of it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: CatalogState,
    pub form: BookForm,
    /// Id awaiting delete confirmation, if any.
    pub pending_delete: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command, returning the gateway effect it requests, if any.
    pub fn apply(&mut self, command: Command) -> Result<Option<Effect>, DispatchError> {
        tracing::debug!(?command, "dispatch");
        match command {
            Command::Reload => Ok(Some(Effect::Load)),
            Command::OpenCreate => {
                self.state.editing = None;
                self.form.open_create();
                Ok(None)
            }
            Command::OpenEdit(id) => {
                let book = self
                    .state
                    .book(&id)
                    .cloned()
                    .ok_or_else(|| DispatchError::UnknownBook(id.clone()))?;
                self.form.open_edit(&book);
                self.state.editing = Some(id);
                Ok(None)
            }
            Command::CloseForm => {
                self.form.close();
                self.state.editing = None;
                Ok(None)
            }
            Command::SubmitForm => {
                let draft = self.form.to_draft()?;
                match &self.state.editing {
                    Some(id) => Ok(Some(Effect::Update(id.clone(), draft))),
                    None => Ok(Some(Effect::Create(draft))),
                }
            }
            Command::SetSearch(term) => {
                self.state.search = term;
                Ok(None)
            }
            Command::SetFilter(filter) => {
                self.state.filter = filter;
                Ok(None)
            }
            Command::RequestDelete(id) => {
                self.pending_delete = Some(id);
                Ok(None)
            }
            Command::ConfirmDelete => Ok(self.pending_delete.take().map(Effect::Delete)),
            Command::CancelDelete => {
                self.pending_delete = None;
                Ok(None)
            }
        }
    }

    /// A full fetch finished.
    pub fn on_loaded(&mut self, books: Vec<Book>) {
        self.state.set_books(books);
    }

    /// A create succeeded; the dialog closes in every mode.
    pub fn on_created(&mut self, book: Book) {
        self.state.apply_create(book);
        self.form.close();
        self.state.editing = None;
    }

    /// An update succeeded; the dialog closes in every mode.
    pub fn on_updated(&mut self, book: Book) {
        self.state.apply_update(book);
        self.form.close();
        self.state.editing = None;
    }

    /// A delete succeeded.
    pub fn on_deleted(&mut self, id: &str) {
        self.state.apply_delete(id);
    }

    /// Whether the dialog is currently open.
    pub fn form_open(&self) -> bool {
        self.form.mode != FormMode::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, Publisher};

    fn seeded() -> Session {
        let mut session = Session::new();
        session.on_loaded(vec![Book {
            id: "b1".to_string(),
            isbn: "978-0441172719".to_string(),
            title: "Dune".to_string(),
            year: 1965,
            price: 9.99,
            page: 412,
            category: "Science Fiction".to_string(),
            cover_photo: None,
            author: Author::new("A-1", "Frank", "Herbert"),
            publisher: Publisher::new(7, "Ace"),
        }]);
        session
    }

    #[test]
    fn test_open_create_clears_editing_reference() {
        let mut session = seeded();
        session.apply(Command::OpenEdit("b1".to_string())).unwrap();
        assert_eq!(session.state.editing.as_deref(), Some("b1"));

        session.apply(Command::OpenCreate).unwrap();
        assert!(session.state.editing.is_none());
        assert_eq!(session.form.mode, FormMode::Create);
        assert!(session.form.title.is_empty());
    }

    #[test]
    fn test_submit_in_edit_mode_is_update_for_that_id() {
        let mut session = seeded();
        session.apply(Command::OpenEdit("b1".to_string())).unwrap();
        let effect = session.apply(Command::SubmitForm).unwrap().unwrap();
        match effect {
            Effect::Update(id, draft) => {
                assert_eq!(id, "b1");
                assert_eq!(draft.title, "Dune");
            }
            other => panic!("expected update effect, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_without_editing_reference_is_create() {
        let mut session = seeded();
        session.apply(Command::OpenCreate).unwrap();
        session.form.isbn = "978-0547928227".to_string();
        session.form.title = "The Hobbit".to_string();
        session.form.year = "1937".to_string();
        session.form.price = "14.99".to_string();
        session.form.page = "310".to_string();
        session.form.category = "Fantasy".to_string();
        session.form.author_identity_no = "A-42".to_string();
        session.form.author_first_name = "J.R.R.".to_string();
        session.form.author_last_name = "Tolkien".to_string();
        session.form.publisher_id = "3".to_string();
        session.form.publisher_name = "Allen & Unwin".to_string();

        let effect = session.apply(Command::SubmitForm).unwrap().unwrap();
        assert!(matches!(effect, Effect::Create(_)));
    }

    #[test]
    fn test_submit_with_bad_field_keeps_dialog_open() {
        let mut session = seeded();
        session.apply(Command::OpenEdit("b1".to_string())).unwrap();
        session.form.year = "not a year".to_string();

        let err = session.apply(Command::SubmitForm).unwrap_err();
        assert!(matches!(err, DispatchError::Form(FormError::InvalidYear(_))));
        assert!(session.form_open());
        assert_eq!(session.state.editing.as_deref(), Some("b1"));
    }

    #[test]
    fn test_create_success_closes_and_patches() {
        let mut session = seeded();
        session.apply(Command::OpenCreate).unwrap();
        session.on_created(Book {
            id: "b2".to_string(),
            isbn: "978-0547928227".to_string(),
            title: "The Hobbit".to_string(),
            year: 1937,
            price: 14.99,
            page: 310,
            category: "Fantasy".to_string(),
            cover_photo: None,
            author: Author::new("A-42", "J.R.R.", "Tolkien"),
            publisher: Publisher::new(3, "Allen & Unwin"),
        });
        assert!(!session.form_open());
        assert_eq!(session.state.total_books(), 2);
        assert_eq!(session.state.books[1].id, "b2");
    }

    #[test]
    fn test_confirm_delete_yields_single_delete_effect() {
        let mut session = seeded();
        session
            .apply(Command::RequestDelete("b1".to_string()))
            .unwrap();
        let effect = session.apply(Command::ConfirmDelete).unwrap();
        assert_eq!(effect, Some(Effect::Delete("b1".to_string())));
        // The prompt is consumed; confirming again issues nothing.
        assert_eq!(session.apply(Command::ConfirmDelete).unwrap(), None);
    }

    #[test]
    fn test_cancel_delete_issues_nothing_and_changes_nothing() {
        let mut session = seeded();
        let before = session.state.clone();
        session
            .apply(Command::RequestDelete("b1".to_string()))
            .unwrap();
        let effect = session.apply(Command::CancelDelete).unwrap();
        assert_eq!(effect, None);
        assert!(session.pending_delete.is_none());
        assert_eq!(session.state.books, before.books);
        assert_eq!(session.state.total_books(), 1);
    }

    #[test]
    fn test_open_edit_unknown_id_fails() {
        let mut session = seeded();
        let err = session.apply(Command::OpenEdit("ghost".to_string())).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownBook(_)));
        assert!(!session.form_open());
    }

    #[test]
    fn test_filter_and_search_commands() {
        let mut session = seeded();
        session
            .apply(Command::SetFilter(CategoryFilter::Category(
                "Fantasy".to_string(),
            )))
            .unwrap();
        assert!(session.state.visible().is_empty());

        session
            .apply(Command::SetFilter(CategoryFilter::All))
            .unwrap();
        session
            .apply(Command::SetSearch("herbert".to_string()))
            .unwrap();
        let visible = session.state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Dune");
    }
}
