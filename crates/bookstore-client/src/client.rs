//! HTTP gateway to the bookstore service.

use std::time::Duration;

use folio_core::{Book, BookDraft};
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::error::ClientError;
use crate::wire::{Ack, BookDoc, DraftDoc, ErrorBody};

/// Base address of the bookstore service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Stateless gateway translating catalog operations into remote calls.
pub struct BookstoreClient {
    client: Client,
    base_url: Url,
}

impl BookstoreClient {
    /// Client against the built-in base address.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an explicit base address (tests, alternate deployments).
    pub fn with_base_url(base: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base).map_err(|_| ClientError::InvalidUrl {
            url: base.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// All books in the collection.
    pub async fn list(&self) -> Result<Vec<Book>, ClientError> {
        let response = self.client.get(self.books_url()?).send().await?;
        let docs: Vec<BookDoc> = decode(response).await?;
        Ok(docs.into_iter().map(Book::from).collect())
    }

    /// A single book by id.
    pub async fn get(&self, id: &str) -> Result<Book, ClientError> {
        let response = self.client.get(self.book_url(id)?).send().await?;
        let doc: BookDoc = decode(response).await?;
        Ok(doc.into())
    }

    /// Create a book; returns the stored record with its server-assigned id.
    pub async fn create(&self, draft: &BookDraft) -> Result<Book, ClientError> {
        let response = self
            .client
            .post(self.books_url()?)
            .json(&DraftDoc::from(draft))
            .send()
            .await?;
        let doc: BookDoc = decode(response).await?;
        Ok(doc.into())
    }

    /// Replace the book with `id`; returns the updated record.
    pub async fn update(&self, id: &str, draft: &BookDraft) -> Result<Book, ClientError> {
        let response = self
            .client
            .put(self.book_url(id)?)
            .json(&DraftDoc::from(draft))
            .send()
            .await?;
        let doc: BookDoc = decode(response).await?;
        Ok(doc.into())
    }

    /// Delete the book with `id`. Acknowledgement only.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let response = self.client.delete(self.book_url(id)?).send().await?;
        let _ack: Ack = decode(response).await?;
        Ok(())
    }

    /// Liveness probe against the service.
    pub async fn health(&self) -> Result<(), ClientError> {
        let response = self.client.get(self.join("/health")?).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_for(response.status(), &response.text().await.unwrap_or_default()))
        }
    }

    fn books_url(&self) -> Result<Url, ClientError> {
        self.join("/books")
    }

    fn book_url(&self, id: &str) -> Result<Url, ClientError> {
        self.join(&format!("/books/{id}"))
    }

    fn join(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url.join(path).map_err(|_| ClientError::InvalidUrl {
            url: format!("{}{path}", self.base_url),
        })
    }
}

/// Decode a success body, or map a failure response to its error kind.
async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(error_for(status, &body))
    }
}

/// 404 means the record is unknown; any other non-success status is a
/// validation rejection when the service said why, a bare server error
/// otherwise.
fn error_for(status: StatusCode, body: &str) -> ClientError {
    if status == StatusCode::NOT_FOUND {
        return ClientError::NotFound;
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ClientError::Validation {
            message: parsed.error,
        },
        Err(_) => ClientError::Server {
            status: status.as_u16(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let client = BookstoreClient::with_base_url("http://localhost:5001").unwrap();
        assert_eq!(
            client.books_url().unwrap().as_str(),
            "http://localhost:5001/books"
        );
        assert_eq!(
            client.book_url("665f1c2a").unwrap().as_str(),
            "http://localhost:5001/books/665f1c2a"
        );
    }

    #[test]
    fn test_rejects_invalid_base_address() {
        assert!(matches!(
            BookstoreClient::with_base_url("not a url"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_not_found_wins_over_error_body() {
        let err = error_for(StatusCode::NOT_FOUND, r#"{"error": "Book not found"}"#);
        assert_eq!(err, ClientError::NotFound);
    }

    #[test]
    fn test_error_body_message_is_surfaced() {
        let err = error_for(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Missing required field: isbn"}"#,
        );
        assert_eq!(
            err,
            ClientError::Validation {
                message: "Missing required field: isbn".to_string()
            }
        );
        assert_eq!(err.to_string(), "Missing required field: isbn");
    }

    #[test]
    fn test_unparseable_body_is_a_server_error() {
        let err = error_for(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err, ClientError::Server { status: 500 });
    }
}
