use reqwest::Url;

use crate::datamodel::{BookSubmission, CatalogBook, ErrorBody};
use crate::error::ClientError;
use crate::settings::ClientSettings;

const BOOKS_PATH: &str = "api/books";

/// Talks to the `/api/books` endpoint of a catalog server.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    books: Url,
}

impl Client {
    /// `url` is the server root; the books path is appended to it.
    pub fn new(url: Url) -> Self {
        let mut books = url;
        let path = format!("{}/{BOOKS_PATH}", books.path().trim_end_matches('/'));
        books.set_path(&path);

        Self {
            client: reqwest::Client::new(),
            books,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        let url = Url::parse(&settings.base_url).map_err(|err| ClientError::InvalidUrl {
            url: settings.base_url.clone(),
            reason: err.to_string(),
        })?;
        Ok(Self::new(url))
    }

    /// Posts one submission. Any 2xx status counts as success; the body is not inspected.
    pub async fn add_book(&self, book: &BookSubmission) -> Result<(), ClientError> {
        tracing::debug!(url = %self.books, title = %book.title, "posting book");

        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(self.books.clone())
            .json(book)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(rejection(response).await)
    }

    pub async fn list_books(&self) -> Result<Vec<CatalogBook>, ClientError> {
        let response = self.client.get(self.books.clone()).send().await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(response.json().await?)
    }
}

async fn rejection(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        // An empty `error` counts as no message.
        Ok(body) => body.error.filter(|message| !message.is_empty()),
        Err(err) => {
            tracing::debug!(%status, %err, "error response has no JSON body");
            None
        }
    };
    ClientError::Rejected { status, message }
}
