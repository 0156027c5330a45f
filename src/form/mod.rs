use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::Client;
use crate::datamodel::{BookSubmission, FormFields};
use crate::error::{ClientError, SubmitError};
use crate::settings::Settings;
use crate::widgets::FormElements;

mod banner;

pub use banner::Banner;

pub const SUCCESS_MESSAGE: &str = "Book added successfully";
pub const DEFAULT_HIDE_AFTER: Duration = Duration::from_secs(5);

/// Submits the add-book form to the catalog API and reports the outcome on the page.
pub struct AddBookHandler {
    elements: FormElements,
    client: Client,
    error: Banner,
    success: Banner,
}

impl AddBookHandler {
    pub fn new(elements: FormElements, client: Client, hide_after: Duration) -> Self {
        let error = Banner::new(elements.error.clone(), hide_after);
        let success = Banner::new(elements.success.clone(), hide_after);
        Self {
            elements,
            client,
            error,
            success,
        }
    }

    /// Posts to `client.base_url` and hides banners after `banner.hide_after_ms`.
    pub fn from_settings(
        elements: FormElements,
        settings: &Settings,
    ) -> Result<Self, ClientError> {
        let client = Client::from_settings(&settings.client)?;
        Ok(Self::new(elements, client, settings.banner.hide_after()))
    }

    fn read_fields(&self) -> FormFields {
        let e = &self.elements;
        FormFields {
            title: e.title.value(),
            author: e.author.value(),
            isbn: e.isbn.value(),
            quantity: e.quantity.value(),
            category: e.category.value(),
        }
    }

    /// Validates and posts the current form contents.
    ///
    /// Every failure has already been shown in the error banner when this returns.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let result = self.try_submit().await;
        match &result {
            Ok(()) => {
                self.show_success(SUCCESS_MESSAGE);
                self.elements.form.reset();
                if let Some(modal) = &self.elements.modal {
                    modal.hide();
                }
            }
            Err(err) => self.show_error(&err.message()),
        }
        result
    }

    async fn try_submit(&self) -> Result<(), SubmitError> {
        let book = BookSubmission::from_fields(self.read_fields())?;

        self.client.add_book(&book).await.map_err(|err| {
            tracing::warn!(%err, title = %book.title, "adding book failed");
            SubmitError::from(err)
        })?;

        tracing::info!(title = %book.title, quantity = book.quantity, "book added");
        Ok(())
    }

    pub fn show_error(&self, message: &str) {
        self.error.show(message);
    }

    pub fn show_success(&self, message: &str) {
        self.success.show(message);
    }
}

/// A submit event raised by the page.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: Arc<AtomicBool>,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the page from performing its own form submission.
    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }
}

/// Attaches the handler to the form's submit events once the page is ready.
///
/// Returns `Ok(None)` and attaches nothing when the page has no add-book form. Each
/// event starts its own submission; overlapping submissions are not coordinated.
pub fn wire(
    elements: Option<FormElements>,
    settings: &Settings,
    mut events: mpsc::Receiver<SubmitEvent>,
) -> Result<Option<JoinHandle<()>>, ClientError> {
    let Some(elements) = elements else {
        tracing::debug!("no add-book form on the page");
        return Ok(None);
    };
    let handler = Arc::new(AddBookHandler::from_settings(elements, settings)?);

    Ok(Some(tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            event.prevent_default();
            let handler = handler.clone();
            tokio::spawn(async move {
                // The outcome is already on the page.
                let _ = handler.submit().await;
            });
        }
        tracing::debug!("submit events closed, detaching form handler");
    })))
}
