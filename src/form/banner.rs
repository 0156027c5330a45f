use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::widgets::Region;

/// A notification region that hides itself a fixed time after its latest message.
///
/// Showing a new message cancels the hide scheduled by the previous one, so a
/// message always stays up for the full delay.
pub struct Banner {
    region: Option<Arc<dyn Region>>,
    hide_after: Duration,
    pending_hide: Mutex<Option<JoinHandle<()>>>,
}

impl Banner {
    pub fn new(region: Option<Arc<dyn Region>>, hide_after: Duration) -> Self {
        Self {
            region,
            hide_after,
            pending_hide: Mutex::new(None),
        }
    }

    /// Does nothing when the page has no such region. Must be called inside a tokio runtime.
    pub fn show(&self, message: &str) {
        let Some(region) = &self.region else {
            return;
        };

        region.set_text(message);
        region.set_visible(true);

        // The deadline is fixed now, not when the task first gets polled.
        let deadline = Instant::now() + self.hide_after;
        let region = region.clone();
        let hide = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            region.set_visible(false);
        });

        if let Some(previous) = self.pending_hide.lock().unwrap().replace(hide) {
            previous.abort();
        }
    }
}
