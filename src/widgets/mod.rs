//! Handles to the page elements the add-book form works with.
//!
//! The handler never looks elements up by itself; the host passes them in as
//! [`FormElements`].

use std::sync::Arc;

mod memory;

pub use memory::{MemoryForm, MemoryInput, MemoryModal, MemoryRegion};

/// A text input whose current value can be read.
pub trait TextInput: Send + Sync {
    fn value(&self) -> String;
}

/// The form element itself.
pub trait FormControl: Send + Sync {
    /// Restores every input to its initial value.
    fn reset(&self);
}

/// Overlay panel the form lives in.
pub trait Modal: Send + Sync {
    fn hide(&self);
}

/// A notification area that can show a line of text.
pub trait Region: Send + Sync {
    fn set_text(&self, text: &str);
    fn set_visible(&self, visible: bool);
}

/// Every element the handler touches, keyed the way the page names them.
///
/// `bookTitle`, `bookAuthor`, `bookISBN`, `bookQuantity` and `bookCategory` are the
/// inputs, `addBookForm` the form, `addBookModal` the modal and `errorMessage` /
/// `successMessage` the banners. The modal and banners may be absent.
#[derive(Clone)]
pub struct FormElements {
    pub title: Arc<dyn TextInput>,
    pub author: Arc<dyn TextInput>,
    pub isbn: Arc<dyn TextInput>,
    pub quantity: Arc<dyn TextInput>,
    pub category: Arc<dyn TextInput>,
    pub form: Arc<dyn FormControl>,
    pub modal: Option<Arc<dyn Modal>>,
    pub error: Option<Arc<dyn Region>>,
    pub success: Option<Arc<dyn Region>>,
}
