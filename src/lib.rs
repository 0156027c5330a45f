//! Add-book form handling for the library inventory page, plus the `/api/books`
//! endpoint it submits to.

pub mod client;
pub mod datamodel;
pub mod error;
pub mod form;
pub mod server;
pub mod settings;
pub mod widgets;
