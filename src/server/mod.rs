use axum::Router;
use axum::routing::get;

mod books;
mod error;

pub use books::Catalog;
pub use error::ApiError;

pub fn make_app() -> Router {
    make_app_with(Catalog::default())
}

pub fn make_app_with(catalog: Catalog) -> Router {
    Router::new()
        .route("/api/books", get(books::list_books).post(books::add_book))
        .with_state(catalog)
}
