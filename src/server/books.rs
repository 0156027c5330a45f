use std::sync::{Arc, Mutex};

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::datamodel::{BookAdded, CatalogBook};

const REQUIRED_FIELDS: [&str; 3] = ["title", "author", "quantity"];
const DEFAULT_CATEGORY: &str = "Uncategorized";
const DEFAULT_LOCATION: &str = "General Collection";

/// The books known to the server, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Arc<Mutex<Vec<CatalogBook>>>,
}

impl Catalog {
    pub fn books(&self) -> Vec<CatalogBook> {
        self.books.lock().unwrap().clone()
    }

    fn insert(&self, body: &Map<String, Value>, year: i32) -> Result<CatalogBook, ApiError> {
        for field in REQUIRED_FIELDS {
            if body.get(field).is_none_or(is_blank) {
                return Err(ApiError::MissingField(field));
            }
        }

        let quantity = parse_quantity(&body["quantity"])?;
        let isbn = optional_str(body, "isbn");

        let mut books = self.books.lock().unwrap();
        if let Some(isbn) = isbn.as_deref().filter(|i| !i.is_empty()) {
            if books.iter().any(|b| b.isbn.as_deref() == Some(isbn)) {
                return Err(ApiError::DuplicateIsbn);
            }
        }

        let book = CatalogBook {
            book_id: next_book_id(&books, year),
            title: string_value(&body["title"]),
            author: string_value(&body["author"]),
            isbn,
            quantity,
            available: quantity,
            category: optional_str(body, "category").unwrap_or_else(|| DEFAULT_CATEGORY.into()),
            location: optional_str(body, "location").unwrap_or_else(|| DEFAULT_LOCATION.into()),
        };
        books.push(book.clone());
        Ok(book)
    }
}

pub async fn list_books(State(catalog): State<Catalog>) -> Json<Vec<CatalogBook>> {
    Json(catalog.books())
}

pub async fn add_book(
    State(catalog): State<Catalog>,
    Json(body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<BookAdded>), ApiError> {
    let book = catalog.insert(&body, Utc::now().year())?;
    tracing::info!(book_id = %book.book_id, title = %book.title, "book added to catalog");

    Ok((
        StatusCode::CREATED,
        Json(BookAdded {
            message: "Book added successfully".into(),
            book,
        }),
    ))
}

/// `LIB-<year>-<NNNN>`, counting up from the latest id of the same year.
fn next_book_id(books: &[CatalogBook], year: i32) -> String {
    let prefix = format!("LIB-{year}-");
    let last = books
        .iter()
        .filter_map(|b| b.book_id.strip_prefix(&prefix))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:04}", last + 1)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn parse_quantity(value: &Value) -> Result<i64, ApiError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ApiError::Invalid("invalid quantity".into()))
}

fn string_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn optional_str(body: &Map<String, Value>, field: &str) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => Some(string_value(value)),
    }
}
