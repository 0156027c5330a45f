use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Raw values as read from the five inputs of the add-book form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub quantity: String,
    pub category: String,
}

/// The JSON payload sent to `POST /api/books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSubmission {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub quantity: i64,
    pub category: String,
}

impl BookSubmission {
    /// Builds a submission, rejecting it when `title`, `author` or `quantity` is missing.
    ///
    /// A quantity that parses to zero counts as missing.
    pub fn from_fields(fields: FormFields) -> Result<Self, SubmitError> {
        let quantity = parse_int(&fields.quantity).filter(|q| *q != 0);

        match quantity {
            Some(quantity) if !fields.title.is_empty() && !fields.author.is_empty() => Ok(Self {
                title: fields.title,
                author: fields.author,
                isbn: fields.isbn,
                quantity,
                category: fields.category,
            }),
            _ => Err(SubmitError::Validation),
        }
    }
}

/// A book as stored and returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogBook {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub quantity: i64,
    pub available: i64,
    pub category: String,
    pub location: String,
}

/// Body of a successful `POST /api/books`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAdded {
    pub message: String,
    pub book: CatalogBook,
}

/// Body of any failed API call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Leading-integer parsing as browsers do it for form input: skips leading whitespace,
/// accepts one sign and an optional `0x` prefix, then as many digits as follow. Trailing
/// junk is ignored. Values beyond `i64` saturate instead of failing.
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(radix))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.into_iter().fold(0i64, |acc, d| {
        acc.saturating_mul(i64::from(radix)).saturating_add(d)
    });
    Some(if negative { -value } else { value })
}
