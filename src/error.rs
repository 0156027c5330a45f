//! Error types shared by the form handler and the API client.

use reqwest::StatusCode;
use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields";
pub const FALLBACK_MESSAGE: &str = "Error adding book";

/// Why a submission did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A required field was empty; no request was made.
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    /// The request failed or the server rejected it.
    #[error("{message}")]
    Request { message: String },
}

impl SubmitError {
    /// The text shown in the error banner.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid server url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
}

impl From<ClientError> for SubmitError {
    fn from(err: ClientError) -> Self {
        let message = match err {
            ClientError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message,
            _ => FALLBACK_MESSAGE.to_string(),
        };
        SubmitError::Request { message }
    }
}
