// src/core/error.rs
//! Error type shared by the service clients

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unauthorized: {}", .0.as_deref().unwrap_or("no message"))]
    Unauthorized(Option<String>),

    #[error("Not found: {}", .0.as_deref().unwrap_or("no message"))]
    NotFound(Option<String>),

    #[error("Service returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Map a non-success status and its `{ "message": ... }` body, if any
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => ClientError::Unauthorized(message),
            404 => ClientError::NotFound(message),
            _ => ClientError::Api { status, message },
        }
    }

    /// The message the service put in its error body, suitable for a notification
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Unauthorized(message)
            | ClientError::NotFound(message)
            | ClientError::Api { message, .. } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }

    /// Server message, or the given fallback text
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClientError::NotFound(_) | ClientError::Api { status: 404, .. }
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            ClientError::from_status(401, None),
            ClientError::Unauthorized(None)
        ));
        assert!(ClientError::from_status(404, None).is_not_found());
        assert!(!ClientError::from_status(500, None).is_not_found());
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let error = ClientError::from_status(400, Some("Application not found".to_string()));
        assert_eq!(error.user_message("Failed to update"), "Application not found");

        let error = ClientError::from_status(500, Some("  ".to_string()));
        assert_eq!(error.user_message("Failed to update"), "Failed to update");

        assert_eq!(ClientError::Timeout.user_message("Failed to update"), "Failed to update");
    }
}
