use thiserror::Error;

use crate::response::Response;

#[derive(Error, Debug)]
pub enum GitLabError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        response: Box<Response>,
    },

    #[error("JSON decode error (HTTP {}): {source}", .response.status)]
    Decode {
        #[source]
        source: serde_json::Error,
        response: Box<Response>,
    },

    #[error("JSON encode error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitLabError>;

impl GitLabError {
    /// Raw response that produced this error, if the server answered at all.
    pub fn response(&self) -> Option<&Response> {
        match self {
            GitLabError::Api { response, .. } | GitLabError::Decode { response, .. } => {
                Some(response)
            }
            GitLabError::Http(_) | GitLabError::Serialize(_) => None,
        }
    }

    /// HTTP status of the response, if any.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Pull a human-readable message out of a GitLab error body.
///
/// GitLab returns `{"message": ...}`, `{"error": ...}` or
/// `{"error_description": ...}`; `message` may itself be an object of
/// field errors, which is rendered as compact JSON.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "error_description"] {
            match value.get(key) {
                Some(serde_json::Value::String(msg)) => return msg.clone(),
                Some(serde_json::Value::Null) | None => {}
                Some(other) => return other.to_string(),
            }
        }
    }

    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}
