//! Error type shared by controllers, API clients and use cases

use reqwest::StatusCode;
use thiserror::Error;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Ошибки консоли. `Clone`, потому что контроллер хранит последнюю ошибку в состоянии.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Filter key outside the screen vocabulary
    #[error("unknown filter field '{field}' for screen '{screen}'")]
    InvalidField { screen: &'static str, field: String },

    /// Input rejected on the client, never sent to the store
    #[error("{0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Rejected by the store (or by the client-side stock check)
    #[error("{0}")]
    Conflict(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl ConsoleError {
    /// Ошибка по HTTP-статусу ответа; `body` уже прочитан вызывающим кодом
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = error_message(body).unwrap_or_else(|| format!("HTTP {}", status));
        match status.as_u16() {
            404 => ConsoleError::NotFound(message),
            400 | 409 | 422 => ConsoleError::Conflict(message),
            _ => ConsoleError::Transport(message),
        }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ConsoleError::Transport(format!("request timed out: {}", e))
        } else {
            ConsoleError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        ConsoleError::Transport(format!("undecodable response: {}", e))
    }
}

/// Достаёт текст ошибки из тела ответа DRF: `{"error": ...}`, `{"detail": ...}`
/// или `{"field": ["msg", ...]}`.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;
    for key in ["error", "detail", "message"] {
        if let Some(s) = obj.get(key).and_then(|v| v.as_str()) {
            return Some(s.to_string());
        }
    }
    let parts: Vec<String> = obj
        .iter()
        .filter_map(|(field, v)| {
            let msg = match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|i| i.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                _ => return None,
            };
            Some(format!("{}: {}", field, msg))
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}
